//! Read-only snapshot of the resolved view
//!
//! The presentation layer (TUI or headless output) pulls a [`ViewModel`]
//! after every processed message and renders only from it.

use serde::Serialize;
use xpectro_core::{
    DetectionContent, DetectionKind, DistributionSlice, DomainRecord, DomainStatus, FilterQuery,
    PricingPlan, Protocol, RadarAxis, ScanPoint, StatCard, TaskRecord, TaskStatus, ThreatPoint,
    ViewId,
};

use crate::gate::RenderTarget;
use crate::state::{AppState, LoginField};
use crate::views;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardModel {
    pub cards: Vec<StatCard>,
    pub weekly_threats: Vec<ThreatPoint>,
    pub distribution: Vec<DistributionSlice>,
    pub selected_card: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectionModel {
    #[serde(rename = "view_id")]
    pub view: ViewId,
    pub kind: DetectionKind,
    pub sub_tabs: &'static [&'static str],
    pub active_sub_tab: usize,
    pub query: FilterQuery<TaskStatus>,
    /// Tasks after applying `query`
    pub tasks: Vec<TaskRecord>,
    pub content: DetectionContent,
    pub monthly_scans: Vec<ScanPoint>,
    pub biometrics: Vec<RadarAxis>,
}

impl DetectionModel {
    /// Analytics tabs show charts instead of the task list
    pub fn is_analytics(&self) -> bool {
        self.sub_tabs
            .get(self.active_sub_tab)
            .is_some_and(|tab| tab.contains("Analytics"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainsModel {
    pub query: FilterQuery<DomainStatus>,
    /// Domains after applying `query`
    pub records: Vec<DomainRecord>,
    pub total: usize,
    pub ssl_enabled: usize,
    pub draft_url: String,
    pub draft_protocol: Protocol,
    pub selected: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingModel {
    pub yearly: bool,
    pub plans: Vec<PricingPlan>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginModel {
    pub email: String,
    /// Length only; the key itself never leaves the form
    pub access_key_len: usize,
    pub focus: LoginField,
}

/// The resolved view with the data it displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewModel {
    Restricted { requested: ViewId },
    Dashboard(DashboardModel),
    Detection(DetectionModel),
    Domains(DomainsModel),
    Pricing(PricingModel),
    Login(LoginModel),
}

impl AppState {
    /// Snapshot of what the access gate lets the user see
    pub fn view_model(&self) -> ViewModel {
        let (view, sub_tab) = match self.render_target() {
            RenderTarget::RestrictedPlaceholder => {
                return ViewModel::Restricted {
                    requested: self.active_view(),
                }
            }
            RenderTarget::View { view, sub_tab } => (view, sub_tab),
        };

        let provider = self.provider();
        let local = &self.view_state;

        match view {
            ViewId::Dashboard => ViewModel::Dashboard(DashboardModel {
                cards: provider.stat_cards(),
                weekly_threats: provider.weekly_threats(),
                distribution: provider.threat_distribution(),
                selected_card: local.selected,
            }),
            ViewId::Smishing => self.detection_model(view, DetectionKind::Smishing, sub_tab),
            ViewId::FakeVoice => self.detection_model(view, DetectionKind::Voice, sub_tab),
            ViewId::Vishing => self.detection_model(view, DetectionKind::Vishing, sub_tab),
            ViewId::Domains => ViewModel::Domains(DomainsModel {
                query: local.domain_query.clone(),
                records: self.visible_domains(),
                total: self.domains.total(),
                ssl_enabled: self.domains.ssl_enabled_count(),
                draft_url: local.domain_draft.url.clone(),
                draft_protocol: local.domain_draft.protocol,
                selected: local.selected,
            }),
            ViewId::Pricing => ViewModel::Pricing(PricingModel {
                yearly: local.pricing_yearly,
                plans: provider.pricing_plans(local.pricing_yearly),
            }),
            ViewId::Login => ViewModel::Login(LoginModel {
                email: local.login_form.email.clone(),
                access_key_len: local.login_form.access_key.chars().count(),
                focus: local.login_form.focus,
            }),
        }
    }

    fn detection_model(&self, view: ViewId, kind: DetectionKind, sub_tab: usize) -> ViewModel {
        let provider = self.provider();
        ViewModel::Detection(DetectionModel {
            view,
            kind,
            sub_tabs: views::sub_tabs(view),
            active_sub_tab: sub_tab,
            query: self.view_state.task_query.clone(),
            tasks: self.visible_tasks(),
            content: provider.detection_content(kind),
            monthly_scans: provider.monthly_scans(),
            biometrics: provider.biometrics(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logged_in() -> AppState {
        let mut state = AppState::new();
        state.session.login();
        state
    }

    #[test]
    fn test_restricted_reports_requested_view() {
        let mut state = AppState::new();
        state.navigation.navigate(ViewId::Domains);
        assert_eq!(
            state.view_model(),
            ViewModel::Restricted {
                requested: ViewId::Domains
            }
        );
    }

    #[test]
    fn test_dashboard_model() {
        let state = logged_in();
        match state.view_model() {
            ViewModel::Dashboard(model) => {
                assert_eq!(model.cards.len(), 3);
                assert_eq!(model.weekly_threats.len(), 7);
                assert_eq!(model.selected_card, 0);
            }
            other => panic!("expected dashboard, got {:?}", other),
        }
    }

    #[test]
    fn test_each_view_builds_its_own_model() {
        let mut state = logged_in();
        for view in ViewId::ALL {
            state.navigation.navigate(view);
            let model = state.view_model();
            let matches = match view {
                ViewId::Dashboard => matches!(model, ViewModel::Dashboard(_)),
                ViewId::Smishing | ViewId::FakeVoice | ViewId::Vishing => {
                    matches!(&model, ViewModel::Detection(m) if m.view == view)
                }
                ViewId::Domains => matches!(model, ViewModel::Domains(_)),
                ViewId::Pricing => matches!(model, ViewModel::Pricing(_)),
                ViewId::Login => matches!(model, ViewModel::Login(_)),
            };
            assert!(matches, "{} built {:?}", view, model);
        }
    }

    #[test]
    fn test_detection_model_tracks_sub_tab() {
        let mut state = logged_in();
        state.navigation.navigate(ViewId::Vishing);
        state.navigation.set_sub_tab(2);
        match state.view_model() {
            ViewModel::Detection(model) => {
                assert_eq!(model.kind, DetectionKind::Vishing);
                assert_eq!(model.sub_tabs.len(), 3);
                assert_eq!(model.active_sub_tab, 2);
                assert!(model.is_analytics());
                assert_eq!(model.content.title, "Vishing (Voice Phishing)");
            }
            other => panic!("expected detection, got {:?}", other),
        }
    }

    #[test]
    fn test_detection_first_tab_is_not_analytics() {
        let mut state = logged_in();
        state.navigation.navigate(ViewId::FakeVoice);
        match state.view_model() {
            ViewModel::Detection(model) => assert!(!model.is_analytics()),
            other => panic!("expected detection, got {:?}", other),
        }
    }

    #[test]
    fn test_domains_model_aggregates_ignore_filter() {
        let mut state = logged_in();
        state.navigation.navigate(ViewId::Domains);
        state.view_state.domain_query.text = "legacy".into();
        match state.view_model() {
            ViewModel::Domains(model) => {
                assert_eq!(model.records.len(), 1);
                assert_eq!(model.records[0].url, "legacy.xpectro-internal.net");
                assert_eq!(model.total, 2);
                assert_eq!(model.ssl_enabled, 1);
            }
            other => panic!("expected domains, got {:?}", other),
        }
    }

    #[test]
    fn test_login_model_hides_access_key() {
        let mut state = AppState::new();
        state.navigation.navigate(ViewId::Login);
        state.view_state.login_form.access_key = "hunter2".into();
        match state.view_model() {
            ViewModel::Login(model) => assert_eq!(model.access_key_len, 7),
            other => panic!("expected login, got {:?}", other),
        }
    }

    #[test]
    fn test_view_model_serializes_with_view_tag() {
        let state = AppState::new();
        let json = serde_json::to_value(state.view_model()).unwrap();
        assert_eq!(json["view"], "restricted");
        assert_eq!(json["requested"], "dashboard");
    }
}
