//! Application state (Model in TEA pattern)

use serde::Serialize;
use xpectro_core::{
    DataProvider, DemoData, DomainRecord, DomainRegistry, DomainStatus, FilterQuery, Protocol,
    TaskRecord, TaskStatus, ViewId,
};

use crate::config::Settings;
use crate::gate::{resolve_view, RenderTarget};
use crate::navigation::NavigationController;
use crate::session::SessionState;
use crate::views::{self, MenuEntry};

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Current input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UiMode {
    /// Keys navigate and trigger view actions
    #[default]
    Normal,
    /// Typing into the active list's search box
    SearchInput,
    /// Typing a url into the add-domain form
    DomainInput,
    /// Typing into the login form
    LoginInput,
    /// Quit confirmation dialog
    ConfirmQuit,
}

/// Login form field with focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginField {
    #[default]
    Email,
    AccessKey,
}

/// Draft values of the login form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub access_key: String,
    pub focus: LoginField,
}

/// Draft of the add-domain form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainDraft {
    pub url: String,
    pub protocol: Protocol,
}

/// State owned by the active top-level view.
///
/// Replaced with a fresh instance whenever the active view changes, so
/// returning to a view never restores its old search text or toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewLocalState {
    pub task_query: FilterQuery<TaskStatus>,
    pub domain_query: FilterQuery<DomainStatus>,
    pub domain_draft: DomainDraft,
    /// Selected row of the active list (stat cards or domains)
    pub selected: usize,
    pub pricing_yearly: bool,
    pub login_form: LoginForm,
}

impl ViewLocalState {
    fn for_settings(settings: &Settings) -> Self {
        Self {
            domain_draft: DomainDraft {
                url: String::new(),
                protocol: settings.domains.default_protocol,
            },
            ..Default::default()
        }
    }
}

/// Complete application state
pub struct AppState {
    pub phase: AppPhase,
    pub ui_mode: UiMode,
    pub settings: Settings,
    pub session: SessionState,
    pub navigation: NavigationController,
    pub domains: DomainRegistry,
    pub view_state: ViewLocalState,
    provider: Box<dyn DataProvider + Send>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self::with_provider(settings, Box::new(DemoData))
    }

    /// Build state backed by a custom data provider
    pub fn with_provider(settings: Settings, provider: Box<dyn DataProvider + Send>) -> Self {
        let domains = if settings.domains.seed_demo_data {
            DomainRegistry::with_records(provider.seed_domains())
        } else {
            DomainRegistry::new()
        };

        Self {
            phase: AppPhase::Running,
            ui_mode: UiMode::Normal,
            session: SessionState::new(settings.ui.theme),
            navigation: NavigationController::new(settings.behavior.start_view),
            domains,
            view_state: ViewLocalState::for_settings(&settings),
            settings,
            provider,
        }
    }

    pub fn provider(&self) -> &dyn DataProvider {
        self.provider.as_ref()
    }

    /// What should be rendered right now
    pub fn render_target(&self) -> RenderTarget {
        resolve_view(&self.navigation.current(), &self.session)
    }

    /// Dock entries for the current session
    pub fn catalog(&self) -> Vec<MenuEntry> {
        views::catalog(&self.session)
    }

    pub fn active_view(&self) -> ViewId {
        self.navigation.active_view()
    }

    /// Drop the active view's local state and leave any input mode
    pub fn reset_view_state(&mut self) {
        self.view_state = ViewLocalState::for_settings(&self.settings);
        if self.ui_mode != UiMode::ConfirmQuit {
            self.ui_mode = UiMode::Normal;
        }
    }

    /// Filtered task list of the active detection view (empty elsewhere)
    pub fn visible_tasks(&self) -> Vec<TaskRecord> {
        match self.active_view().detection_kind() {
            Some(kind) => self
                .view_state
                .task_query
                .apply(&self.provider.detection_tasks(kind)),
            None => Vec::new(),
        }
    }

    /// Filtered domain list
    pub fn visible_domains(&self) -> Vec<DomainRecord> {
        self.domains.filtered(&self.view_state.domain_query)
    }

    /// Number of selectable rows on the active view
    pub fn selection_len(&self) -> usize {
        match self.render_target() {
            RenderTarget::View {
                view: ViewId::Dashboard,
                ..
            } => self.provider.stat_cards().len(),
            RenderTarget::View {
                view: ViewId::Domains,
                ..
            } => self.visible_domains().len(),
            _ => 0,
        }
    }

    /// Keep the selection inside the current list
    pub fn clamp_selection(&mut self) {
        let len = self.selection_len();
        self.view_state.selected = self.view_state.selected.min(len.saturating_sub(1));
    }

    // ─────────────────────────────────────────────────────────
    // Quit flow
    // ─────────────────────────────────────────────────────────

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn request_quit(&mut self) {
        if self.settings.behavior.confirm_quit && self.session.authenticated {
            self.ui_mode = UiMode::ConfirmQuit;
        } else {
            self.phase = AppPhase::Quitting;
        }
    }

    pub fn confirm_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn cancel_quit(&mut self) {
        if self.ui_mode == UiMode::ConfirmQuit {
            self.ui_mode = UiMode::Normal;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_defaults() {
        let state = AppState::new();
        assert_eq!(state.phase, AppPhase::Running);
        assert_eq!(state.ui_mode, UiMode::Normal);
        assert!(!state.session.authenticated);
        assert_eq!(state.active_view(), ViewId::Dashboard);
        assert_eq!(state.domains.total(), 2);
        assert_eq!(state.render_target(), RenderTarget::RestrictedPlaceholder);
    }

    #[test]
    fn test_settings_drive_initial_state() {
        let mut settings = Settings::default();
        settings.ui.theme = xpectro_core::Theme::Light;
        settings.behavior.start_view = ViewId::Pricing;
        settings.domains.seed_demo_data = false;
        settings.domains.default_protocol = Protocol::Ftp;

        let state = AppState::with_settings(settings);
        assert_eq!(state.session.theme, xpectro_core::Theme::Light);
        assert_eq!(state.active_view(), ViewId::Pricing);
        assert!(state.domains.is_empty());
        assert_eq!(state.view_state.domain_draft.protocol, Protocol::Ftp);
    }

    #[test]
    fn test_visible_tasks_only_on_detection_views() {
        let mut state = AppState::new();
        assert!(state.visible_tasks().is_empty());
        state.navigation.navigate(ViewId::Smishing);
        assert_eq!(state.visible_tasks().len(), 3);
    }

    #[test]
    fn test_reset_view_state_keeps_default_protocol() {
        let mut settings = Settings::default();
        settings.domains.default_protocol = Protocol::Wp;
        let mut state = AppState::with_settings(settings);
        state.view_state.domain_draft.protocol = Protocol::Http;
        state.view_state.pricing_yearly = true;
        state.ui_mode = UiMode::SearchInput;

        state.reset_view_state();
        assert_eq!(state.view_state.domain_draft.protocol, Protocol::Wp);
        assert!(!state.view_state.pricing_yearly);
        assert_eq!(state.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_request_quit_without_confirmation() {
        let mut state = AppState::new();
        state.request_quit();
        assert!(state.should_quit());
    }

    #[test]
    fn test_request_quit_confirms_when_logged_in() {
        let mut settings = Settings::default();
        settings.behavior.confirm_quit = true;
        let mut state = AppState::with_settings(settings);
        state.session.login();

        state.request_quit();
        assert!(!state.should_quit());
        assert_eq!(state.ui_mode, UiMode::ConfirmQuit);

        state.cancel_quit();
        assert_eq!(state.ui_mode, UiMode::Normal);

        state.request_quit();
        state.confirm_quit();
        assert!(state.should_quit());
    }
}
