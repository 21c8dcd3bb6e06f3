//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use xpectro_app::{AppState, UiMode, ViewModel};
use xpectro_core::ViewId;

use crate::theme::palette;
use crate::widgets::{self, DomainsFocus};

/// Human title of a view
pub fn view_title(view: ViewId) -> &'static str {
    match view {
        ViewId::Dashboard => "Dashboard",
        ViewId::Smishing => "Smishing Detection",
        ViewId::FakeVoice => "Deepfake Audio",
        ViewId::Vishing => "Vishing Monitor",
        ViewId::Domains => "Domain Security",
        ViewId::Pricing => "Pricing Plans",
        ViewId::Login => "Secure Login",
    }
}

/// Render the complete UI.
///
/// Pure with respect to `state`: everything shown comes from the view
/// model, the session flags and the menu catalog.
pub fn view(frame: &mut Frame, state: &AppState) {
    let p = palette::for_theme(state.session.theme);
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(p.background)), area);

    let hint_height = u16::from(state.settings.ui.show_hints);
    let [header_area, body_area, dock_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(4),
        Constraint::Length(3),
        Constraint::Length(hint_height),
    ])
    .areas(area);

    let active = state.active_view();
    frame.render_widget(
        widgets::MainHeader::new(view_title(active), p)
            .authenticated(state.session.authenticated)
            .theme(state.session.theme),
        header_area,
    );

    match state.view_model() {
        ViewModel::Restricted { requested } => frame.render_widget(
            widgets::RestrictedPlaceholder::new(view_title(requested), p),
            body_area,
        ),
        ViewModel::Dashboard(model) => {
            frame.render_widget(widgets::DashboardView::new(&model, p), body_area)
        }
        ViewModel::Detection(model) => frame.render_widget(
            widgets::DetectionView::new(&model, p).searching(state.ui_mode == UiMode::SearchInput),
            body_area,
        ),
        ViewModel::Domains(model) => {
            let focus = match state.ui_mode {
                UiMode::SearchInput => DomainsFocus::Search,
                UiMode::DomainInput => DomainsFocus::Form,
                _ => DomainsFocus::Table,
            };
            frame.render_widget(widgets::DomainsView::new(&model, p).focus(focus), body_area)
        }
        ViewModel::Pricing(model) => {
            frame.render_widget(widgets::PricingView::new(&model, p), body_area)
        }
        ViewModel::Login(model) => frame.render_widget(
            widgets::LoginView::new(&model, p)
                .editing(state.ui_mode == UiMode::LoginInput)
                .authenticated(state.session.authenticated),
            body_area,
        ),
    }

    let entries = state.catalog();
    frame.render_widget(
        widgets::Dock::new(&entries, active, p).hovered(state.session.ui.hovered_dock_item),
        dock_area,
    );

    if state.settings.ui.show_hints {
        frame.render_widget(
            widgets::StatusBar::new(widgets::hints_for(state), p),
            status_area,
        );
    }

    // Overlays, topmost last
    if state.session.ui.profile_panel_open && state.session.authenticated {
        frame.render_widget(widgets::ProfilePanel::new(p), body_area);
    }
    if state.session.ui.mobile_menu_open {
        frame.render_widget(
            widgets::MobileMenu::new(&entries, state.session.ui.hovered_dock_item, p),
            body_area,
        );
    }
    if state.ui_mode == UiMode::ConfirmQuit {
        frame.render_widget(widgets::ConfirmQuitDialog::new(p), area);
    }
}
