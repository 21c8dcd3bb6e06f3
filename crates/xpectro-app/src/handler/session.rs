//! Session handlers: authentication, theme, shell flags

use xpectro_core::ViewId;

use crate::message::Message;
use crate::state::{AppState, LoginForm, UiMode};

use super::UpdateResult;

/// Mark the session authenticated. Does not navigate.
pub fn handle_login(state: &mut AppState) -> UpdateResult {
    state.session.login();
    UpdateResult::none()
}

/// Drop authentication and stay on the current view; the gate redirects
/// rendering on the next resolve. The profile panel belongs to the signed-in
/// shell and closes with it.
pub fn handle_logout(state: &mut AppState) -> UpdateResult {
    state.session.logout();
    state.session.close_profile_panel();
    if matches!(
        state.ui_mode,
        UiMode::SearchInput | UiMode::DomainInput | UiMode::LoginInput
    ) {
        state.ui_mode = UiMode::Normal;
    }
    UpdateResult::none()
}

/// Login form submitted: authenticate, then open the dashboard
pub fn handle_submit_login(state: &mut AppState) -> UpdateResult {
    state.session.login();
    state.view_state.login_form = LoginForm::default();
    state.ui_mode = UiMode::Normal;
    UpdateResult::message(Message::Navigate(ViewId::Dashboard))
}

pub fn handle_toggle_mobile_menu(state: &mut AppState) -> UpdateResult {
    state.session.toggle_mobile_menu();
    if state.session.ui.mobile_menu_open {
        let active = state.active_view();
        state.session.set_hovered_dock_item(Some(active));
    }
    UpdateResult::none()
}

/// Move the dock hover highlight, wrapping around the catalog
pub fn handle_hover_step(state: &mut AppState, forward: bool) -> UpdateResult {
    let entries = state.catalog();
    let len = entries.len();
    let current = state
        .session
        .ui
        .hovered_dock_item
        .and_then(|id| entries.iter().position(|e| e.id == id));

    let next = match (current, forward) {
        (Some(idx), true) => (idx + 1) % len,
        (Some(idx), false) => (idx + len - 1) % len,
        (None, true) => 0,
        (None, false) => len - 1,
    };
    state.session.set_hovered_dock_item(Some(entries[next].id));
    UpdateResult::none()
}
