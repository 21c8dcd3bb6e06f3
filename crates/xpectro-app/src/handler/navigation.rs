//! Navigation handlers

use tracing::debug;
use xpectro_core::ViewId;

use crate::state::AppState;

use super::UpdateResult;

/// Views reachable with Tab/Shift+Tab; the login entry is reached through the dock
const CYCLE_ORDER: [ViewId; 6] = [
    ViewId::Dashboard,
    ViewId::Smishing,
    ViewId::FakeVoice,
    ViewId::Vishing,
    ViewId::Domains,
    ViewId::Pricing,
];

pub fn handle_navigate(state: &mut AppState, target: ViewId) -> UpdateResult {
    let from = state.active_view();
    if state.navigation.navigate(target) {
        state.reset_view_state();
        debug!("Navigated {} -> {}", from, target);
    }
    UpdateResult::none()
}

pub fn handle_navigate_by_name(state: &mut AppState, id: &str) -> UpdateResult {
    match ViewId::from_id(id) {
        Some(target) => handle_navigate(state, target),
        None => {
            debug!("Ignoring navigation to unknown view {:?}", id);
            UpdateResult::none()
        }
    }
}

pub fn handle_cycle_view(state: &mut AppState, forward: bool) -> UpdateResult {
    let current = CYCLE_ORDER.iter().position(|v| *v == state.active_view());
    let len = CYCLE_ORDER.len();
    let next = match (current, forward) {
        (Some(idx), true) => (idx + 1) % len,
        (Some(idx), false) => (idx + len - 1) % len,
        (None, true) => 0,
        (None, false) => len - 1,
    };
    handle_navigate(state, CYCLE_ORDER[next])
}

pub fn handle_set_sub_tab(state: &mut AppState, index: usize) -> UpdateResult {
    state.navigation.set_sub_tab(index);
    UpdateResult::none()
}

/// Activate a dock entry: run its action or navigate to it
pub fn handle_activate_entry(state: &mut AppState, index: usize) -> UpdateResult {
    let Some(entry) = state.catalog().into_iter().nth(index) else {
        debug!("No dock entry at index {}", index);
        return UpdateResult::none();
    };

    state.session.ui.mobile_menu_open = false;
    state.session.set_hovered_dock_item(None);
    UpdateResult::message(entry.activation())
}

pub fn handle_activate_hovered(state: &mut AppState) -> UpdateResult {
    let Some(hovered) = state.session.ui.hovered_dock_item else {
        return UpdateResult::none();
    };
    match state.catalog().iter().position(|e| e.id == hovered) {
        Some(index) => handle_activate_entry(state, index),
        None => UpdateResult::none(),
    }
}
