//! Domain registry handlers

use tracing::debug;
use xpectro_core::{Protocol, ViewId};

use crate::state::{AppState, UiMode};

use super::{visible_view, UpdateResult};

pub fn handle_add_domain(state: &mut AppState, url: &str, protocol: Protocol) -> UpdateResult {
    if state.domains.add(url, protocol).is_some() {
        state.clamp_selection();
    }
    UpdateResult::none()
}

/// Add the domain typed into the form; a blank draft changes nothing
pub fn handle_submit_draft(state: &mut AppState) -> UpdateResult {
    let draft = state.view_state.domain_draft.clone();
    if state.domains.add(&draft.url, draft.protocol).is_some() {
        state.view_state.domain_draft.url.clear();
        state.clamp_selection();
    }
    if state.ui_mode == UiMode::DomainInput {
        state.ui_mode = UiMode::Normal;
    }
    UpdateResult::none()
}

pub fn handle_remove_domain(state: &mut AppState, id: u64) -> UpdateResult {
    if state.domains.remove(id) {
        state.clamp_selection();
    }
    UpdateResult::none()
}

pub fn handle_remove_selected(state: &mut AppState) -> UpdateResult {
    if visible_view(state) != Some(ViewId::Domains) {
        return UpdateResult::none();
    }
    let selected = state.view_state.selected;
    match state.visible_domains().get(selected) {
        Some(record) => handle_remove_domain(state, record.id),
        None => {
            debug!("No domain row {} to remove", selected);
            UpdateResult::none()
        }
    }
}

pub fn handle_cycle_protocol(state: &mut AppState) -> UpdateResult {
    if visible_view(state) == Some(ViewId::Domains) {
        let draft = &mut state.view_state.domain_draft;
        draft.protocol = draft.protocol.cycle();
    }
    UpdateResult::none()
}
