//! Filter, selection and per-view toggle handlers
//!
//! All of these act on the rendered view only. Behind the restricted
//! placeholder they are ignored.

use tracing::debug;
use xpectro_core::{DomainStatus, TaskStatus, ViewId};

use crate::message::{Message, ScopedQuery};
use crate::state::AppState;

use super::{visible_view, UpdateResult};

pub fn handle_set_filter_query(state: &mut AppState, query: ScopedQuery) -> UpdateResult {
    let view = visible_view(state);
    match query {
        ScopedQuery::Tasks(query) if view.is_some_and(|v| v.detection_kind().is_some()) => {
            state.view_state.task_query = query;
        }
        ScopedQuery::Domains(query) if view == Some(ViewId::Domains) => {
            state.view_state.domain_query = query;
            state.clamp_selection();
        }
        other => debug!("Filter query {:?} does not apply to {:?}", other, view),
    }
    UpdateResult::none()
}

pub fn handle_set_search_text(state: &mut AppState, text: String) -> UpdateResult {
    match visible_view(state) {
        Some(ViewId::Domains) => {
            state.view_state.domain_query.text = text;
            state.clamp_selection();
        }
        Some(view) if view.detection_kind().is_some() => {
            state.view_state.task_query.text = text;
        }
        _ => {}
    }
    UpdateResult::none()
}

pub fn handle_cycle_status_filter(state: &mut AppState) -> UpdateResult {
    match visible_view(state) {
        Some(ViewId::Domains) => {
            let query = &mut state.view_state.domain_query;
            query.status_filter = query.status_filter.cycle(&DomainStatus::ALL);
            state.clamp_selection();
        }
        Some(view) if view.detection_kind().is_some() => {
            let query = &mut state.view_state.task_query;
            query.status_filter = query.status_filter.cycle(&TaskStatus::ALL);
        }
        _ => {}
    }
    UpdateResult::none()
}

pub fn handle_select_step(state: &mut AppState, forward: bool) -> UpdateResult {
    let len = state.selection_len();
    if len == 0 {
        state.view_state.selected = 0;
        return UpdateResult::none();
    }
    let selected = &mut state.view_state.selected;
    *selected = if forward {
        (*selected + 1).min(len - 1)
    } else {
        selected.saturating_sub(1)
    };
    UpdateResult::none()
}

/// Dashboard stat cards open the view named by their route
pub fn handle_activate_selection(state: &mut AppState) -> UpdateResult {
    if visible_view(state) != Some(ViewId::Dashboard) {
        return UpdateResult::none();
    }
    match state.provider().stat_cards().get(state.view_state.selected) {
        Some(card) => UpdateResult::message(Message::NavigateByName(card.route.clone())),
        None => UpdateResult::none(),
    }
}

pub fn handle_toggle_pricing_period(state: &mut AppState) -> UpdateResult {
    if visible_view(state) == Some(ViewId::Pricing) {
        state.view_state.pricing_yearly = !state.view_state.pricing_yearly;
    }
    UpdateResult::none()
}
