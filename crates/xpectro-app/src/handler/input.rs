//! Text input mode handlers (search box, add-domain form, login form)

use xpectro_core::ViewId;

use crate::message::Message;
use crate::state::{AppState, LoginField, UiMode};

use super::{domains, visible_view, UpdateResult};

pub fn handle_start_search(state: &mut AppState) -> UpdateResult {
    match visible_view(state) {
        Some(view) if view == ViewId::Domains || view.detection_kind().is_some() => {
            state.ui_mode = UiMode::SearchInput;
        }
        _ => {}
    }
    UpdateResult::none()
}

pub fn handle_start_domain_input(state: &mut AppState) -> UpdateResult {
    if visible_view(state) == Some(ViewId::Domains) {
        state.ui_mode = UiMode::DomainInput;
    }
    UpdateResult::none()
}

pub fn handle_start_login_input(state: &mut AppState) -> UpdateResult {
    if visible_view(state) == Some(ViewId::Login) {
        state.ui_mode = UiMode::LoginInput;
    }
    UpdateResult::none()
}

/// Text buffer the current input mode writes to
fn active_buffer(state: &mut AppState) -> Option<&mut String> {
    let local = &mut state.view_state;
    match state.ui_mode {
        UiMode::SearchInput if state.navigation.active_view() == ViewId::Domains => {
            Some(&mut local.domain_query.text)
        }
        UiMode::SearchInput => Some(&mut local.task_query.text),
        UiMode::DomainInput => Some(&mut local.domain_draft.url),
        UiMode::LoginInput => Some(match local.login_form.focus {
            LoginField::Email => &mut local.login_form.email,
            LoginField::AccessKey => &mut local.login_form.access_key,
        }),
        UiMode::Normal | UiMode::ConfirmQuit => None,
    }
}

pub fn handle_input_char(state: &mut AppState, c: char) -> UpdateResult {
    if let Some(buffer) = active_buffer(state) {
        buffer.push(c);
    }
    if state.ui_mode == UiMode::SearchInput {
        state.clamp_selection();
    }
    UpdateResult::none()
}

pub fn handle_input_backspace(state: &mut AppState) -> UpdateResult {
    if let Some(buffer) = active_buffer(state) {
        buffer.pop();
    }
    if state.ui_mode == UiMode::SearchInput {
        state.clamp_selection();
    }
    UpdateResult::none()
}

pub fn handle_input_commit(state: &mut AppState) -> UpdateResult {
    match state.ui_mode {
        UiMode::SearchInput => {
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }
        UiMode::DomainInput => domains::handle_submit_draft(state),
        UiMode::LoginInput => match state.view_state.login_form.focus {
            LoginField::Email => handle_login_focus_next(state),
            LoginField::AccessKey => UpdateResult::message(Message::SubmitLogin),
        },
        UiMode::Normal | UiMode::ConfirmQuit => UpdateResult::none(),
    }
}

pub fn handle_input_cancel(state: &mut AppState) -> UpdateResult {
    match state.ui_mode {
        UiMode::SearchInput => {
            if let Some(buffer) = active_buffer(state) {
                buffer.clear();
            }
            state.clamp_selection();
        }
        UiMode::DomainInput => state.view_state.domain_draft.url.clear(),
        _ => {}
    }
    if state.ui_mode != UiMode::ConfirmQuit {
        state.ui_mode = UiMode::Normal;
    }
    UpdateResult::none()
}

pub fn handle_login_focus_next(state: &mut AppState) -> UpdateResult {
    let form = &mut state.view_state.login_form;
    form.focus = match form.focus {
        LoginField::Email => LoginField::AccessKey,
        LoginField::AccessKey => LoginField::Email,
    };
    UpdateResult::none()
}
