//! Key event handlers for UI modes

use xpectro_core::ViewId;

use crate::gate::RenderTarget;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Ctrl+C always quits
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode {
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::SearchInput | UiMode::DomainInput => handle_key_text_input(key),
        UiMode::LoginInput => handle_key_login_input(key),
        UiMode::ConfirmQuit => handle_key_confirm_quit(key),
    }
}

fn handle_key_text_input(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c) => Some(Message::InputChar(c)),
        InputKey::Backspace => Some(Message::InputBackspace),
        InputKey::Enter => Some(Message::InputCommit),
        InputKey::Esc => Some(Message::InputCancel),
        _ => None,
    }
}

fn handle_key_login_input(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Tab | InputKey::BackTab | InputKey::Up | InputKey::Down => {
            Some(Message::LoginFocusNext)
        }
        other => handle_key_text_input(other),
    }
}

fn handle_key_confirm_quit(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y') | InputKey::Char('Y') | InputKey::Enter => Some(Message::ConfirmQuit),
        InputKey::Char('n') | InputKey::Char('N') | InputKey::Esc => Some(Message::CancelQuit),
        _ => None,
    }
}

fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    // The mobile menu captures arrows and Enter while open
    if state.session.ui.mobile_menu_open {
        match key {
            InputKey::Up | InputKey::Left => return Some(Message::HoverPrev),
            InputKey::Down | InputKey::Right => return Some(Message::HoverNext),
            InputKey::Enter => return Some(Message::ActivateHovered),
            InputKey::Esc | InputKey::Char('m') => return Some(Message::ToggleMobileMenu),
            _ => {}
        }
    }

    // Shell keys, valid on every view
    match key {
        InputKey::Char('q') => return Some(Message::RequestQuit),
        InputKey::Char(c @ '1'..='7') => {
            let index = c.to_digit(10).map_or(0, |d| d as usize - 1);
            return Some(Message::ActivateMenuEntry(index));
        }
        InputKey::Tab => return Some(Message::NextView),
        InputKey::BackTab => return Some(Message::PrevView),
        InputKey::Char('t') => return Some(Message::ToggleTheme),
        InputKey::Char('m') => return Some(Message::ToggleMobileMenu),
        InputKey::Char('u') if state.session.authenticated => {
            return Some(Message::ToggleProfilePanel)
        }
        _ => {}
    }

    match state.render_target() {
        RenderTarget::RestrictedPlaceholder => match key {
            // "Initiate Sequence"
            InputKey::Enter => Some(Message::Navigate(ViewId::Login)),
            _ => None,
        },
        RenderTarget::View { view, .. } => handle_view_key(view, key),
    }
}

fn handle_view_key(view: ViewId, key: InputKey) -> Option<Message> {
    match view {
        ViewId::Dashboard => match key {
            InputKey::Up | InputKey::Left | InputKey::Char('k') => Some(Message::SelectPrev),
            InputKey::Down | InputKey::Right | InputKey::Char('j') => Some(Message::SelectNext),
            InputKey::Enter => Some(Message::ActivateSelection),
            _ => None,
        },
        ViewId::Smishing | ViewId::FakeVoice | ViewId::Vishing => match key {
            InputKey::Left | InputKey::Char('h') => Some(Message::PrevSubTab),
            InputKey::Right | InputKey::Char('l') => Some(Message::NextSubTab),
            InputKey::Char('/') => Some(Message::StartSearch),
            InputKey::Char('f') => Some(Message::CycleStatusFilter),
            _ => None,
        },
        ViewId::Domains => match key {
            InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrev),
            InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
            InputKey::Char('/') => Some(Message::StartSearch),
            InputKey::Char('f') => Some(Message::CycleStatusFilter),
            InputKey::Char('a') | InputKey::Char('i') => Some(Message::StartDomainInput),
            InputKey::Char('p') => Some(Message::CycleProtocol),
            InputKey::Char('d') | InputKey::Delete => Some(Message::RemoveSelectedDomain),
            _ => None,
        },
        ViewId::Pricing => match key {
            InputKey::Char('y') | InputKey::Char(' ') | InputKey::Enter => {
                Some(Message::TogglePricingPeriod)
            }
            _ => None,
        },
        ViewId::Login => match key {
            InputKey::Enter | InputKey::Char('e') => Some(Message::StartLoginInput),
            _ => None,
        },
    }
}
