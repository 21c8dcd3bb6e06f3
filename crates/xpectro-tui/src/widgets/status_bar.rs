//! Key hint line

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use xpectro_app::{AppState, RenderTarget, UiMode};
use xpectro_core::ViewId;

use crate::theme::{styles, Palette};

/// Key/description pairs for the current mode and view
pub fn hints_for(state: &AppState) -> Vec<(&'static str, &'static str)> {
    match state.ui_mode {
        UiMode::SearchInput => return vec![("type", "search"), ("Enter", "done"), ("Esc", "clear")],
        UiMode::DomainInput => return vec![("type", "url"), ("Enter", "add"), ("Esc", "cancel")],
        UiMode::LoginInput => {
            return vec![("type", "edit"), ("Tab", "next field"), ("Enter", "submit"), ("Esc", "cancel")]
        }
        UiMode::ConfirmQuit => return vec![("y", "quit"), ("n", "stay")],
        UiMode::Normal => {}
    }

    if state.session.ui.mobile_menu_open {
        return vec![("↑↓", "move"), ("Enter", "open"), ("Esc", "close")];
    }

    let mut hints = match state.render_target() {
        RenderTarget::RestrictedPlaceholder => vec![("Enter", "initiate sequence")],
        RenderTarget::View { view, .. } => match view {
            ViewId::Dashboard => vec![("↑↓", "select card"), ("Enter", "open")],
            ViewId::Smishing | ViewId::FakeVoice | ViewId::Vishing => {
                vec![("←→", "tabs"), ("/", "search"), ("f", "status")]
            }
            ViewId::Domains => vec![
                ("a", "add"),
                ("p", "protocol"),
                ("d", "remove"),
                ("/", "search"),
                ("f", "status"),
            ],
            ViewId::Pricing => vec![("y", "monthly/yearly")],
            ViewId::Login => vec![("Enter", "sign in")],
        },
    };
    hints.extend([("1-7", "views"), ("t", "theme"), ("m", "menu"), ("q", "quit")]);
    hints
}

pub struct StatusBar<'a> {
    hints: Vec<(&'static str, &'static str)>,
    palette: &'a Palette,
}

impl<'a> StatusBar<'a> {
    pub fn new(hints: Vec<(&'static str, &'static str)>, palette: &'a Palette) -> Self {
        Self { hints, palette }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let mut spans = vec![Span::raw(" ")];
        for (key, desc) in self.hints {
            spans.push(Span::styled(key, styles::keycap(p)));
            spans.push(Span::styled(format!(" {}  ", desc), styles::text_muted(p)));
        }
        Line::from(spans).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xpectro_app::Message;

    fn keys(state: &AppState) -> Vec<&'static str> {
        hints_for(state).into_iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn test_restricted_hints() {
        let state = AppState::new();
        assert_eq!(hints_for(&state)[0], ("Enter", "initiate sequence"));
    }

    #[test]
    fn test_domain_hints_when_authenticated() {
        let mut state = AppState::new();
        xpectro_app::process_message(&mut state, Message::Login);
        xpectro_app::process_message(&mut state, Message::Navigate(ViewId::Domains));
        let keys = keys(&state);
        assert!(keys.contains(&"a"));
        assert!(keys.contains(&"q"));
    }

    #[test]
    fn test_input_mode_hints_replace_view_hints() {
        let mut state = AppState::new();
        state.ui_mode = UiMode::SearchInput;
        assert!(!keys(&state).contains(&"q"));
    }
}
