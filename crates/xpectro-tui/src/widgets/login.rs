//! Login form

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use xpectro_app::state::LoginField;
use xpectro_app::view_model::LoginModel;

use super::modal_overlay::centered_rect;
use super::CARET;
use crate::theme::{styles, Palette};

pub struct LoginView<'a> {
    model: &'a LoginModel,
    editing: bool,
    authenticated: bool,
    palette: &'a Palette,
}

impl<'a> LoginView<'a> {
    pub fn new(model: &'a LoginModel, palette: &'a Palette) -> Self {
        Self {
            model,
            editing: false,
            authenticated: false,
            palette,
        }
    }

    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }

    pub fn authenticated(mut self, authenticated: bool) -> Self {
        self.authenticated = authenticated;
        self
    }

    fn field(&self, label: &'static str, value: String, field: LoginField) -> Vec<Line<'static>> {
        let p = self.palette;
        let focused = self.editing && self.model.focus == field;
        let label_style = if focused {
            styles::accent_bold(p)
        } else {
            styles::text_muted(p)
        };
        let value = if focused {
            format!("{}{}", value, CARET)
        } else {
            value
        };
        vec![
            Line::from(Span::styled(label, label_style)),
            Line::from(Span::styled(format!("  {}", value), styles::text(p))),
        ]
    }
}

impl Widget for LoginView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let card = centered_rect(48, 12, area);
        let block = styles::card_block(p, self.editing).title(Line::from(Span::styled(
            " Secure Access ",
            styles::accent_bold(p),
        )));
        let inner = block.inner(card);
        block.render(card, buf);

        if self.authenticated {
            Paragraph::new(vec![
                Line::from(Span::styled("● Session active", styles::success(p))),
                Line::from(Span::styled("Open a view from the dock", styles::text_muted(p))),
            ])
            .alignment(Alignment::Center)
            .render(inner, buf);
            return;
        }

        let mut lines = self.field("Email", self.model.email.clone(), LoginField::Email);
        lines.push(Line::default());
        lines.extend(self.field(
            "Access Key",
            "•".repeat(self.model.access_key_len),
            LoginField::AccessKey,
        ));
        lines.push(Line::default());
        let hint = if self.editing {
            "Enter to continue · Esc to cancel"
        } else {
            "Press Enter to sign in"
        };
        lines.push(Line::from(Span::styled(hint, styles::text_muted(p))));

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;

    #[test]
    fn test_access_key_is_masked() {
        let model = LoginModel {
            email: "jd@xpectro.com".to_string(),
            access_key_len: 4,
            focus: LoginField::AccessKey,
        };
        let mut term = TestTerminal::new();
        term.render_widget(LoginView::new(&model, &DARK).editing(true), term.area());

        assert!(term.buffer_contains("jd@xpectro.com"));
        assert!(term.buffer_contains("••••"));
        assert!(term.buffer_contains("Esc to cancel"));
    }

    #[test]
    fn test_authenticated_shows_session() {
        let model = LoginModel {
            email: String::new(),
            access_key_len: 0,
            focus: LoginField::Email,
        };
        let mut term = TestTerminal::new();
        term.render_widget(
            LoginView::new(&model, &DARK).authenticated(true),
            term.area(),
        );
        assert!(term.buffer_contains("Session active"));
    }
}
