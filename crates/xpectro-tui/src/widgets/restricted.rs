//! Placeholder shown in place of any gated view

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::modal_overlay::centered_rect;
use crate::theme::{styles, Palette};

pub struct RestrictedPlaceholder<'a> {
    requested: &'a str,
    palette: &'a Palette,
}

impl<'a> RestrictedPlaceholder<'a> {
    pub fn new(requested: &'a str, palette: &'a Palette) -> Self {
        Self { requested, palette }
    }
}

impl Widget for RestrictedPlaceholder<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let card = centered_rect(56, 9, area);
        let block = styles::card_block(p, true);
        let inner = block.inner(card);
        block.render(card, buf);

        let lines = vec![
            Line::from(Span::styled("⚿ ACCESS RESTRICTED", styles::danger(p))),
            Line::default(),
            Line::from(Span::styled(
                format!("Authentication is required to open {}.", self.requested),
                styles::text_secondary(p),
            )),
            Line::default(),
            Line::from(Span::styled("[ Initiate Sequence ]", styles::selected(p))),
            Line::from(Span::styled("press Enter", styles::text_muted(p))),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;

    #[test]
    fn test_placeholder_names_requested_view() {
        let mut term = TestTerminal::new();
        term.render_widget(
            RestrictedPlaceholder::new("Domain Security", &DARK),
            term.area(),
        );
        assert!(term.buffer_contains("ACCESS RESTRICTED"));
        assert!(term.buffer_contains("Domain Security"));
        assert!(term.buffer_contains("Initiate Sequence"));
    }
}
