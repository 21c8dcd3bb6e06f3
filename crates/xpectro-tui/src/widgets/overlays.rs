//! Popups drawn over the body: quit confirmation, profile panel and the
//! compact menu

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};
use xpectro_app::MenuEntry;
use xpectro_core::ViewId;

use super::modal_overlay::{centered_rect, top_right_rect};
use crate::theme::{icons, styles, Palette};

pub struct ConfirmQuitDialog<'a> {
    palette: &'a Palette,
}

impl<'a> ConfirmQuitDialog<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }
}

impl Widget for ConfirmQuitDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let rect = centered_rect(40, 5, area);
        Clear.render(rect, buf);
        let block = styles::popup_block(p, " Quit ");
        let inner = block.inner(rect);
        block.render(rect, buf);

        Paragraph::new(vec![
            Line::from(Span::styled("End the secure session and quit?", styles::text(p))),
            Line::from(vec![
                Span::styled("y", styles::keycap(p)),
                Span::styled(" quit   ", styles::text_muted(p)),
                Span::styled("n", styles::keycap(p)),
                Span::styled(" stay", styles::text_muted(p)),
            ]),
        ])
        .alignment(Alignment::Center)
        .render(inner, buf);
    }
}

/// Account details of the signed-in operator
pub struct ProfilePanel<'a> {
    palette: &'a Palette,
}

impl<'a> ProfilePanel<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }
}

impl Widget for ProfilePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let rect = top_right_rect(34, 7, area);
        Clear.render(rect, buf);
        let block = styles::popup_block(p, " Profile ");
        let inner = block.inner(rect);
        block.render(rect, buf);

        Paragraph::new(vec![
            Line::from(Span::styled("John Doe", styles::title(p))),
            Line::from(Span::styled("Enterprise Admin", styles::text_secondary(p))),
            Line::from(Span::styled("ID: client_829304823", styles::text_muted(p))),
            Line::from(vec![
                Span::styled("7", styles::keycap(p)),
                Span::styled(" sign out", styles::text_muted(p)),
            ]),
        ])
        .render(inner, buf);
    }
}

/// Vertical menu opened with `m`
pub struct MobileMenu<'a> {
    entries: &'a [MenuEntry],
    hovered: Option<ViewId>,
    palette: &'a Palette,
}

impl<'a> MobileMenu<'a> {
    pub fn new(entries: &'a [MenuEntry], hovered: Option<ViewId>, palette: &'a Palette) -> Self {
        Self {
            entries,
            hovered,
            palette,
        }
    }
}

impl Widget for MobileMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let rect = centered_rect(32, self.entries.len() as u16 + 2, area);
        Clear.render(rect, buf);
        let block = styles::popup_block(p, " Menu ");
        let inner = block.inner(rect);
        block.render(rect, buf);

        let lines: Vec<Line> = self
            .entries
            .iter()
            .map(|entry| {
                let style = if self.hovered == Some(entry.id) {
                    styles::selected(p)
                } else {
                    styles::text(p)
                };
                Line::from(Span::styled(
                    format!(" {} {}", icons::menu_icon(entry.icon), entry.label),
                    style,
                ))
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;
    use xpectro_app::{catalog, SessionState};

    #[test]
    fn test_confirm_dialog() {
        let mut term = TestTerminal::new();
        term.render_widget(ConfirmQuitDialog::new(&DARK), term.area());
        assert!(term.buffer_contains("quit?"));
    }

    #[test]
    fn test_profile_panel() {
        let mut term = TestTerminal::new();
        term.render_widget(ProfilePanel::new(&DARK), term.area());
        assert!(term.buffer_contains("John Doe"));
        assert!(term.buffer_contains("client_829304823"));
    }

    #[test]
    fn test_mobile_menu_lists_catalog() {
        let entries = catalog(&SessionState::default());
        let mut term = TestTerminal::new();
        term.render_widget(
            MobileMenu::new(&entries, Some(ViewId::Vishing), &DARK),
            term.area(),
        );
        assert!(term.buffer_contains("Vishing Monitor"));
        assert!(term.buffer_contains("Pricing Plans"));
        assert!(term.buffer_contains("Login"));
    }
}
