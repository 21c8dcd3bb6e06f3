//! Navigation dock listing the menu catalog

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;
use xpectro_app::MenuEntry;
use xpectro_core::ViewId;

use crate::theme::{icons, styles, Palette};

/// Bottom dock. Falls back to icons only when labels don't fit.
pub struct Dock<'a> {
    entries: &'a [MenuEntry],
    active: ViewId,
    hovered: Option<ViewId>,
    palette: &'a Palette,
}

impl<'a> Dock<'a> {
    pub fn new(entries: &'a [MenuEntry], active: ViewId, palette: &'a Palette) -> Self {
        Self {
            entries,
            active,
            hovered: None,
            palette,
        }
    }

    pub fn hovered(mut self, hovered: Option<ViewId>) -> Self {
        self.hovered = hovered;
        self
    }

    fn entry_text(index: usize, entry: &MenuEntry, compact: bool) -> String {
        let icon = icons::menu_icon(entry.icon);
        if compact {
            format!(" {} {} ", index + 1, icon)
        } else {
            format!(" {} {} {} ", index + 1, icon, entry.label)
        }
    }
}

impl Widget for Dock<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::card_block(p, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let full_width: usize = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, e)| Self::entry_text(i, e, false).width() + 1)
            .sum();
        let compact = full_width > inner.width as usize;

        let mut spans = Vec::with_capacity(self.entries.len() * 2);
        for (i, entry) in self.entries.iter().enumerate() {
            let mut style = if entry.id == self.active {
                styles::selected(p)
            } else {
                styles::text_secondary(p)
            };
            if self.hovered == Some(entry.id) {
                style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
            }
            spans.push(Span::styled(Self::entry_text(i, entry, compact), style));
            spans.push(Span::raw(" "));
        }

        Line::from(spans).centered().render(inner, buf);
    }
}
