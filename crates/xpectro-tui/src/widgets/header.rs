//! Header bar widget
//!
//! Shows the brand, the title of the active view, the theme and the
//! session badge.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use xpectro_core::Theme;

use crate::theme::{styles, Palette};

pub struct MainHeader<'a> {
    title: &'a str,
    authenticated: bool,
    theme: Theme,
    palette: &'a Palette,
}

impl<'a> MainHeader<'a> {
    pub fn new(title: &'a str, palette: &'a Palette) -> Self {
        Self {
            title,
            authenticated: false,
            theme: Theme::Dark,
            palette,
        }
    }

    pub fn authenticated(mut self, authenticated: bool) -> Self {
        self.authenticated = authenticated;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::card_block(p, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        Line::from(vec![
            Span::styled(" XPECTRO ", styles::accent_bold(p)),
            Span::styled("│ ", styles::text_muted(p)),
            Span::styled(self.title, styles::title(p)),
        ])
        .render(inner, buf);

        let theme = match self.theme {
            Theme::Dark => "☾ Dark",
            Theme::Light => "☀ Light",
        };
        let badge = if self.authenticated {
            Span::styled("● JD ", styles::success(p))
        } else {
            Span::styled("○ Locked ", styles::warning(p))
        };
        Line::from(vec![
            Span::styled(theme, styles::text_secondary(p)),
            Span::styled("  ", styles::text_muted(p)),
            badge,
        ])
        .right_aligned()
        .render(inner, buf);
    }
}
