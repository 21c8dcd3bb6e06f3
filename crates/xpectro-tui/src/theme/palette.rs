//! Color palettes for the dark and light themes.

use ratatui::style::Color;
use xpectro_core::Theme;

/// Colors used by every widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // Background layers
    pub background: Color,
    pub card: Color,
    pub popup: Color,

    // Borders
    pub border: Color,
    pub border_active: Color,

    // Accent
    pub accent: Color,
    pub accent_alt: Color,

    // Text
    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Status
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
}

pub const DARK: Palette = Palette {
    background: Color::Rgb(10, 12, 16),
    card: Color::Rgb(18, 21, 28),
    popup: Color::Rgb(28, 33, 43),
    border: Color::Rgb(45, 51, 59),
    border_active: Color::Rgb(88, 166, 255),
    accent: Color::Rgb(99, 102, 241),
    accent_alt: Color::Rgb(56, 189, 248),
    text: Color::Rgb(201, 209, 217),
    text_secondary: Color::Rgb(125, 133, 144),
    text_muted: Color::Rgb(72, 79, 88),
    success: Color::Rgb(16, 185, 129),
    warning: Color::Rgb(234, 179, 8),
    danger: Color::Rgb(244, 63, 94),
};

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(248, 250, 252),
    card: Color::Rgb(255, 255, 255),
    popup: Color::Rgb(241, 245, 249),
    border: Color::Rgb(203, 213, 225),
    border_active: Color::Rgb(37, 99, 235),
    accent: Color::Rgb(79, 70, 229),
    accent_alt: Color::Rgb(2, 132, 199),
    text: Color::Rgb(15, 23, 42),
    text_secondary: Color::Rgb(71, 85, 105),
    text_muted: Color::Rgb(148, 163, 184),
    success: Color::Rgb(5, 150, 105),
    warning: Color::Rgb(202, 138, 4),
    danger: Color::Rgb(225, 29, 72),
};

/// Palette for a theme
pub fn for_theme(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    }
}
