//! Theme system for the console TUI.
//!
//! - `palette` - Color sets for the dark and light themes
//! - `styles` - Semantic style builders over a palette
//! - `icons` - Dock glyphs

pub mod icons;
pub mod palette;
pub mod styles;

pub use palette::Palette;
