//! Abstract input key event, independent of terminal library.
//!
//! The TUI converts crossterm events to [`InputKey`] at its boundary so the
//! app crate never depends on a terminal backend.

/// Keyboard input seen by the key handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,
}
