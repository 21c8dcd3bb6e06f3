//! xpectro-tui - Terminal UI for the Xpectro console
//!
//! This crate provides the ratatui-based terminal interface. It owns the
//! terminal, polls key events, feeds them through `xpectro-app` and renders
//! the resolved view every frame.

pub mod event;
pub mod render;
pub mod runner;
pub mod signals;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
