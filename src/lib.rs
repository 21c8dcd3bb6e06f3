//! Xpectro Console Library
//!
//! A terminal console for the Xpectro threat-detection dashboard.

pub mod cli;
pub mod console;
pub mod headless;

// Re-export main entry points
pub use cli::Args;
pub use console::run;
pub use headless::run_headless;
