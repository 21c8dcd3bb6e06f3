//! Configuration file parsing for the Xpectro console
//!
//! Supports `<config dir>/xpectro/config.toml` or an explicit `--config` path.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config, load_settings};
pub use types::*;
