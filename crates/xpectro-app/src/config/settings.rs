//! Settings parser for config.toml

use super::types::Settings;
use std::path::{Path, PathBuf};
use xpectro_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const XPECTRO_DIR: &str = "xpectro";

const DEFAULT_CONFIG: &str = r#"# Xpectro Console Configuration

[ui]
theme = "dark"           # "dark" or "light"
show_hints = true        # Key hints in the status bar

[behavior]
start_view = "dashboard" # dashboard, smishing, fakevoice, vishing, domains, pricing, login
confirm_quit = false     # Ask before quitting while logged in

[domains]
seed_demo_data = true    # Start with the demo domains
default_protocol = "https"
"#;

/// Default config file location: `<config dir>/xpectro/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(XPECTRO_DIR)
        .join(CONFIG_FILENAME)
}

/// Load settings from `config_path`.
///
/// A missing or unreadable file yields defaults; nothing here is fatal.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write the commented default config to `config_path` if it does not exist.
///
/// Returns true if a file was written.
pub fn init_config(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(dir) = config_path.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;

    info!("Wrote default config to {:?}", config_path);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use xpectro_core::{Protocol, Theme, ViewId};

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(&temp.path().join("config.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[ui]
theme = "light"
show_hints = false

[behavior]
start_view = "domains"
confirm_quit = true

[domains]
seed_demo_data = false
default_protocol = "wp"
"#,
        )
        .unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.ui.theme, Theme::Light);
        assert!(!settings.ui.show_hints);
        assert_eq!(settings.behavior.start_view, ViewId::Domains);
        assert!(settings.behavior.confirm_quit);
        assert!(!settings.domains.seed_demo_data);
        assert_eq!(settings.domains.default_protocol, Protocol::Wp);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "not valid toml {{{{").unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_init_config_writes_valid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        assert!(init_config(&path).unwrap());
        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Settings = toml::from_str(&content).expect("Default config should be valid TOML");
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn test_init_config_idempotent() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        init_config(&path).unwrap();

        std::fs::write(&path, "[behavior]\nconfirm_quit = true\n").unwrap();
        assert!(!init_config(&path).unwrap());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("confirm_quit = true"));
    }

    #[test]
    fn test_default_config_path_ends_with_file_name() {
        let path = default_config_path();
        assert!(path.ends_with("xpectro/config.toml"));
    }
}
