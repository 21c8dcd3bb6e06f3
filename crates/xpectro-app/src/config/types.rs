//! Configuration types for the Xpectro console
//!
//! Defines:
//! - `Settings` - Global application settings (`config.toml`)
//! - Related sub-sections

use serde::{Deserialize, Serialize};
use xpectro_core::{Protocol, Theme, ViewId};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub domains: DomainSettings,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Initial theme: "dark" or "light"
    #[serde(default)]
    pub theme: Theme,

    /// Show the key hint line in the status bar
    #[serde(default = "default_true")]
    pub show_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            show_hints: true,
        }
    }
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// View requested at startup (still gated until login)
    #[serde(default = "default_start_view")]
    pub start_view: ViewId,

    /// Ask before quitting while authenticated
    #[serde(default)]
    pub confirm_quit: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            start_view: default_start_view(),
            confirm_quit: false,
        }
    }
}

/// Domain fortress settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DomainSettings {
    /// Start the registry with the demo domains
    #[serde(default = "default_true")]
    pub seed_demo_data: bool,

    /// Protocol preselected in the add-domain form
    #[serde(default)]
    pub default_protocol: Protocol,
}

impl Default for DomainSettings {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
            default_protocol: Protocol::Https,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_start_view() -> ViewId {
    ViewId::Dashboard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.ui.theme, Theme::Dark);
        assert!(settings.ui.show_hints);
        assert_eq!(settings.behavior.start_view, ViewId::Dashboard);
        assert!(!settings.behavior.confirm_quit);
        assert!(settings.domains.seed_demo_data);
        assert_eq!(settings.domains.default_protocol, Protocol::Https);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[ui]
theme = "light"

[behavior]
start_view = "fakevoice"
"#,
        )
        .unwrap();
        assert_eq!(settings.ui.theme, Theme::Light);
        assert!(settings.ui.show_hints);
        assert_eq!(settings.behavior.start_view, ViewId::FakeVoice);
        assert!(settings.domains.seed_demo_data);
    }

    #[test]
    fn test_unknown_start_view_is_rejected() {
        let result: Result<Settings, _> = toml::from_str("[behavior]\nstart_view = \"admin\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_settings_round_trip_through_toml() {
        let mut settings = Settings::default();
        settings.domains.default_protocol = Protocol::Ftp;
        let content = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&content).unwrap();
        assert_eq!(parsed, settings);
    }
}
