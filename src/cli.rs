//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;
use xpectro_app::config::Settings;
use xpectro_core::{Error, Result, Theme, ViewId};

/// Xpectro - threat-detection console
#[derive(Parser, Debug, Default)]
#[command(name = "xpectro")]
#[command(about = "Terminal console for the Xpectro threat-detection dashboard", long_about = None)]
pub struct Args {
    /// Path to config.toml (default: <config dir>/xpectro/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Initial theme: dark or light
    #[arg(long, value_parser = parse_theme)]
    pub theme: Option<Theme>,

    /// View requested at startup (still gated until login)
    #[arg(long, value_parser = parse_view)]
    pub view: Option<ViewId>,

    /// Run in headless mode (NDJSON on stdin/stdout, no TUI)
    #[arg(long)]
    pub headless: bool,

    /// Write a default config file and exit
    #[arg(long)]
    pub init_config: bool,
}

impl Args {
    /// Override loaded settings with explicit flags
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(theme) = self.theme {
            settings.ui.theme = theme;
        }
        if let Some(view) = self.view {
            settings.behavior.start_view = view;
        }
    }
}

fn parse_theme(value: &str) -> Result<Theme> {
    match value.trim().to_ascii_lowercase().as_str() {
        "dark" => Ok(Theme::Dark),
        "light" => Ok(Theme::Light),
        other => Err(Error::config_invalid(format!(
            "unknown theme '{}', expected dark or light",
            other
        ))),
    }
}

fn parse_view(value: &str) -> Result<ViewId> {
    ViewId::from_id(&value.trim().to_ascii_lowercase()).ok_or_else(|| {
        let known: Vec<_> = ViewId::ALL.iter().map(|v| v.as_str()).collect();
        Error::config_invalid(format!(
            "unknown view '{}', expected one of: {}",
            value,
            known.join(", ")
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_command_line() {
        let args = Args::try_parse_from([
            "xpectro",
            "--config",
            "/tmp/x.toml",
            "--theme",
            "light",
            "--view",
            "domains",
            "--headless",
        ])
        .unwrap();

        assert_eq!(args.config, Some(PathBuf::from("/tmp/x.toml")));
        assert_eq!(args.theme, Some(Theme::Light));
        assert_eq!(args.view, Some(ViewId::Domains));
        assert!(args.headless);
        assert!(!args.init_config);
    }

    #[test]
    fn test_unknown_view_rejected() {
        assert!(Args::try_parse_from(["xpectro", "--view", "settings"]).is_err());
        assert!(Args::try_parse_from(["xpectro", "--theme", "blue"]).is_err());
    }

    #[test]
    fn test_apply_overrides() {
        let args = Args {
            theme: Some(Theme::Light),
            view: Some(ViewId::Pricing),
            ..Default::default()
        };
        let mut settings = Settings::default();
        args.apply_to(&mut settings);

        assert_eq!(settings.ui.theme, Theme::Light);
        assert_eq!(settings.behavior.start_view, ViewId::Pricing);
    }

    #[test]
    fn test_no_flags_keep_settings() {
        let mut settings = Settings::default();
        settings.ui.theme = Theme::Light;
        Args::default().apply_to(&mut settings);
        assert_eq!(settings.ui.theme, Theme::Light);
    }
}
