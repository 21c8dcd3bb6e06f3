//! Application entry point: config, logging, then the TUI or headless loop

use xpectro_app::config::{self, default_config_path};
use xpectro_app::AppState;
use xpectro_core::prelude::*;

use crate::cli::Args;
use crate::headless;

/// Run the console with parsed arguments
pub async fn run(args: Args) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    let config_path = args.config.clone().unwrap_or_else(default_config_path);

    if args.init_config {
        if config::init_config(&config_path)? {
            eprintln!("Wrote default config to {}", config_path.display());
        } else {
            eprintln!("Config already exists at {}", config_path.display());
        }
        return Ok(());
    }

    // Initialize logging (to file, since the TUI and headless mode own stdout)
    xpectro_core::logging::init()?;

    info!("Config: {}", config_path.display());

    let mut settings = config::load_settings(&config_path);
    args.apply_to(&mut settings);
    let state = AppState::with_settings(settings);

    let result = if args.headless {
        headless::run_headless(state).await
    } else {
        xpectro_tui::run(state).await
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Xpectro console exiting");
    result
}
