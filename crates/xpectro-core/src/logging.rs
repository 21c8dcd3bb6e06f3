//! File logging for the console
//!
//! The terminal and the headless NDJSON stream both own stdout, so every log
//! line goes to a daily rolling file under `<data dir>/xpectro/logs/`.
//! Verbosity follows `XPECTRO_LOG` (an `EnvFilter` directive string):
//!
//! ```bash
//! XPECTRO_LOG=debug xpectro
//! XPECTRO_LOG=xpectro_app=trace xpectro --headless
//! ```

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_ENV: &str = "XPECTRO_LOG";
const DEFAULT_DIRECTIVES: &str = "xpectro=info,warn";
const LOG_FILE_PREFIX: &str = "xpectro.log";

/// Install the global subscriber. Call once, before the first event.
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new("%H:%M:%S%.3f".to_string())),
        )
        .init();

    tracing::debug!("Logging to {}", log_dir.display());
    Ok(())
}

/// `XPECTRO_LOG` when set and valid, otherwise the default directives
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// `<data dir>/xpectro/logs`, relative to the working directory when the
/// platform has no data dir
fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("xpectro")
        .join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_is_namespaced() {
        assert!(log_directory().ends_with("xpectro/logs"));
    }

    #[test]
    fn test_default_directives_parse() {
        assert!(DEFAULT_DIRECTIVES.parse::<EnvFilter>().is_ok());
    }
}
