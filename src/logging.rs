//! Logging setup
//!
//! The terminal belongs to the game, so logs go to a file only. The level is
//! read from `DAILY_WORDLE_LOG` (same syntax as `RUST_LOG`), default `info`.

use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "DAILY_WORDLE_LOG";

/// Log file name inside the log directory
pub const LOG_FILE: &str = "daily_wordle.log";

/// Install a file subscriber writing to `log_dir`
///
/// Keep the returned guard alive for the life of the program; dropping it
/// flushes buffered log lines.
///
/// # Errors
/// Returns an error if the directory cannot be created or a global subscriber
/// is already installed.
pub fn init(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install log subscriber")?;

    tracing::info!("Logging initialized: {}", log_dir.join(LOG_FILE).display());

    Ok(guard)
}
