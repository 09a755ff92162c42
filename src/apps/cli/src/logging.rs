//! Per-session file logging. The TUI owns stdout, so traces go to a
//! timestamped file under the user data dir.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "NEONCODE_LOG";

/// Install the global subscriber. Returns the log file path so the UI
/// can point users at it.
pub fn init(debug: bool) -> Result<PathBuf> {
    let log_dir = dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("neoncode")
        .join("logs");
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log dir {}", log_dir.display()))?;

    let file_name = format!("session-{}.log", Local::now().format("%Y%m%dT%H%M%S"));
    let log_path = log_dir.join(file_name);
    let file = fs::File::create(&log_path)
        .with_context(|| format!("failed to create log file {}", log_path.display()))?;

    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("neoncode={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file)
        .with_ansi(false)
        .init();

    Ok(log_path)
}
