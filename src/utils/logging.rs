//! Logging system initialization
//!
//! Sets up tracing-based logging with file output to
//! `~/.config/nightlight/nightlight.log` and rotation on application startup
//! keeping 9 historical files.

use crate::config::ConfigManager;
use crate::error::{NightLightError, Result, StringError};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Maximum number of historical log files to keep (nightlight.log.1 through nightlight.log.9)
const MAX_LOG_FILES: u8 = 9;

/// Initialize the logging system
///
/// Log level defaults to INFO but can be configured via `RUST_LOG` environment variable.
/// Rotates existing logs on startup so each session gets its own file.
pub fn init_logging() -> Result<()> {
    let log_dir = ConfigManager::ensure_config_dir()?;

    let log_path = log_dir.join("nightlight.log");
    rotate_logs_on_startup(&log_path)?;

    // RollingFileAppender has no startup-based retention, rotation happens above
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("nightlight")
        .filename_suffix("log")
        .build(log_dir)
        .map_err(|e| NightLightError::ConfigError(Box::new(e)))?;

    // Build the subscriber with file output
    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false) // Disable ANSI colors for file output
        .with_target(true) // Include target module
        .with_file(true) // Include file names
        .with_line_number(true) // Include line numbers
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| NightLightError::ConfigError(Box::new(e)))?;

    Ok(())
}

/// Rotate log files on application startup
///
/// `nightlight.log.9` is deleted, every `.N` moves to `.N+1`, and the current
/// log becomes `.1`. The logger then creates a fresh file.
fn rotate_logs_on_startup(log_path: &Path) -> Result<()> {
    // If the current log doesn't exist, nothing to rotate
    if !log_path.exists() {
        return Ok(());
    }

    let log_dir = log_path
        .parent()
        .ok_or_else(|| NightLightError::ConfigError(StringError::new("Invalid log path")))?;

    let log_name = log_path
        .file_name()
        .ok_or_else(|| NightLightError::ConfigError(StringError::new("Invalid log filename")))?
        .to_string_lossy();

    let oldest_log = log_dir.join(format!("{log_name}.{MAX_LOG_FILES}"));
    if oldest_log.exists() {
        std::fs::remove_file(&oldest_log)?;
    }

    for i in (1..MAX_LOG_FILES).rev() {
        let current_log = log_dir.join(format!("{log_name}.{i}"));
        let next_log = log_dir.join(format!("{log_name}.{}", i + 1));

        if current_log.exists() {
            std::fs::rename(&current_log, &next_log)?;
        }
    }

    let log_1 = log_dir.join(format!("{log_name}.1"));
    std::fs::rename(log_path, &log_1)?;

    Ok(())
}
