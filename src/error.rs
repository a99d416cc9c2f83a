//! Error types for `nightlight`
//!
//! This module defines all error types used throughout the application,
//! providing clear error messages and proper error propagation.
//!
//! Error variants use `#[source]` to preserve error chains so the log file
//! shows the full cause of a failed `xrandr` call or config write.

use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for `nightlight`
#[derive(Debug, Error)]
pub enum NightLightError {
    /// A gamma channel index outside of 0 (red), 1 (green), 2 (blue)
    #[error("Invalid color channel: {0} is not one of [0, 1, 2]")]
    InvalidColorChannel(usize),

    /// The display tool could not be spawned at all
    #[error("Failed to run {program}: {source}")]
    CommandSpawn {
        /// Program that was invoked
        program: String,
        /// Underlying spawn error
        #[source]
        source: std::io::Error,
    },

    /// The display tool ran but exited unsuccessfully
    #[error("{program} exited with {status}: {stderr}")]
    CommandFailed {
        /// Program that was invoked
        program: String,
        /// Exit status as reported by the OS
        status: std::process::ExitStatus,
        /// Trimmed standard error output
        stderr: String,
    },

    /// Monitor enumeration failed or produced unusable output
    /// Preserves the underlying error source for full error chain transparency
    #[error("Monitor enumeration failed: {0}")]
    MonitorEnumeration(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Configuration error
    /// Preserves the underlying error source for full error chain transparency
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for `nightlight` operations
pub type Result<T> = std::result::Result<T, NightLightError>;

/// Convert an error to a user-friendly message
///
/// Returns text suitable for an error dialog or a terminal, with a short
/// troubleshooting hint for the common failure modes.
pub fn get_user_friendly_error(error: &NightLightError) -> String {
    match error {
        NightLightError::InvalidColorChannel(index) => {
            format!("Unknown color channel {index}.\n\nOnly red, green and blue can be adjusted.")
        }
        NightLightError::CommandSpawn { program, source } => {
            format!(
                "Unable to run '{program}':\n\n{source}\n\n\
                 Please ensure:\n\
                 - xrandr is installed (usually in the x11-xserver-utils package)\n\
                 - The configured xrandr path is correct"
            )
        }
        NightLightError::CommandFailed { program, stderr, .. } => {
            format!(
                "'{program}' reported an error:\n\n{stderr}\n\n\
                 Please ensure you are running an X11 session and the display is connected."
            )
        }
        NightLightError::MonitorEnumeration(_) => "Unable to list active monitors.\n\n\
             Please ensure:\n\
             - You are running an X11 session (Wayland is not supported)\n\
             - The DISPLAY environment variable is set"
            .to_string(),
        NightLightError::ConfigError(_) => "Failed to load or save configuration.\n\n\
             Your preferences may not persist.\n\
             Check that you have write permissions to:\n\
             ~/.config/nightlight"
            .to_string(),
        NightLightError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and disk space."
            )
        }
        NightLightError::JsonError(e) => {
            format!(
                "Configuration file is corrupted:\n\n{e}\n\n\
                 The application will use default settings."
            )
        }
    }
}
