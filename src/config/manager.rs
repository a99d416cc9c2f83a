//! Configuration manager for loading and saving application configuration
//!
//! This module provides functionality to load and save configuration to
//! `~/.config/nightlight/config.json` with atomic writes to prevent corruption.

use crate::config::models::AppConfig;
use crate::error::{NightLightError, Result, StringError};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// Environment variable that overrides the configuration directory
pub const CONFIG_DIR_ENV: &str = "NIGHTLIGHT_CONFIG_DIR";

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Get the directory holding the configuration file and logs
    ///
    /// Returns `$NIGHTLIGHT_CONFIG_DIR` when set, otherwise
    /// `$XDG_CONFIG_HOME/nightlight` (usually `~/.config/nightlight`).
    pub fn get_config_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return PathBuf::from(dir);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nightlight")
    }

    /// Get the path to the configuration file
    pub fn get_config_path() -> PathBuf {
        Self::get_config_dir().join("config.json")
    }

    /// Ensure the configuration directory exists
    pub fn ensure_config_dir() -> Result<PathBuf> {
        let config_dir = Self::get_config_dir();
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    /// Load configuration from disk
    ///
    /// If the configuration file doesn't exist or is corrupt, returns default configuration.
    pub fn load() -> Result<AppConfig> {
        let config_path = Self::get_config_path();

        if !config_path.exists() {
            info!("Configuration file not found, using defaults");
            return Ok(AppConfig::default());
        }

        let json = std::fs::read_to_string(&config_path)?;

        match serde_json::from_str::<AppConfig>(&json) {
            Ok(mut config) => {
                config.preferences = config.preferences.sanitized();
                config.window_state = config.window_state.sanitized();
                info!("Configuration loaded from {}", config_path.display());
                Ok(config)
            }
            Err(e) => {
                warn!("Failed to parse configuration, using defaults: {}", e);
                Ok(AppConfig::default())
            }
        }
    }

    /// Save configuration to disk with atomic write
    ///
    /// Writes into a temporary file in the same directory, then persists it over
    /// the real path so readers never see a partial file.
    pub fn save(config: &AppConfig) -> Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        let json = serde_json::to_string_pretty(config)?;
        let mut temp = tempfile::NamedTempFile::new_in(&config_dir)?;
        temp.write_all(json.as_bytes())?;
        temp.persist(&config_path).map_err(|e| {
            NightLightError::ConfigError(StringError::new(format!(
                "Failed to replace {}: {}",
                config_path.display(),
                e.error
            )))
        })?;

        info!("Configuration saved successfully");
        Ok(())
    }
}
