//! Configuration management module
//!
//! This module handles loading, saving, and managing application preferences.
//! Configuration is stored in `~/.config/nightlight/config.json` with atomic
//! writes to prevent corruption.

pub mod manager;
pub mod models;

pub use manager::ConfigManager;
pub use models::{AppConfig, UserPreferences, WindowState};
