//! Configuration data models
//!
//! This module defines the data structures used for application configuration.
//! Only preferences live here; brightness and gamma are never saved.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Upper bound accepted for the throttle interval
pub const MAX_THROTTLE_INTERVAL_MS: u64 = 1000;

/// Smallest window width restored from disk
pub const MIN_WINDOW_WIDTH: u32 = 200;

/// Smallest window height restored from disk
pub const MIN_WINDOW_HEIGHT: u32 = 200;

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// User preferences
    pub preferences: UserPreferences,
    /// Window state for persistence
    pub window_state: WindowState,
}

/// User preferences and settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    /// Program used to apply brightness and gamma
    pub xrandr_path: PathBuf,
    /// Minimum time between two invocation passes, in milliseconds (0-1000)
    pub throttle_interval_ms: u64,
    /// Invocations are skipped while the gamma channels sum below this value
    pub min_gamma_sum: f32,
}

impl UserPreferences {
    /// Clamp out-of-range values loaded from disk
    pub fn sanitized(mut self) -> Self {
        self.throttle_interval_ms = self.throttle_interval_ms.min(MAX_THROTTLE_INTERVAL_MS);
        if !self.min_gamma_sum.is_finite() || self.min_gamma_sum < 0.0 {
            self.min_gamma_sum = Self::default().min_gamma_sum;
        }
        self
    }
}

/// Window state for size persistence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowState {
    /// Window width
    pub width: u32,
    /// Window height
    pub height: u32,
}

impl WindowState {
    /// Replace dimensions too small to use with the defaults
    pub fn sanitized(mut self) -> Self {
        let default = Self::default();
        if self.width < MIN_WINDOW_WIDTH {
            self.width = default.width;
        }
        if self.height < MIN_WINDOW_HEIGHT {
            self.height = default.height;
        }
        self
    }
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            xrandr_path: PathBuf::from(crate::display::xrandr::DEFAULT_XRANDR),
            throttle_interval_ms: 10,
            min_gamma_sum: 0.15,
        }
    }
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            width: 380,
            height: 500,
        }
    }
}
