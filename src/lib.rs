//! `nightlight` - Brightness and gamma control for X11 displays
//!
//! Adjusts display brightness and per-channel gamma by running `xrandr` once
//! per selected monitor. `DisplayController` mirrors the GUI widgets and
//! decides when to invoke the tool; `XrandrBackend` runs it.
//!
//! # Requirements
//!
//! - An X11 session (xrandr does not control Wayland outputs)
//! - `xrandr` on `PATH`, or its location set in the config file

// Module declarations
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export commonly used types
pub use error::{NightLightError, Result};
