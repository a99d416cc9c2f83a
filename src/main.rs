//! `nightlight` - Brightness and gamma control for X11 displays
//!
//! Opens a small window with brightness, gamma and tint controls and applies
//! them to the selected monitors through `xrandr`.

#![expect(
    missing_docs,
    reason = "Slint-generated code from include_modules! lacks doc comments"
)]
#![allow(clippy::unwrap_used)] // Slint-generated code from include_modules! uses .unwrap() extensively

// GUI module is only in the binary, not the library
mod gui;

use anyhow::{Context, Result};
use gui::GuiController;
use nightlight::{
    config::ConfigManager,
    controller::DisplayController,
    display::XrandrBackend,
    error::get_user_friendly_error,
    utils,
};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{error, info, warn};

// Include Slint-generated code
slint::include_modules!();

fn main() -> Result<()> {
    utils::init_logging().context("Failed to initialize logging system")?;

    info!("nightlight v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = match ConfigManager::load() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", get_user_friendly_error(&e));
            return Err(e).context("Failed to load application configuration");
        }
    };
    info!(
        "Using {} with a {}ms throttle interval",
        config.preferences.xrandr_path.display(),
        config.preferences.throttle_interval_ms
    );

    let backend = XrandrBackend::new(&config.preferences.xrandr_path);
    let controller = DisplayController::new(backend, &config.preferences);
    if controller.monitors().is_empty() {
        warn!("No active monitors detected, is this an X11 session?");
    }

    let controller = Arc::new(Mutex::new(controller));

    info!("Creating GUI controller");
    let gui_controller = GuiController::new(&controller, config.window_state)
        .context("Failed to create GUI controller")?;

    if let Err(e) = gui_controller.run() {
        error!("GUI event loop terminated with error: {:#}", e);
        return Err(e);
    }

    config.window_state = gui_controller.window_state();
    if let Err(e) = ConfigManager::save(&config) {
        warn!(
            "Failed to save configuration to disk: {}. Window size will not persist.",
            e
        );
    }

    info!("nightlight shutting down");

    Ok(())
}
