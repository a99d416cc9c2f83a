//! GUI controller
//!
//! Connects the Slint `MainWindow` callbacks to the `DisplayController` and
//! writes controller state back into the widgets after resets and color picks.
//!
//! All callbacks run on the Slint event loop thread. The controller lock is
//! only held for the duration of a single `xrandr` pass.

use crate::{MainWindow, MonitorItem};
use anyhow::{Result, anyhow};
use nightlight::config::WindowState;
use nightlight::controller::{ApplyOutcome, DisplayController, DisplaySnapshot};
use nightlight::display::{Rgba, XrandrBackend};
use parking_lot::Mutex;
use slint::{ComponentHandle, LogicalSize, ModelRc, SharedString, VecModel};
use std::sync::Arc;
use tracing::{debug, error, info};

type SharedController = Arc<Mutex<DisplayController<XrandrBackend>>>;

/// Owns the main window and forwards widget events to the display controller
pub struct GuiController {
    main_window: MainWindow,
}

impl GuiController {
    /// Create the main window, register callbacks and populate widgets
    pub fn new(controller: &SharedController, window_state: WindowState) -> Result<Self> {
        let main_window =
            MainWindow::new().map_err(|e| anyhow!("Failed to create main window: {e}"))?;

        #[expect(
            clippy::cast_precision_loss,
            reason = "Window dimensions are far below f32's exact integer range"
        )]
        let size = LogicalSize::new(window_state.width as f32, window_state.height as f32);
        main_window.window().set_size(size);

        let snapshot = controller.lock().snapshot();
        sync_widgets(&main_window, &snapshot);
        main_window.set_monitors(monitor_model(&snapshot));

        Self::register_callbacks(&main_window, controller);

        Ok(Self { main_window })
    }

    fn register_callbacks(main_window: &MainWindow, controller: &SharedController) {
        let ctrl = Arc::clone(controller);
        main_window.on_monitor_toggled(move |name, enabled| {
            let outcome = ctrl.lock().set_monitor_enabled(name.as_str(), enabled);
            log_outcome("monitor toggle", outcome);
        });

        let ctrl = Arc::clone(controller);
        main_window.on_brightness_changed(move |value| {
            let outcome = ctrl.lock().set_brightness(value);
            log_outcome("brightness", outcome);
        });

        let ctrl = Arc::clone(controller);
        main_window.on_gamma_changed(move |index, value| {
            let Ok(index) = usize::try_from(index) else {
                error!("Rejected gamma slider event for channel {}", index);
                return;
            };
            match ctrl.lock().set_gamma_by_index(index, value) {
                Ok(outcome) => log_outcome("gamma", outcome),
                Err(e) => error!("Rejected gamma slider event: {}", e),
            }
        });

        let ctrl = Arc::clone(controller);
        let weak = main_window.as_weak();
        main_window.on_color_changed(move |r, g, b| {
            let color = Rgba::new(to_component(r), to_component(g), to_component(b), 255);
            let (outcome, snapshot) = {
                let mut guard = ctrl.lock();
                (guard.set_color(color), guard.snapshot())
            };
            log_outcome("color", outcome);
            if let Some(window) = weak.upgrade() {
                set_gamma_sliders(&window, &snapshot);
            }
        });

        let ctrl = Arc::clone(controller);
        let weak = main_window.as_weak();
        main_window.on_reset_requested(move || {
            let (outcome, snapshot) = {
                let mut guard = ctrl.lock();
                (guard.reset(), guard.snapshot())
            };
            log_outcome("reset", outcome);
            if let Some(window) = weak.upgrade() {
                sync_widgets(&window, &snapshot);
            }
        });
    }

    /// Show the window and block until it is closed
    pub fn run(&self) -> Result<()> {
        info!("Starting GUI event loop");
        self.main_window
            .run()
            .map_err(|e| anyhow!("GUI event loop failed: {e}"))
    }

    /// Current logical window size, for persisting on exit
    pub fn window_state(&self) -> WindowState {
        let window = self.main_window.window();
        to_window_state(window.size().to_logical(window.scale_factor())).sanitized()
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Logical window sizes are small positive values"
)]
fn to_window_state(size: LogicalSize) -> WindowState {
    WindowState {
        width: size.width.round() as u32,
        height: size.height.round() as u32,
    }
}

fn monitor_model(snapshot: &DisplaySnapshot) -> ModelRc<MonitorItem> {
    let items: Vec<MonitorItem> = snapshot
        .monitors
        .iter()
        .map(|monitor| MonitorItem {
            name: SharedString::from(monitor.name.as_str()),
            primary: monitor.primary,
            enabled: monitor.enabled,
        })
        .collect();
    ModelRc::new(VecModel::from(items))
}

fn set_gamma_sliders(window: &MainWindow, snapshot: &DisplaySnapshot) {
    window.set_gamma_red(snapshot.gamma.red);
    window.set_gamma_green(snapshot.gamma.green);
    window.set_gamma_blue(snapshot.gamma.blue);
}

fn sync_widgets(window: &MainWindow, snapshot: &DisplaySnapshot) {
    window.set_brightness(snapshot.brightness);
    set_gamma_sliders(window, snapshot);
    window.set_tint_red(f32::from(snapshot.color.r));
    window.set_tint_green(f32::from(snapshot.color.g));
    window.set_tint_blue(f32::from(snapshot.color.b));
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Value is rounded and clamped to the u8 range first"
)]
fn to_component(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

fn log_outcome(source: &str, outcome: ApplyOutcome) {
    match outcome {
        ApplyOutcome::Applied { outputs, failures } if failures > 0 => {
            error!("{}: {} of {} xrandr call(s) failed", source, failures, outputs);
        }
        other => debug!("{}: {:?}", source, other),
    }
}
