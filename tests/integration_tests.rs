//! Integration tests for `nightlight`
//!
//! Drives the display controller through its public API, once against an
//! in-memory backend and once against a stand-in `xrandr` script.

use nightlight::{
    config::{AppConfig, ConfigManager, UserPreferences},
    controller::{ApplyOutcome, DisplayController},
    display::{DisplayBackend, GammaTriple, Monitor, OutputAdjustment, Rgba, XrandrBackend},
    error::{NightLightError, Result, get_user_friendly_error},
};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// In-memory backend that records every adjustment
struct FakeBackend {
    monitors: Vec<Monitor>,
    applied: Mutex<Vec<OutputAdjustment>>,
}

impl FakeBackend {
    fn new(names: &[&str]) -> Self {
        Self {
            monitors: names
                .iter()
                .enumerate()
                .map(|(index, name)| Monitor {
                    index,
                    name: (*name).to_string(),
                    primary: index == 0,
                })
                .collect(),
            applied: Mutex::new(Vec::new()),
        }
    }

    fn take_applied(&self) -> Vec<OutputAdjustment> {
        std::mem::take(&mut *self.applied.lock())
    }
}

impl DisplayBackend for FakeBackend {
    fn list_monitors(&self) -> Result<Vec<Monitor>> {
        Ok(self.monitors.clone())
    }

    fn apply(&self, adjustment: &OutputAdjustment) -> Result<()> {
        self.applied.lock().push(adjustment.clone());
        Ok(())
    }
}

/// Clock that only moves when a test advances it
#[derive(Clone)]
struct ManualClock(Arc<Mutex<Instant>>);

impl ManualClock {
    fn new() -> Self {
        Self(Arc::new(Mutex::new(Instant::now())))
    }

    fn now(&self) -> Instant {
        *self.0.lock()
    }

    fn advance(&self, by: Duration) {
        *self.0.lock() += by;
    }
}

/// Backend whose commands block like a real subprocess, advancing the clock
struct SlowBackend {
    inner: FakeBackend,
    clock: ManualClock,
    delay: Duration,
}

impl DisplayBackend for SlowBackend {
    fn list_monitors(&self) -> Result<Vec<Monitor>> {
        self.inner.list_monitors()
    }

    fn apply(&self, adjustment: &OutputAdjustment) -> Result<()> {
        self.clock.advance(self.delay);
        self.inner.apply(adjustment)
    }
}

/// Preferences without throttling so consecutive calls in a test all run
fn unthrottled() -> UserPreferences {
    UserPreferences {
        throttle_interval_ms: 0,
        ..UserPreferences::default()
    }
}

/// A session: tick a monitor, dim it, tint it warm, then reset everything
#[test]
fn test_dim_tint_and_reset_session() {
    let mut controller =
        DisplayController::new(FakeBackend::new(&["eDP-1", "HDMI-1"]), &unthrottled());

    controller.set_monitor_enabled("HDMI-1", true);
    controller.set_brightness(0.7);
    controller.set_color(Rgba::new(255, 180, 102, 255));

    let applied = controller.backend().take_applied();
    assert_eq!(applied.len(), 3);
    assert!(applied.iter().all(|a| a.output == "HDMI-1"));

    let last = applied.last().unwrap();
    assert!((last.brightness - 0.7).abs() < f32::EPSILON);
    assert_eq!(
        last.to_args()[..4],
        ["--output", "HDMI-1", "--brightness", "0.7"]
    );
    assert!((last.gamma.blue - 0.4).abs() < 1e-6);

    let outcome = controller.reset();
    assert_eq!(
        outcome,
        ApplyOutcome::Applied {
            outputs: 2,
            failures: 0
        }
    );
    let applied = controller.backend().take_applied();
    assert_eq!(
        applied,
        vec![
            OutputAdjustment {
                output: "eDP-1".to_string(),
                brightness: 1.0,
                gamma: GammaTriple::NEUTRAL,
            },
            OutputAdjustment {
                output: "HDMI-1".to_string(),
                brightness: 1.0,
                gamma: GammaTriple::NEUTRAL,
            },
        ]
    );
}

/// Dragging every gamma slider near zero must never reach the display
#[test]
fn test_black_screen_guard() {
    let mut controller = DisplayController::new(FakeBackend::new(&["eDP-1"]), &unthrottled());
    controller.set_monitor_enabled("eDP-1", true);
    controller.backend().take_applied();

    controller.set_gamma_by_index(0, 0.05).unwrap();
    controller.set_gamma_by_index(1, 0.05).unwrap();
    let outcome = controller.set_gamma_by_index(2, 0.04).unwrap();

    assert_eq!(outcome, ApplyOutcome::GammaTooLow);
    let applied = controller.backend().take_applied();
    assert!(applied.iter().all(|a| a.gamma.sum() >= 0.15));
}

/// The default throttle drops a burst of slider events
#[test]
fn test_default_throttle_drops_bursts() {
    let clock = ManualClock::new();
    let reader = clock.clone();
    let mut controller =
        DisplayController::new(FakeBackend::new(&["eDP-1"]), &UserPreferences::default())
            .with_clock(move || reader.now());
    controller.set_monitor_enabled("eDP-1", true);

    let outcomes: Vec<ApplyOutcome> = (1u8..=5)
        .map(|step| {
            clock.advance(Duration::from_millis(2));
            controller.set_brightness(1.0 - 0.1 * f32::from(step))
        })
        .collect();

    assert_eq!(
        outcomes,
        vec![
            ApplyOutcome::Throttled,
            ApplyOutcome::Throttled,
            ApplyOutcome::Throttled,
            ApplyOutcome::Throttled,
            ApplyOutcome::Applied {
                outputs: 1,
                failures: 0
            },
        ]
    );
    assert_eq!(controller.backend().take_applied().len(), 2);
}

/// A slider event right after a slow xrandr call is still rate limited
#[test]
fn test_throttle_holds_after_slow_command() {
    let clock = ManualClock::new();
    let reader = clock.clone();
    let backend = SlowBackend {
        inner: FakeBackend::new(&["eDP-1"]),
        clock: clock.clone(),
        delay: Duration::from_millis(30),
    };
    let mut controller = DisplayController::new(backend, &UserPreferences::default())
        .with_clock(move || reader.now());

    let first = controller.set_monitor_enabled("eDP-1", true);
    let second = controller.set_brightness(0.5);

    assert_eq!(
        first,
        ApplyOutcome::Applied {
            outputs: 1,
            failures: 0
        }
    );
    assert_eq!(second, ApplyOutcome::Throttled);

    clock.advance(Duration::from_millis(10));
    assert!(matches!(
        controller.set_brightness(0.5),
        ApplyOutcome::Applied { .. }
    ));
    assert_eq!(controller.backend().inner.take_applied().len(), 2);
}

#[test]
fn test_invalid_channel_is_reported() {
    let mut controller = DisplayController::new(FakeBackend::new(&["eDP-1"]), &unthrottled());

    let err = controller.set_gamma_by_index(7, 1.0).unwrap_err();

    assert!(matches!(err, NightLightError::InvalidColorChannel(7)));
    assert!(get_user_friendly_error(&err).contains("red, green and blue"));
}

/// Default config round-trips through the on-disk JSON format
#[test]
fn test_config_json_shape() {
    let config = AppConfig::default();
    let json = serde_json::to_value(&config).unwrap();

    assert_eq!(json["preferences"]["xrandr_path"], "xrandr");
    assert_eq!(json["preferences"]["throttle_interval_ms"], 10);
    assert_eq!(json["window_state"]["width"], 380);

    let parsed: AppConfig = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, config);
    assert!(ConfigManager::get_config_path().ends_with("config.json"));
}

/// Runs the real subprocess backend against a shell script standing in for xrandr
#[cfg(unix)]
#[test]
fn test_xrandr_backend_against_stub_script() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = tempfile::tempdir().unwrap();
    let calls = temp_dir.path().join("calls.log");
    let script = temp_dir.path().join("xrandr");
    std::fs::write(
        &script,
        format!(
            "#!/bin/sh\n\
             if [ \"$1\" = \"--listactivemonitors\" ]; then\n\
             printf 'Monitors: 2\\n 0: +*eDP-1 1920/344x1080/194+0+0  eDP-1\\n 1: +HDMI-1 2560/597x1440/336+1920+0  HDMI-1\\n'\n\
             else\n\
             echo \"$@\" >> '{}'\n\
             fi\n",
            calls.display()
        ),
    )
    .unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

    let preferences = UserPreferences {
        xrandr_path: script.clone(),
        ..unthrottled()
    };
    let mut controller = DisplayController::new(XrandrBackend::new(&script), &preferences);

    let names: Vec<&str> = controller
        .monitors()
        .iter()
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(names, ["eDP-1", "HDMI-1"]);
    assert!(controller.monitors()[0].primary);

    controller.set_monitor_enabled("eDP-1", true);
    controller.set_gamma_by_index(2, 0.5).unwrap();

    let log = std::fs::read_to_string(&calls).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(
        lines,
        [
            "--output eDP-1 --brightness 1 --gamma 1:1:1",
            "--output eDP-1 --brightness 1 --gamma 1:1:0.5",
        ]
    );
}
