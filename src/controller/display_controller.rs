//! Display controller implementation
//!
//! This module implements the controller that keeps brightness, gamma and the
//! per-monitor enabled flags, and pushes them to the display backend.

use crate::config::UserPreferences;
use crate::display::{DisplayBackend, GammaChannel, GammaTriple, OutputAdjustment, Rgba};
use crate::error::Result;
use std::ops::RangeInclusive;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Range of the brightness slider
pub const BRIGHTNESS_RANGE: RangeInclusive<f32> = 0.1..=2.0;

/// Range of each gamma slider
pub const GAMMA_RANGE: RangeInclusive<f32> = crate::display::color::MIN_CHANNEL_GAMMA..=2.0;

/// Brightness restored by a reset
pub const DEFAULT_BRIGHTNESS: f32 = 1.0;

/// A monitor and whether adjustments are applied to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorState {
    /// Output name
    pub name: String,
    /// Whether xrandr reports this as the primary monitor
    pub primary: bool,
    /// Whether the user ticked this monitor
    pub enabled: bool,
}

/// Result of an invocation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The previous pass ran less than the throttle interval ago
    Throttled,
    /// The gamma channels sum below the black-screen threshold
    GammaTooLow,
    /// Commands were issued
    Applied {
        /// Number of outputs a command was issued for
        outputs: usize,
        /// Number of those commands that failed
        failures: usize,
    },
}

/// Copy of the controller state for widget updates
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySnapshot {
    /// Current brightness
    pub brightness: f32,
    /// Current gamma
    pub gamma: GammaTriple,
    /// Last picked color
    pub color: Rgba,
    /// Monitors in xrandr order
    pub monitors: Vec<MonitorState>,
}

/// Source of the instants used for throttling
pub type Clock = Box<dyn Fn() -> Instant + Send>;

/// Display controller
pub struct DisplayController<B: DisplayBackend> {
    backend: B,
    brightness: f32,
    gamma: GammaTriple,
    color: Rgba,
    monitors: Vec<MonitorState>,
    last_run: Option<Instant>,
    throttle_interval: Duration,
    min_gamma_sum: f32,
    clock: Clock,
}

impl<B: DisplayBackend> DisplayController<B> {
    /// Create a controller and enumerate monitors through the backend
    ///
    /// Every monitor starts disabled. An enumeration failure is logged and
    /// leaves the monitor list empty.
    pub fn new(backend: B, preferences: &UserPreferences) -> Self {
        let mut controller = Self {
            backend,
            brightness: DEFAULT_BRIGHTNESS,
            gamma: GammaTriple::NEUTRAL,
            color: Rgba::WHITE,
            monitors: Vec::new(),
            last_run: None,
            throttle_interval: Duration::from_millis(preferences.throttle_interval_ms),
            min_gamma_sum: preferences.min_gamma_sum,
            clock: Box::new(Instant::now),
        };

        if let Err(e) = controller.refresh_monitors() {
            warn!("Failed to enumerate monitors: {}", e);
        }

        controller
    }

    /// Replace the clock used to time invocation passes
    #[must_use]
    pub fn with_clock(mut self, clock: impl Fn() -> Instant + Send + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Re-enumerate monitors, keeping the enabled flag of monitors still present
    pub fn refresh_monitors(&mut self) -> Result<&[MonitorState]> {
        let listed = self.backend.list_monitors()?;

        let monitors: Vec<MonitorState> = listed
            .into_iter()
            .map(|monitor| {
                let enabled = self
                    .monitors
                    .iter()
                    .any(|known| known.name == monitor.name && known.enabled);
                MonitorState {
                    name: monitor.name,
                    primary: monitor.primary,
                    enabled,
                }
            })
            .collect();

        info!(
            "Active monitors: [{}]",
            monitors
                .iter()
                .map(|m| m.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        self.monitors = monitors;
        Ok(&self.monitors)
    }

    /// Backend this controller drives
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Monitors in xrandr order
    pub fn monitors(&self) -> &[MonitorState] {
        &self.monitors
    }

    /// Current brightness
    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Current gamma
    pub fn gamma(&self) -> GammaTriple {
        self.gamma
    }

    /// Snapshot of the state for the GUI
    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot {
            brightness: self.brightness,
            gamma: self.gamma,
            color: self.color,
            monitors: self.monitors.clone(),
        }
    }

    /// Tick or untick a monitor, then apply to the enabled monitors
    pub fn set_monitor_enabled(&mut self, name: &str, enabled: bool) -> ApplyOutcome {
        match self.monitors.iter_mut().find(|m| m.name == name) {
            Some(monitor) => {
                debug!("Monitor {} enabled={}", name, enabled);
                monitor.enabled = enabled;
            }
            None => warn!("Ignoring toggle for unknown monitor {}", name),
        }
        self.apply(false)
    }

    /// Set brightness, then apply to the enabled monitors
    pub fn set_brightness(&mut self, value: f32) -> ApplyOutcome {
        self.brightness = value.clamp(*BRIGHTNESS_RANGE.start(), *BRIGHTNESS_RANGE.end());
        debug!("Brightness set to {}", self.brightness);
        self.apply(false)
    }

    /// Set one gamma channel, then apply to the enabled monitors
    pub fn set_gamma(&mut self, channel: GammaChannel, value: f32) -> ApplyOutcome {
        let value = value.clamp(*GAMMA_RANGE.start(), *GAMMA_RANGE.end());
        match channel {
            GammaChannel::Red => self.gamma.red = value,
            GammaChannel::Green => self.gamma.green = value,
            GammaChannel::Blue => self.gamma.blue = value,
        }
        debug!("Gamma {:?} set to {}", channel, value);
        self.apply(false)
    }

    /// Set a gamma channel by its slider index (0 red, 1 green, 2 blue)
    pub fn set_gamma_by_index(&mut self, index: usize, value: f32) -> Result<ApplyOutcome> {
        let channel = GammaChannel::try_from(index)?;
        Ok(self.set_gamma(channel, value))
    }

    /// Tint toward a picked color, then apply to the enabled monitors
    ///
    /// The gamma channels are overwritten with the normalized color, so the
    /// caller should refresh the gamma sliders from [`Self::gamma`].
    pub fn set_color(&mut self, color: Rgba) -> ApplyOutcome {
        self.color = color;
        self.gamma = color.to_gamma();
        debug!("Color {:?} mapped to gamma {}", color, self.gamma);
        self.apply(false)
    }

    /// Restore neutral brightness, gamma and color on every monitor
    ///
    /// Monitor enabled flags are kept. The pass includes disabled monitors so a
    /// monitor that was unticked after being tinted is restored too.
    pub fn reset(&mut self) -> ApplyOutcome {
        info!("Resetting brightness and gamma on all monitors");
        self.brightness = DEFAULT_BRIGHTNESS;
        self.gamma = GammaTriple::NEUTRAL;
        self.color = Rgba::WHITE;
        self.apply(true)
    }

    /// Push the current brightness and gamma to the monitors
    ///
    /// With `include_all_monitors` false only enabled monitors are touched.
    /// The throttle interval is measured from the end of the previous pass.
    pub fn apply(&mut self, include_all_monitors: bool) -> ApplyOutcome {
        let now = (self.clock)();
        if let Some(last_run) = self.last_run
            && now.saturating_duration_since(last_run) < self.throttle_interval
        {
            debug!("Throttled: previous pass ran less than {:?} ago", self.throttle_interval);
            return ApplyOutcome::Throttled;
        }

        if self.gamma.sum() < self.min_gamma_sum {
            debug!(
                "Skipping pass: gamma {} sums below {}",
                self.gamma, self.min_gamma_sum
            );
            return ApplyOutcome::GammaTooLow;
        }

        let mut outputs = 0;
        let mut failures = 0;
        for monitor in &self.monitors {
            if !include_all_monitors && !monitor.enabled {
                continue;
            }

            let adjustment = OutputAdjustment {
                output: monitor.name.clone(),
                brightness: self.brightness,
                gamma: self.gamma,
            };
            outputs += 1;
            if let Err(e) = self.backend.apply(&adjustment) {
                failures += 1;
                warn!("Failed to adjust {}: {}", monitor.name, e);
            }
        }

        self.last_run = Some((self.clock)());
        ApplyOutcome::Applied { outputs, failures }
    }
}
