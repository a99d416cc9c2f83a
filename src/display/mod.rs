//! Display control module
//!
//! This module wraps the external `xrandr` tool that applies brightness and
//! gamma to X11 outputs.
//!
//! # Overview
//!
//! - **Monitor enumeration** by parsing `xrandr --listactivemonitors`
//! - **Adjustment rendering** into the fixed `--output/--brightness/--gamma`
//!   argument shape
//! - **Color helpers** for gamma channels and color-picker normalization
//!
//! # Architecture
//!
//! - `DisplayBackend`: trait the controller talks to, so tests can record
//!   invocations instead of touching real displays
//! - `XrandrBackend`: the production backend, one blocking subprocess per call
//! - `Monitor`: an active monitor as reported by xrandr
//! - `OutputAdjustment`: brightness and gamma for one output
//!
//! # Example Usage
//!
//! ```no_run
//! use nightlight::display::{DisplayBackend, GammaTriple, OutputAdjustment, XrandrBackend};
//!
//! let backend = XrandrBackend::default();
//! for monitor in backend.list_monitors()? {
//!     backend.apply(&OutputAdjustment {
//!         output: monitor.name.clone(),
//!         brightness: 0.8,
//!         gamma: GammaTriple::new(1.0, 0.9, 0.7),
//!     })?;
//! }
//! # Ok::<(), nightlight::error::NightLightError>(())
//! ```

pub mod adjustment;
pub mod color;
pub mod monitor;
pub mod xrandr;

pub use adjustment::{GammaTriple, OutputAdjustment};
pub use color::{GammaChannel, Rgba};
pub use monitor::{Monitor, parse_active_monitors};
pub use xrandr::XrandrBackend;

use crate::error::Result;

/// Seam between the display controller and the system display tool
pub trait DisplayBackend {
    /// List the currently active monitors, in the order the tool reports them
    fn list_monitors(&self) -> Result<Vec<Monitor>>;

    /// Apply brightness and gamma to a single output
    fn apply(&self, adjustment: &OutputAdjustment) -> Result<()>;
}
