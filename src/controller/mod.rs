//! Display controller module
//!
//! This module holds the state mirrored from the GUI widgets and turns every
//! change into `xrandr` invocations.
//!
//! # Overview
//!
//! The display controller:
//! - **Mirrors widget values**: brightness, three gamma channels, picked color
//! - **Tracks monitors**: one enabled flag per active monitor, in xrandr order
//! - **Rate limits**: skips a pass fired within the throttle interval (10ms)
//! - **Guards against black screens**: skips a pass while the gamma channels
//!   sum below 0.15
//!
//! # Event Flow
//!
//! ```text
//! slider / checkbox / picker → DisplayController::set_* → apply()
//!                                                     ↓
//!                                 DisplayBackend::apply per monitor
//! ```
//!
//! Everything runs on the GUI thread. A pass blocks until every subprocess
//! has exited. Failures are logged and counted, never retried.

pub mod display_controller;

pub use display_controller::{
    ApplyOutcome, Clock, DisplayController, DisplaySnapshot, MonitorState,
};
