//! GUI module
//!
//! Provides the Slint-based window and its wiring to the display controller.

pub mod gui_controller;

pub use gui_controller::GuiController;
