//! Brightness/gamma adjustment for a single output

use std::fmt;

/// Per-channel gamma, rendered as `r:g:b` on the command line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GammaTriple {
    /// Red channel
    pub red: f32,
    /// Green channel
    pub green: f32,
    /// Blue channel
    pub blue: f32,
}

impl GammaTriple {
    /// Neutral gamma (no correction)
    pub const NEUTRAL: Self = Self::new(1.0, 1.0, 1.0);

    /// Create a gamma triple
    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    /// Sum of the three channels, used by the black-screen guard
    pub fn sum(&self) -> f32 {
        self.red + self.green + self.blue
    }
}

impl Default for GammaTriple {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for GammaTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.red, self.green, self.blue)
    }
}

/// Brightness and gamma to apply to one named output
#[derive(Debug, Clone, PartialEq)]
pub struct OutputAdjustment {
    /// Output name as reported by xrandr (e.g. `eDP-1`)
    pub output: String,
    /// Overall brightness scaling
    pub brightness: f32,
    /// Per-channel gamma
    pub gamma: GammaTriple,
}

impl OutputAdjustment {
    /// Render the argument vector passed to the display tool
    pub fn to_args(&self) -> Vec<String> {
        vec![
            "--output".to_string(),
            self.output.clone(),
            "--brightness".to_string(),
            self.brightness.to_string(),
            "--gamma".to_string(),
            self.gamma.to_string(),
        ]
    }
}
