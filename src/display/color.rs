//! Gamma channels and color-picker normalization

use crate::display::GammaTriple;
use crate::error::NightLightError;

/// Smallest gamma a channel may take; xrandr rejects a zero gamma
pub const MIN_CHANNEL_GAMMA: f32 = 0.001;

/// One of the three gamma channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GammaChannel {
    /// Red channel (index 0)
    Red,
    /// Green channel (index 1)
    Green,
    /// Blue channel (index 2)
    Blue,
}

impl TryFrom<usize> for GammaChannel {
    type Error = NightLightError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::Red),
            1 => Ok(Self::Green),
            2 => Ok(Self::Blue),
            other => Err(NightLightError::InvalidColorChannel(other)),
        }
    }
}

/// Color picker value, 8 bits per component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha, kept for the picker but never applied
    pub a: u8,
}

impl Rgba {
    /// Opaque white, the picker's initial value
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Create a color
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Gamma that tints the display toward this color
    ///
    /// Each component maps to `c / 255`. A zero component becomes
    /// [`MIN_CHANNEL_GAMMA`] so the channel never goes fully dark.
    pub fn to_gamma(self) -> GammaTriple {
        GammaTriple::new(
            normalize_component(self.r),
            normalize_component(self.g),
            normalize_component(self.b),
        )
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

fn normalize_component(c: u8) -> f32 {
    if c == 0 {
        MIN_CHANNEL_GAMMA
    } else {
        f32::from(c) / 255.0
    }
}
