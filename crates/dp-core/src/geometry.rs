// ABOUTME: Container and pane size types.
// ABOUTME: Converts host-reported float dimensions into whole height units.

use serde::{Deserialize, Serialize};

/// Container size as reported by the host (may be garbage)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when both dimensions are finite and non-negative
    pub fn is_valid(&self) -> bool {
        is_valid_dimension(self.width) && is_valid_dimension(self.height)
    }

    /// Copy with negative, NaN or infinite dimensions replaced by 0
    pub fn clamped(&self) -> Self {
        Self {
            width: units(self.width) as f32,
            height: units(self.height) as f32,
        }
    }

    pub fn height_units(&self) -> u32 {
        units(self.height)
    }

    pub fn width_units(&self) -> u32 {
        units(self.width)
    }
}

pub fn is_valid_dimension(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

/// Convert a dimension to whole units, clamping invalid values to 0
pub fn units(value: f32) -> u32 {
    if is_valid_dimension(value) {
        value.floor() as u32
    } else {
        0
    }
}

/// Height range applied to a pane: it may render anywhere in `min..=max`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaneSize {
    pub min: u32,
    pub max: u32,
}

impl PaneSize {
    pub fn new(height: u32, extra: u32) -> Self {
        Self {
            min: height,
            max: height.saturating_add(extra),
        }
    }
}
