//! Shape library configuration.

use crate::error::{Result, ShapeError};

/// Default edge length, in pixels, of the library's unit shapes.
pub const DEFAULT_UNIT_SIZE: f32 = 50.0;

/// Settings for a [`ShapeLibrary`](crate::shape_library::ShapeLibrary).
///
/// With the `serde` feature enabled, missing fields fall back to their
/// defaults when deserializing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LibraryConfig {
    /// Edge length of the unit square, triangle, rhombus and hexagon.
    pub unit_size: f32,
}

impl LibraryConfig {
    pub fn new(unit_size: f32) -> Self {
        Self { unit_size }
    }

    /// Reject unit sizes that are not finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        validate_unit_size(self.unit_size)
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            unit_size: DEFAULT_UNIT_SIZE,
        }
    }
}

pub(crate) fn validate_unit_size(unit_size: f32) -> Result<()> {
    if unit_size.is_finite() && unit_size > 0.0 {
        Ok(())
    } else {
        Err(ShapeError::InvalidUnitSize(unit_size))
    }
}
