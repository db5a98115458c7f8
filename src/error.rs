//! Error type for the few fallible entry points.
//!
//! Rasterization, outline building and transforms are total and never
//! fail. Errors only come from parsing names and colours and from
//! validating a library configuration.

use thiserror::Error;

/// Result type for shape-raster operations.
pub type Result<T> = std::result::Result<T, ShapeError>;

/// Errors surfaced by parsing and configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// A shape-kind name did not match any known kind.
    #[error("unknown shape kind: {0:?}")]
    UnknownShapeKind(String),

    /// A colour string was not `#rrggbb` or `#rrggbbaa`.
    #[error("invalid hex color: {0:?}")]
    InvalidHexColor(String),

    /// The unit size must be a finite, strictly positive number.
    #[error("invalid unit size: {0}")]
    InvalidUnitSize(f32),
}
