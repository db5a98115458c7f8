//! # shape-raster
//!
//! Scan-conversion primitives and a pivot-aware 2D affine transform for
//! procedurally built pattern shapes.
//!
//! Given a shape description (a kind plus a few parameters, or an explicit
//! polygon) the crate produces two things:
//!
//! - an ordered list of integer grid points tracing the outline, built by
//!   chaining Bresenham lines between analytically derived vertices, and
//! - the exact floating-point vertices of the same polygon for solid fills.
//!
//! [`TransAffine`](trans_affine::TransAffine) then places, rotates and
//! scales those point lists in a world coordinate space. Y grows downward
//! and all angles are in radians.
//!
//! ## Layout
//!
//! 1. **Foundation**: points, rectangles, rounding ([`basics`]) and
//!    bounding boxes ([`bounding_rect`])
//! 2. **Scan conversion**: DDA and Bresenham lines ([`dda_line`]), midpoint
//!    circle and ellipse ([`ellipse_midpoint`])
//! 3. **Transforms**: the affine matrix ([`trans_affine`])
//! 4. **Shapes**: outline builder ([`shape_outline`]) and the cached shape
//!    library ([`shape_library`]) with its colours and configuration
//!
//! ## Example
//!
//! ```
//! use shape_raster::basics::PointF;
//! use shape_raster::shape_library::{ShapeKind, ShapeLibrary};
//!
//! let mut library = ShapeLibrary::new();
//! let hexagon = library.template(ShapeKind::Hexagon);
//! assert_eq!(hexagon.fill_vertices.len(), 6);
//!
//! let world = PointF::new(320.0, 240.0);
//! let placed = hexagon.placement(world, 0.5, 1.0).transform(hexagon.pivot);
//! assert!(placed.distance(world) < 1e-3);
//! ```

// Foundation
pub mod basics;
pub mod bounding_rect;
pub mod error;

// Scan conversion
pub mod dda_line;
pub mod ellipse_midpoint;

// Transforms
pub mod trans_affine;

// Shapes
pub mod color;
pub mod config;
pub mod shape_library;
pub mod shape_outline;

pub use error::{Result, ShapeError};
