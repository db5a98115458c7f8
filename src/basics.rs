//! Foundation types, rounding helpers, and angle conversion.
//!
//! Everything else in the crate is expressed in terms of [`Point`] and
//! [`Rect`]. Two point flavours are used on purpose: [`PointI`] for
//! grid-aligned outline pixels and [`PointF`] for exact polygon vertices.

use core::ops::{Add, Neg, Sub};

// ============================================================================
// Rounding and conversion functions
// ============================================================================

/// Round to the nearest integer, ties to even.
///
/// `0.5 -> 0`, `1.5 -> 2`, `2.5 -> 2`, `-0.5 -> 0`. Every outline producer
/// snaps coordinates through this function so that lines, polygons and
/// transformed grids agree on tie-breaking.
#[inline]
pub fn iround(v: f32) -> i32 {
    v.round_ties_even() as i32
}

/// Floor to the nearest integer toward negative infinity.
#[inline]
pub fn ifloor(v: f32) -> i32 {
    v.floor() as i32
}

// ============================================================================
// Mathematical constants
// ============================================================================

pub const PI: f32 = core::f32::consts::PI;

/// `sqrt(3)`, the ratio that shows up in every 60° construction.
pub const SQRT_3: f32 = 1.732_050_8;

/// Convert degrees to radians.
#[inline]
pub fn deg2rad(deg: f32) -> f32 {
    deg * PI / 180.0
}

/// Convert radians to degrees.
#[inline]
pub fn rad2deg(rad: f32) -> f32 {
    rad * 180.0 / PI
}

/// Absolute-difference comparison for single-precision values.
#[inline]
pub fn is_equal_eps(v1: f32, v2: f32, epsilon: f32) -> bool {
    (v1 - v2).abs() <= epsilon
}

// ============================================================================
// Point
// ============================================================================

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<T: Copy> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> Point<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// Integer grid point, the element type of every rasterized outline.
pub type PointI = Point<i32>;
/// Single-precision point, the element type of fill vertices and transforms.
pub type PointF = Point<f32>;

impl PointF {
    pub const ORIGIN: PointF = PointF::new(0.0, 0.0);

    /// Snap to the integer grid with [`iround`].
    #[inline]
    pub fn to_grid(self) -> PointI {
        PointI::new(iround(self.x), iround(self.y))
    }

    /// True only for the exact origin `(0.0, 0.0)`.
    #[inline]
    pub fn is_origin(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: PointF) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<PointI> for PointF {
    #[inline]
    fn from(p: PointI) -> Self {
        PointF::new(p.x as f32, p.y as f32)
    }
}

impl From<(f32, f32)> for PointF {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        PointF::new(x, y)
    }
}

impl<T: Copy + Add<Output = T>> Add for Point<T> {
    type Output = Point<T>;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Copy + Sub<Output = T>> Sub for Point<T> {
    type Output = Point<T>;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Copy + Neg<Output = T>> Neg for Point<T> {
    type Output = Point<T>;
    #[inline]
    fn neg(self) -> Self {
        Point::new(-self.x, -self.y)
    }
}

// ============================================================================
// Rect
// ============================================================================

/// A rectangle defined by two corner points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect<T: Copy> {
    pub x1: T,
    pub y1: T,
    pub x2: T,
    pub y2: T,
}

impl<T: Copy + PartialOrd> Rect<T> {
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Grow the rectangle so that it contains `(x, y)`.
    pub fn expand_to(&mut self, x: T, y: T) {
        if x < self.x1 {
            self.x1 = x;
        }
        if y < self.y1 {
            self.y1 = y;
        }
        if x > self.x2 {
            self.x2 = x;
        }
        if y > self.y2 {
            self.y2 = y;
        }
    }
}

impl RectF {
    /// Midpoint of the rectangle.
    pub fn center(&self) -> PointF {
        PointF::new((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }
}

impl From<RectI> for RectF {
    fn from(r: RectI) -> Self {
        RectF::new(r.x1 as f32, r.y1 as f32, r.x2 as f32, r.y2 as f32)
    }
}

/// Rectangle with `i32` coordinates.
pub type RectI = Rect<i32>;
/// Rectangle with `f32` coordinates.
pub type RectF = Rect<f32>;

// ============================================================================
// Tests
// ============================================================================
