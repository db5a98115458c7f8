//! DDA and Bresenham line interpolation.
//!
//! Both interpolators are iterators over [`PointI`] grid points and include
//! both end points. Shape outlines are always built from
//! [`LineBresenhamInterpolator`]; the DDA variant is an alternative line
//! primitive for callers that want it.

use crate::basics::{iround, PointI};

// ============================================================================
// DDA line interpolator
// ============================================================================

/// Floating-point DDA line interpolator.
///
/// The step count is the larger of `|dx|` and `|dy|`, taken from the
/// unrounded deltas. The position is advanced by the per-step increment and
/// rounded to the grid independently in X and Y. A line whose step count is
/// `n` yields `ceil(n) + 1` points; the last one is the end point itself.
#[derive(Debug, Clone)]
pub struct DdaLineInterpolator {
    x: f32,
    y: f32,
    xb: f32,
    yb: f32,
    x_inc: f32,
    y_inc: f32,
    count: u32,
    step: u64,
}

impl DdaLineInterpolator {
    pub fn new(xa: f32, ya: f32, xb: f32, yb: f32) -> Self {
        let dx = xb - xa;
        let dy = yb - ya;
        let steps = if dx.abs() > dy.abs() {
            dx.abs()
        } else {
            dy.abs()
        };
        let (x_inc, y_inc) = if steps > 0.0 {
            (dx / steps, dy / steps)
        } else {
            (0.0, 0.0)
        };
        Self {
            x: xa,
            y: ya,
            xb,
            yb,
            x_inc,
            y_inc,
            // Saturating cast: NaN gives 0, infinity gives u32::MAX.
            count: steps.ceil() as u32,
            step: 0,
        }
    }

    /// Number of increments between the two end points.
    #[inline]
    pub fn steps(&self) -> u32 {
        self.count
    }

    /// Per-step increment along each axis.
    #[inline]
    pub fn increments(&self) -> (f32, f32) {
        (self.x_inc, self.y_inc)
    }
}

impl Iterator for DdaLineInterpolator {
    type Item = PointI;

    fn next(&mut self) -> Option<PointI> {
        let count = self.count as u64;
        if self.step > count {
            return None;
        }
        let k = self.step;
        self.step += 1;
        if k == count {
            return Some(PointI::new(iround(self.xb), iround(self.yb)));
        }
        if k > 0 {
            self.x += self.x_inc;
            self.y += self.y_inc;
        }
        Some(PointI::new(iround(self.x), iround(self.y)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.count as u64 + 1).saturating_sub(self.step) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for DdaLineInterpolator {}

/// Rasterize the segment `(xa, ya) -> (xb, yb)` with the DDA algorithm.
pub fn line_dda(xa: f32, ya: f32, xb: f32, yb: f32) -> Vec<PointI> {
    DdaLineInterpolator::new(xa, ya, xb, yb).collect()
}

// ============================================================================
// Bresenham line interpolator
// ============================================================================

/// Integer Bresenham line interpolator covering all eight octants.
///
/// End points are rounded to the grid first. Every step moves to an
/// 8-adjacent cell: `2·err > -dy` advances X, `2·err < dx` advances Y, and
/// both may fire in the same step. Iteration ends after the rounded end
/// point has been yielded. Deltas and the error term are 64-bit, so any
/// pair of `i32` end points is valid.
#[derive(Debug, Clone)]
pub struct LineBresenhamInterpolator {
    x: i32,
    y: i32,
    x2: i32,
    y2: i32,
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    err: i64,
    done: bool,
}

impl LineBresenhamInterpolator {
    pub fn new(xa: f32, ya: f32, xb: f32, yb: f32) -> Self {
        Self::new_grid(
            PointI::new(iround(xa), iround(ya)),
            PointI::new(iround(xb), iround(yb)),
        )
    }

    /// Interpolator between two points already on the grid.
    pub fn new_grid(from: PointI, to: PointI) -> Self {
        let dx = (to.x as i64 - from.x as i64).abs();
        let dy = (to.y as i64 - from.y as i64).abs();
        Self {
            x: from.x,
            y: from.y,
            x2: to.x,
            y2: to.y,
            dx,
            dy,
            sx: if from.x < to.x { 1 } else { -1 },
            sy: if from.y < to.y { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }

    /// Length of the line along its dominant axis.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u32 {
        self.dx.max(self.dy) as u32
    }
}

impl Iterator for LineBresenhamInterpolator {
    type Item = PointI;

    fn next(&mut self) -> Option<PointI> {
        if self.done {
            return None;
        }
        let current = PointI::new(self.x, self.y);
        if self.x == self.x2 && self.y == self.y2 {
            self.done = true;
            return Some(current);
        }
        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(current)
    }
}

/// Rasterize the segment `(xa, ya) -> (xb, yb)` with Bresenham's algorithm.
pub fn line_bresenham(xa: f32, ya: f32, xb: f32, yb: f32) -> Vec<PointI> {
    LineBresenhamInterpolator::new(xa, ya, xb, yb).collect()
}

// ============================================================================
// Tests
// ============================================================================
