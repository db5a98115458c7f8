//! Affine transformation matrix.
//!
//! 2D affine transformations for placing shapes in world space:
//! translation, scaling, rotation, shearing and axis reflections. Scaling,
//! rotation and shearing take a pivot.
//!
//! Coordinates follow screen convention (Y grows downward), so a clockwise
//! rotation by a positive angle carries `(1, 0)` toward `(0, 1)`.

use crate::basics::{ifloor, is_equal_eps, PointF, PointI};

/// Tolerance used by `PartialEq` and the placement scale check.
pub const AFFINE_EPSILON: f32 = 1e-6;

/// 2D affine transformation matrix.
///
/// Stores six components: `[sx, shy, shx, sy, tx, ty]` representing the
/// homogeneous matrix:
///
/// ```text
///   | sx  shx tx |
///   | shy  sy ty |
///   |  0    0  1 |
/// ```
///
/// Transform: `x' = x*sx + y*shx + tx`, `y' = x*shy + y*sy + ty`.
///
/// Every operation method applies its transform *after* everything already
/// accumulated (in column-vector form `M' = Op · M`), so a chain of calls
/// reads in the order the point experiences them.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransAffine {
    pub sx: f32,
    pub shy: f32,
    pub shx: f32,
    pub sy: f32,
    pub tx: f32,
    pub ty: f32,
}

impl TransAffine {
    // ====================================================================
    // Construction
    // ====================================================================

    /// Identity matrix.
    pub const fn new() -> Self {
        Self {
            sx: 1.0,
            shy: 0.0,
            shx: 0.0,
            sy: 1.0,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Matrix from its six components, in storage order.
    pub const fn new_custom(sx: f32, shy: f32, shx: f32, sy: f32, tx: f32, ty: f32) -> Self {
        Self {
            sx,
            shy,
            shx,
            sy,
            tx,
            ty,
        }
    }

    /// Translation matrix.
    pub fn new_translation(x: f32, y: f32) -> Self {
        Self::new_custom(1.0, 0.0, 0.0, 1.0, x, y)
    }

    /// Non-uniform scaling matrix about the origin.
    pub fn new_scaling(x: f32, y: f32) -> Self {
        Self::new_custom(x, 0.0, 0.0, y, 0.0, 0.0)
    }

    /// Clockwise (screen space) rotation about the origin, `a` in radians.
    pub fn new_rotation_cw(a: f32) -> Self {
        let (sa, ca) = a.sin_cos();
        Self::new_custom(ca, sa, -sa, ca, 0.0, 0.0)
    }

    /// Counter-clockwise (screen space) rotation about the origin.
    ///
    /// Same cosine terms as [`new_rotation_cw`](Self::new_rotation_cw) with
    /// the sine terms swapped, so an angle of 0 is the identity for both.
    pub fn new_rotation_ccw(a: f32) -> Self {
        let (sa, ca) = a.sin_cos();
        Self::new_custom(ca, -sa, sa, ca, 0.0, 0.0)
    }

    /// Shear matrix: `x' = x + kx*y`, `y' = ky*x + y`.
    pub fn new_shearing(kx: f32, ky: f32) -> Self {
        Self::new_custom(1.0, ky, kx, 1.0, 0.0, 0.0)
    }

    /// Placement of a shape whose local pivot is `local_pivot`.
    ///
    /// Scales by `scale` about the local pivot (skipped when `scale` is 1),
    /// rotates clockwise by `angle` radians about it, then translates so
    /// the local pivot lands exactly on `world_pivot`.
    pub fn new_placement(local_pivot: PointF, world_pivot: PointF, angle: f32, scale: f32) -> Self {
        let mut m = Self::new();
        if !is_equal_eps(scale, 1.0, AFFINE_EPSILON) {
            m.scale(scale, scale, local_pivot);
        }
        m.rotate_cw(angle, local_pivot);
        let d = world_pivot - local_pivot;
        m.translate(d.x, d.y);
        m
    }

    // ====================================================================
    // Operations (mutate self)
    // ====================================================================

    /// Reset to identity.
    pub fn reset(&mut self) -> &mut Self {
        *self = Self::new();
        self
    }

    /// Translate.
    pub fn translate(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.tx += dx;
        self.ty += dy;
        self
    }

    /// Non-uniform scale about `pivot`.
    pub fn scale(&mut self, sx: f32, sy: f32, pivot: PointF) -> &mut Self {
        self.apply_about(&Self::new_scaling(sx, sy), pivot)
    }

    /// Clockwise rotation by `a` radians about `pivot`.
    pub fn rotate_cw(&mut self, a: f32, pivot: PointF) -> &mut Self {
        self.apply_about(&Self::new_rotation_cw(a), pivot)
    }

    /// Counter-clockwise rotation by `a` radians about `pivot`.
    pub fn rotate_ccw(&mut self, a: f32, pivot: PointF) -> &mut Self {
        self.apply_about(&Self::new_rotation_ccw(a), pivot)
    }

    /// Shear by `kx`, `ky` about `pivot`.
    pub fn shear(&mut self, kx: f32, ky: f32, pivot: PointF) -> &mut Self {
        self.apply_about(&Self::new_shearing(kx, ky), pivot)
    }

    /// Mirror across the X axis (`y -> -y`).
    pub fn reflect_x(&mut self) -> &mut Self {
        self.shy = -self.shy;
        self.sy = -self.sy;
        self.ty = -self.ty;
        self
    }

    /// Mirror across the Y axis (`x -> -x`).
    pub fn reflect_y(&mut self) -> &mut Self {
        self.sx = -self.sx;
        self.shx = -self.shx;
        self.tx = -self.tx;
        self
    }

    /// Point reflection through the origin.
    pub fn reflect_origin(&mut self) -> &mut Self {
        self.reflect_x();
        self.reflect_y()
    }

    /// Apply `op` after the current transform, centered on `pivot`.
    ///
    /// A pivot of exactly `(0, 0)` skips the translate wrap entirely, so it
    /// means "no re-centering". The result is the same as an origin pivot
    /// for a linear `op`, but callers should not rely on an origin pivot
    /// behaving differently from no pivot at all.
    fn apply_about(&mut self, op: &TransAffine, pivot: PointF) -> &mut Self {
        if pivot.is_origin() {
            return self.multiply(op);
        }
        self.translate(-pivot.x, -pivot.y);
        self.multiply(op);
        self.translate(pivot.x, pivot.y)
    }

    /// Compose: `self` first, then `m`.
    pub fn multiply(&mut self, m: &TransAffine) -> &mut Self {
        let t0 = self.sx * m.sx + self.shy * m.shx;
        let t2 = self.shx * m.sx + self.sy * m.shx;
        let t4 = self.tx * m.sx + self.ty * m.shx + m.tx;
        self.shy = self.sx * m.shy + self.shy * m.sy;
        self.sy = self.shx * m.shy + self.sy * m.sy;
        self.ty = self.tx * m.shy + self.ty * m.sy + m.ty;
        self.sx = t0;
        self.shx = t2;
        self.tx = t4;
        self
    }

    // ====================================================================
    // Transformations
    // ====================================================================

    /// Forward transform of a single point.
    #[inline]
    pub fn transform(&self, p: PointF) -> PointF {
        PointF::new(
            p.x * self.sx + p.y * self.shx + self.tx,
            p.x * self.shy + p.y * self.sy + self.ty,
        )
    }

    /// Transform a batch of points, preserving order and duplicates.
    pub fn transform_points<P>(&self, points: &[P]) -> Vec<PointF>
    where
        P: Copy + Into<PointF>,
    {
        points.iter().map(|&p| self.transform(p.into())).collect()
    }

    /// Transform a batch of points and floor the results onto the grid.
    pub fn transform_grid<P>(&self, points: &[P]) -> Vec<PointI>
    where
        P: Copy + Into<PointF>,
    {
        points
            .iter()
            .map(|&p| {
                let q = self.transform(p.into());
                PointI::new(ifloor(q.x), ifloor(q.y))
            })
            .collect()
    }

    // ====================================================================
    // Auxiliary
    // ====================================================================

    /// Determinant of the linear part; 0 for collapsing scales.
    #[inline]
    pub fn determinant(&self) -> f32 {
        self.sx * self.sy - self.shy * self.shx
    }

    /// True when every component is within `epsilon` of the identity.
    pub fn is_identity(&self, epsilon: f32) -> bool {
        self.is_equal(&Self::new(), epsilon)
    }

    /// Component-wise comparison with an absolute tolerance.
    pub fn is_equal(&self, m: &TransAffine, epsilon: f32) -> bool {
        is_equal_eps(self.sx, m.sx, epsilon)
            && is_equal_eps(self.shy, m.shy, epsilon)
            && is_equal_eps(self.shx, m.shx, epsilon)
            && is_equal_eps(self.sy, m.sy, epsilon)
            && is_equal_eps(self.tx, m.tx, epsilon)
            && is_equal_eps(self.ty, m.ty, epsilon)
    }

    /// `(tx, ty)`.
    pub fn translation(&self) -> (f32, f32) {
        (self.tx, self.ty)
    }
}

impl Default for TransAffine {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for TransAffine {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other, AFFINE_EPSILON)
    }
}

impl std::ops::Mul for TransAffine {
    type Output = TransAffine;
    fn mul(self, rhs: TransAffine) -> TransAffine {
        let mut result = self;
        result.multiply(&rhs);
        result
    }
}

impl std::ops::MulAssign for TransAffine {
    fn mul_assign(&mut self, rhs: TransAffine) {
        self.multiply(&rhs);
    }
}

// ============================================================================
// Tests
// ============================================================================
