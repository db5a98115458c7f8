//! Shape outline builder.
//!
//! Each [`ShapeParams`] variant derives a handful of floating-point vertices
//! from its parameters. [`ShapeParams::outline`] joins those vertices with
//! Bresenham lines and concatenates the per-edge point lists, so shared
//! corners appear once per edge that touches them. Degenerate parameters
//! (zero or negative sizes) are accepted and simply produce degenerate
//! outlines.

use crate::basics::{deg2rad, PointF, PointI, SQRT_3};
use crate::dda_line::{line_bresenham, LineBresenhamInterpolator};
use crate::ellipse_midpoint::{circle_midpoint, ellipse_midpoint};

/// Interior angle of the library rhombus, in degrees.
pub const RHOMBUS_ANGLE_DEG: f32 = 30.0;

// ============================================================================
// Shape parameters
// ============================================================================

/// Closed set of polygonal shape kinds with their parameters.
///
/// `anchor` is the top-left reference point of the shape unless stated
/// otherwise. Y grows downward.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeParams {
    /// Axis-aligned square with its top-left corner at `anchor`.
    Square { anchor: PointF, size: f32 },
    /// Axis-aligned rectangle with its top-left corner at `anchor`.
    Rectangle {
        anchor: PointF,
        width: f32,
        height: f32,
    },
    /// Right angle at `anchor`, legs along +X (`base`) and +Y (`height`).
    RightTriangle {
        anchor: PointF,
        base: f32,
        height: f32,
    },
    /// Triangle through three explicit points.
    Triangle { a: PointF, b: PointF, c: PointF },
    /// Equilateral triangle with its apex at `anchor + (side / 2, 0)` and
    /// its base `√3/2 · side` below the anchor.
    EquilateralTriangle { anchor: PointF, side: f32 },
    /// Trapezoid with a vertical left leg.
    RightTrapezoid {
        anchor: PointF,
        top: f32,
        bottom: f32,
        height: f32,
    },
    /// Trapezoid whose bottom edge overhangs the top by
    /// `(bottom - top) / 2` on each side.
    IsoscelesTrapezoid {
        anchor: PointF,
        top: f32,
        bottom: f32,
        height: f32,
    },
    /// Parallelogram whose bottom edge is shifted by `offset` along X.
    /// A negative offset leans left.
    Parallelogram {
        anchor: PointF,
        base: f32,
        height: f32,
        offset: f32,
    },
    /// 30° rhombus. With `flip` the shape is mirrored about its own
    /// vertical mid-axis and shifted back so its leftmost X is `anchor.x`.
    Rhombus {
        anchor: PointF,
        side: f32,
        flip: bool,
    },
    /// Pointy-top regular hexagon inside a `√3·side × 2·side` box whose
    /// top-left corner is `anchor`.
    Hexagon { anchor: PointF, side: f32 },
    /// Closed polygon through explicit vertices.
    Polygon { vertices: Vec<PointF> },
}

impl ShapeParams {
    /// Analytic vertices of the shape, in outline order.
    pub fn vertices(&self) -> Vec<PointF> {
        match *self {
            ShapeParams::Square { anchor, size } => rect_vertices(anchor, size, size),
            ShapeParams::Rectangle {
                anchor,
                width,
                height,
            } => rect_vertices(anchor, width, height),
            ShapeParams::RightTriangle {
                anchor,
                base,
                height,
            } => vec![
                anchor,
                anchor + PointF::new(base, 0.0),
                anchor + PointF::new(0.0, height),
            ],
            ShapeParams::Triangle { a, b, c } => vec![a, b, c],
            ShapeParams::EquilateralTriangle { anchor, side } => {
                let h = SQRT_3 / 2.0 * side;
                vec![
                    anchor + PointF::new(0.0, h),
                    anchor + PointF::new(side, h),
                    anchor + PointF::new(side / 2.0, 0.0),
                ]
            }
            ShapeParams::RightTrapezoid {
                anchor,
                top,
                bottom,
                height,
            } => vec![
                anchor,
                anchor + PointF::new(top, 0.0),
                anchor + PointF::new(bottom, height),
                anchor + PointF::new(0.0, height),
            ],
            ShapeParams::IsoscelesTrapezoid {
                anchor,
                top,
                bottom,
                height,
            } => {
                let overhang = (bottom - top) / 2.0;
                vec![
                    anchor,
                    anchor + PointF::new(top, 0.0),
                    anchor + PointF::new(top + overhang, height),
                    anchor + PointF::new(-overhang, height),
                ]
            }
            ShapeParams::Parallelogram {
                anchor,
                base,
                height,
                offset,
            } => vec![
                anchor,
                anchor + PointF::new(base, 0.0),
                anchor + PointF::new(base + offset, height),
                anchor + PointF::new(offset, height),
            ],
            ShapeParams::Rhombus { anchor, side, flip } => rhombus_vertices(anchor, side, flip),
            ShapeParams::Hexagon { anchor, side } => hexagon_vertices(anchor, side),
            ShapeParams::Polygon { ref vertices } => vertices.clone(),
        }
    }

    /// Integer outline built from Bresenham lines between the vertices.
    pub fn outline(&self) -> Vec<PointI> {
        let v = self.vertices();
        match self {
            // Legs first, then the hypotenuse.
            ShapeParams::RightTriangle { .. } => {
                let mut out = Vec::new();
                for (i, j) in [(0, 1), (0, 2), (1, 2)] {
                    out.extend(line_from_points(v[i], v[j]));
                }
                out
            }
            _ => polygon(&v),
        }
    }
}

fn rect_vertices(anchor: PointF, width: f32, height: f32) -> Vec<PointF> {
    vec![
        anchor,
        anchor + PointF::new(width, 0.0),
        anchor + PointF::new(width, height),
        anchor + PointF::new(0.0, height),
    ]
}

fn rhombus_vertices(anchor: PointF, side: f32, flip: bool) -> Vec<PointF> {
    let angle = deg2rad(RHOMBUS_ANGLE_DEG);
    let slant = PointF::new(side * angle.cos(), side * angle.sin());

    let p0 = anchor;
    let p1 = anchor + PointF::new(side, 0.0);
    let mut v = vec![p0, p1, p1 + slant, p0 + slant];
    if !flip {
        return v;
    }

    // Mirror about the vertical mid-axis, then shift the leftmost point
    // back onto the anchor column.
    let axis = anchor.x + (side + slant.x) / 2.0;
    for p in v.iter_mut() {
        p.x = axis + (axis - p.x);
    }
    let min_x = v.iter().map(|p| p.x).fold(f32::INFINITY, f32::min);
    let shift = anchor.x - min_x;
    for p in v.iter_mut() {
        p.x += shift;
    }
    v
}

fn hexagon_vertices(anchor: PointF, side: f32) -> Vec<PointF> {
    let radius = side;
    let center = anchor + PointF::new(SQRT_3 * radius / 2.0, radius);
    (0..6)
        .map(|i| {
            let a = deg2rad(60.0 * i as f32 + 30.0);
            PointF::new(center.x + radius * a.cos(), center.y + radius * a.sin())
        })
        .collect()
}

// ============================================================================
// Free-standing outline helpers
// ============================================================================

/// Bresenham line between two floating-point points.
pub fn line_from_points(a: PointF, b: PointF) -> Vec<PointI> {
    line_bresenham(a.x, a.y, b.x, b.y)
}

/// Bresenham line along `y = m·x + c` for `x` in `[x_min, x_max]`.
pub fn line_linear(m: f32, c: f32, x_min: f32, x_max: f32) -> Vec<PointI> {
    line_bresenham(x_min, m * x_min + c, x_max, m * x_max + c)
}

/// Closed outline through `vertices`, wrapping from the last back to the
/// first. An empty slice gives an empty outline.
pub fn polygon(vertices: &[PointF]) -> Vec<PointI> {
    let n = vertices.len();
    let mut out = Vec::new();
    for i in 0..n {
        let (a, b) = (vertices[i], vertices[(i + 1) % n]);
        out.extend(LineBresenhamInterpolator::new(a.x, a.y, b.x, b.y));
    }
    out
}

/// Midpoint circle centered on `center`, truncated to the grid.
pub fn circle(center: PointF, radius: i32) -> Vec<PointI> {
    circle_midpoint(center.x as i32, center.y as i32, radius)
}

/// Midpoint ellipse centered on `center`, truncated to the grid.
pub fn ellipse(center: PointF, rx: i32, ry: i32) -> Vec<PointI> {
    ellipse_midpoint(center.x as i32, center.y as i32, rx, ry)
}

// ============================================================================
// Tests
// ============================================================================
