//! Shape library: outline, fill and pivot templates per shape kind.
//!
//! The library builds every kind from a single unit size. Templates are
//! built at the origin on first request and cached until the unit size
//! changes or [`ShapeLibrary::invalidate`] is called. Callers that share a
//! library between threads wrap it in a `Mutex`; the templates themselves
//! are immutable and handed out as `Arc`s.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::basics::{PointF, PointI, RectF};
use crate::bounding_rect::{bounding_rect_f, pivot_of};
use crate::color::Rgba8;
use crate::config::{validate_unit_size, LibraryConfig};
use crate::error::{Result, ShapeError};
use crate::shape_outline::ShapeParams;
use crate::trans_affine::TransAffine;

// ============================================================================
// Shape kinds
// ============================================================================

/// Shape kinds offered by the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ShapeKind {
    Square,
    Triangle,
    Trapezoid,
    Parallelogram,
    ParallelogramFlip,
    Rhombus,
    RhombusFlip,
    Hexagon,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 8] = [
        ShapeKind::Square,
        ShapeKind::Triangle,
        ShapeKind::Trapezoid,
        ShapeKind::Parallelogram,
        ShapeKind::ParallelogramFlip,
        ShapeKind::Rhombus,
        ShapeKind::RhombusFlip,
        ShapeKind::Hexagon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Trapezoid => "trapezoid",
            ShapeKind::Parallelogram => "parallelogram",
            ShapeKind::ParallelogramFlip => "parallelogram-flip",
            ShapeKind::Rhombus => "rhombus",
            ShapeKind::RhombusFlip => "rhombus-flip",
            ShapeKind::Hexagon => "hexagon",
        }
    }

    /// Geometry of this kind at `anchor` for edge length `unit`.
    pub fn params(self, unit: f32, anchor: PointF) -> ShapeParams {
        // Height of the trapezoid and parallelograms: a leg of length
        // `unit` over a horizontal run of `unit / 2`.
        let half = unit * 0.5;
        let slanted_height = (unit * unit - half * half).sqrt();
        match self {
            ShapeKind::Square => ShapeParams::Square { anchor, size: unit },
            ShapeKind::Triangle => ShapeParams::EquilateralTriangle { anchor, side: unit },
            ShapeKind::Trapezoid => ShapeParams::IsoscelesTrapezoid {
                anchor,
                top: unit,
                bottom: unit * 2.0,
                height: slanted_height,
            },
            ShapeKind::Parallelogram => ShapeParams::Parallelogram {
                anchor,
                base: unit,
                height: slanted_height,
                offset: -half,
            },
            ShapeKind::ParallelogramFlip => ShapeParams::Parallelogram {
                anchor,
                base: unit,
                height: slanted_height,
                offset: half,
            },
            ShapeKind::Rhombus => ShapeParams::Rhombus {
                anchor,
                side: unit,
                flip: false,
            },
            ShapeKind::RhombusFlip => ShapeParams::Rhombus {
                anchor,
                side: unit,
                flip: true,
            },
            ShapeKind::Hexagon => ShapeParams::Hexagon { anchor, side: unit },
        }
    }

    pub fn default_color(self) -> Rgba8 {
        match self {
            ShapeKind::Square => Rgba8::PURPLE,
            ShapeKind::Triangle => Rgba8::ORANGE,
            ShapeKind::Trapezoid => Rgba8::YELLOW,
            ShapeKind::Parallelogram | ShapeKind::ParallelogramFlip => Rgba8::GREEN,
            ShapeKind::Rhombus | ShapeKind::RhombusFlip => Rgba8::TEAL,
            ShapeKind::Hexagon => Rgba8::RED,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    /// Case-insensitive; `_` and spaces are accepted in place of `-`.
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '_' | ' ' => '-',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        ShapeKind::ALL
            .into_iter()
            .find(|k| k.name() == key)
            .ok_or_else(|| ShapeError::UnknownShapeKind(s.to_string()))
    }
}

// ============================================================================
// Shape template
// ============================================================================

/// Geometry and colour of one shape instance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShapeTemplate {
    /// Rasterized boundary, one Bresenham run per edge.
    pub outline: Vec<PointI>,
    /// Exact polygon vertices; empty when built unfilled.
    pub fill_vertices: Vec<PointF>,
    /// Bounding-box center of the fill vertices, or of the outline.
    pub pivot: PointF,
    pub color: Rgba8,
}

impl ShapeTemplate {
    pub fn is_filled(&self) -> bool {
        !self.fill_vertices.is_empty()
    }

    /// Bounding box of the fill vertices if present, else of the outline.
    pub fn bounds(&self) -> Option<RectF> {
        if self.is_filled() {
            bounding_rect_f(self.fill_vertices.iter().copied())
        } else {
            bounding_rect_f(self.outline.iter().copied())
        }
    }

    /// Outline scaled and rotated clockwise by `angle` radians about the
    /// pivot, with the pivot moved onto `world_pivot`. Results are floored.
    pub fn placed_outline(&self, world_pivot: PointF, angle: f32, scale: f32) -> Vec<PointI> {
        self.placement(world_pivot, angle, scale)
            .transform_grid(&self.outline)
    }

    /// Fill vertices placed the same way as [`placed_outline`](Self::placed_outline).
    pub fn placed_fill(&self, world_pivot: PointF, angle: f32, scale: f32) -> Vec<PointF> {
        self.placement(world_pivot, angle, scale)
            .transform_points(&self.fill_vertices)
    }

    /// Transform that maps this template's pivot onto `world_pivot`.
    pub fn placement(&self, world_pivot: PointF, angle: f32, scale: f32) -> TransAffine {
        TransAffine::new_placement(self.pivot, world_pivot, angle, scale)
    }
}

// ============================================================================
// Shape library
// ============================================================================

/// Builds shapes at a common unit size and caches origin templates.
#[derive(Debug, Clone)]
pub struct ShapeLibrary {
    unit_size: f32,
    cache: HashMap<ShapeKind, Arc<ShapeTemplate>>,
}

impl ShapeLibrary {
    pub fn new() -> Self {
        Self {
            unit_size: LibraryConfig::default().unit_size,
            cache: HashMap::new(),
        }
    }

    pub fn with_config(config: LibraryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            unit_size: config.unit_size,
            cache: HashMap::new(),
        })
    }

    pub fn unit_size(&self) -> f32 {
        self.unit_size
    }

    pub fn config(&self) -> LibraryConfig {
        LibraryConfig::new(self.unit_size)
    }

    /// Change the unit size. Cached templates are dropped when it changes.
    pub fn set_unit_size(&mut self, unit_size: f32) -> Result<()> {
        validate_unit_size(unit_size)?;
        if unit_size != self.unit_size {
            self.unit_size = unit_size;
            self.invalidate();
        }
        Ok(())
    }

    /// Drop every cached template.
    pub fn invalidate(&mut self) {
        if !self.cache.is_empty() {
            log::debug!(
                "shape cache invalidated: {} templates (unit size {})",
                self.cache.len(),
                self.unit_size
            );
        }
        self.cache.clear();
    }

    /// Number of cached templates.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    /// Build a shape at `anchor` without touching the cache.
    ///
    /// Fill vertices come from the analytic vertex derivation, never from
    /// the rasterized outline, so they keep sub-pixel precision.
    pub fn create_shape(&self, kind: ShapeKind, anchor: PointF, filled: bool) -> ShapeTemplate {
        let params = kind.params(self.unit_size, anchor);
        let outline = params.outline();
        let fill_vertices = if filled { params.vertices() } else { Vec::new() };
        let pivot = if fill_vertices.is_empty() {
            pivot_of(outline.iter().copied())
        } else {
            pivot_of(fill_vertices.iter().copied())
        };
        ShapeTemplate {
            outline,
            fill_vertices,
            pivot,
            color: kind.default_color(),
        }
    }

    /// Filled template of `kind` anchored at the origin, built on first use.
    pub fn template(&mut self, kind: ShapeKind) -> Arc<ShapeTemplate> {
        if let Some(t) = self.cache.get(&kind) {
            log::trace!("shape cache hit: {kind}");
            return Arc::clone(t);
        }
        let t = Arc::new(self.create_shape(kind, PointF::ORIGIN, true));
        log::debug!(
            "built {kind} template: {} outline points, {} fill vertices, unit size {}",
            t.outline.len(),
            t.fill_vertices.len(),
            self.unit_size
        );
        self.cache.insert(kind, Arc::clone(&t));
        t
    }

    /// Cached outline of `kind` placed with its pivot on `world_pivot`.
    pub fn placed_outline(
        &mut self,
        kind: ShapeKind,
        world_pivot: PointF,
        angle: f32,
        scale: f32,
    ) -> Vec<PointI> {
        self.template(kind).placed_outline(world_pivot, angle, scale)
    }

    /// Cached fill vertices of `kind` placed with its pivot on `world_pivot`.
    pub fn placed_fill(
        &mut self,
        kind: ShapeKind,
        world_pivot: PointF,
        angle: f32,
        scale: f32,
    ) -> Vec<PointF> {
        self.template(kind).placed_fill(world_pivot, angle, scale)
    }
}

impl Default for ShapeLibrary {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
