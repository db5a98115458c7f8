//! Bounding rectangle and pivot calculation.
//!
//! Computes the axis-aligned bounding box of a point sequence. The pivot of
//! a shape is the midpoint of that box.

use crate::basics::{Point, PointF, Rect, RectF};

/// Compute the bounding rectangle of a point sequence.
///
/// Returns `None` if the sequence is empty.
pub fn bounding_rect<T, I>(points: I) -> Option<Rect<T>>
where
    T: Copy + PartialOrd,
    I: IntoIterator<Item = Point<T>>,
{
    let mut iter = points.into_iter();
    let first = iter.next()?;
    let mut r = Rect::new(first.x, first.y, first.x, first.y);
    for p in iter {
        r.expand_to(p.x, p.y);
    }
    Some(r)
}

/// Bounding rectangle of a point sequence in `f32` space.
///
/// Integer outline points convert losslessly for any realistic canvas
/// size, so outlines and fill vertices share this entry point.
pub fn bounding_rect_f<P, I>(points: I) -> Option<RectF>
where
    P: Into<PointF>,
    I: IntoIterator<Item = P>,
{
    bounding_rect(points.into_iter().map(Into::into))
}

/// Midpoint of the bounding box of `points`, or the origin when empty.
pub fn pivot_of<P, I>(points: I) -> PointF
where
    P: Into<PointF>,
    I: IntoIterator<Item = P>,
{
    bounding_rect_f(points).map_or(PointF::ORIGIN, |r| r.center())
}
