//! Midpoint circle and ellipse rasterization.
//!
//! The interpolators walk one octant (circle) or one quadrant (ellipse) of
//! the curve using integer decision parameters. [`circle_midpoint`] and
//! [`ellipse_midpoint`] mirror every step into the remaining octants or
//! quadrants. Points on the symmetry axes are emitted more than once; no
//! deduplication happens.

use crate::basics::PointI;

// ============================================================================
// Midpoint circle
// ============================================================================

/// Midpoint circle interpolator.
///
/// Yields `(x, y)` offsets starting at `(0, r)` and moving east or
/// south-east until `x` passes `y`. The step that crosses the diagonal is
/// still yielded. A negative radius yields nothing.
#[derive(Debug, Clone)]
pub struct CircleMidpointInterpolator {
    x: i32,
    y: i32,
    p: i64,
    started: bool,
    done: bool,
}

impl CircleMidpointInterpolator {
    pub fn new(radius: i32) -> Self {
        if radius < 0 {
            return Self {
                x: 0,
                y: 0,
                p: 0,
                started: true,
                done: true,
            };
        }
        Self {
            x: 0,
            y: radius,
            p: 1 - radius as i64,
            started: false,
            done: false,
        }
    }

    /// Current decision parameter.
    #[inline]
    pub fn decision(&self) -> i64 {
        self.p
    }
}

impl Iterator for CircleMidpointInterpolator {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some((self.x, self.y));
        }
        if self.x > self.y {
            self.done = true;
            return None;
        }
        self.x += 1;
        if self.p < 0 {
            // east
            self.p += 2 * self.x as i64 + 1;
        } else {
            // south-east
            self.y -= 1;
            self.p += 2 * (self.x as i64 - self.y as i64) + 1;
        }
        Some((self.x, self.y))
    }
}

/// Grid point `c + d`, clamped to the `i32` range.
#[inline]
fn offset(cx: i32, cy: i32, dx: i32, dy: i32) -> PointI {
    PointI::new(cx.saturating_add(dx), cy.saturating_add(dy))
}

/// Rasterize a circle with the midpoint algorithm.
///
/// Every interpolator step emits the eight symmetric points
/// `(±x, ±y)` and `(±y, ±x)` around the center. A negative radius produces
/// an empty list.
pub fn circle_midpoint(cx: i32, cy: i32, radius: i32) -> Vec<PointI> {
    let mut points = Vec::new();
    for (x, y) in CircleMidpointInterpolator::new(radius) {
        points.extend_from_slice(&[
            offset(cx, cy, x, y),
            offset(cx, cy, -x, y),
            offset(cx, cy, x, -y),
            offset(cx, cy, -x, -y),
            offset(cx, cy, y, x),
            offset(cx, cy, -y, x),
            offset(cx, cy, y, -x),
            offset(cx, cy, -y, -x),
        ]);
    }
    points
}

// ============================================================================
// Midpoint ellipse
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    Start,
    One,
    Two,
    Done,
}

/// Two-region midpoint ellipse interpolator.
///
/// Region 1 covers the arc where the slope magnitude is at most 1 and steps
/// in X; region 2 covers the remainder and steps in Y down to 0. The
/// `2·ry²·x` and `2·rx²·y` terms and both decision parameters are carried
/// in 128-bit accumulators, which hold `rx²·ry` for any `i32` radii.
#[derive(Debug, Clone)]
pub struct EllipseMidpointInterpolator {
    rx2: i128,
    ry2: i128,
    two_rx2: i128,
    two_ry2: i128,
    x: i32,
    y: i32,
    px: i128,
    py: i128,
    p1: i128,
    p2: i128,
    region: Region,
}

impl EllipseMidpointInterpolator {
    pub fn new(rx: i32, ry: i32) -> Self {
        let region = if rx < 0 || ry < 0 {
            Region::Done
        } else {
            Region::Start
        };
        // Negative radii never reach the arithmetic below.
        let (rx, ry) = if region == Region::Done {
            (0, 0)
        } else {
            (rx, ry)
        };
        let rx2 = rx as i128 * rx as i128;
        let ry2 = ry as i128 * ry as i128;
        let two_rx2 = 2 * rx2;
        Self {
            rx2,
            ry2,
            two_rx2,
            two_ry2: 2 * ry2,
            x: 0,
            y: ry,
            px: 0,
            py: two_rx2 * ry as i128,
            // ry² - rx²·ry + rx²/4, truncated
            p1: ry2 - rx2 * ry as i128 + rx2 / 4,
            p2: 0,
            region,
        }
    }

    /// Region-2 starting decision parameter:
    /// `ry²·(x + ½)² + rx²·(y − 1)² − rx²·ry²`, evaluated once in `f64`
    /// and rounded to nearest.
    fn region_two_start(&self) -> i128 {
        let rx2 = self.rx2 as f64;
        let ry2 = self.ry2 as f64;
        let xh = self.x as f64 + 0.5;
        let ym = self.y as f64 - 1.0;
        (ry2 * xh * xh + rx2 * ym * ym - rx2 * ry2).round_ties_even() as i128
    }
}

impl Iterator for EllipseMidpointInterpolator {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        loop {
            match self.region {
                Region::Done => return None,
                Region::Start => {
                    self.region = Region::One;
                    return Some((self.x, self.y));
                }
                Region::One => {
                    if self.px < self.py {
                        self.x += 1;
                        self.px += self.two_ry2;
                        if self.p1 < 0 {
                            self.p1 += self.ry2 + self.px;
                        } else {
                            self.y -= 1;
                            self.py -= self.two_rx2;
                            self.p1 += self.ry2 + self.px - self.py;
                        }
                        return Some((self.x, self.y));
                    }
                    self.p2 = self.region_two_start();
                    self.region = Region::Two;
                }
                Region::Two => {
                    if self.y <= 0 {
                        self.region = Region::Done;
                        return None;
                    }
                    self.y -= 1;
                    self.py -= self.two_rx2;
                    if self.p2 > 0 {
                        self.p2 += self.rx2 - self.py;
                    } else {
                        self.x += 1;
                        self.px += self.two_ry2;
                        self.p2 += self.rx2 - self.py + self.px;
                    }
                    return Some((self.x, self.y));
                }
            }
        }
    }
}

/// Rasterize an axis-aligned ellipse with the two-region midpoint algorithm.
///
/// Every interpolator step emits the four quadrant-symmetric points. A
/// negative radius on either axis produces an empty list.
pub fn ellipse_midpoint(cx: i32, cy: i32, rx: i32, ry: i32) -> Vec<PointI> {
    let mut points = Vec::new();
    for (x, y) in EllipseMidpointInterpolator::new(rx, ry) {
        points.extend_from_slice(&[
            offset(cx, cy, x, y),
            offset(cx, cy, -x, y),
            offset(cx, cy, x, -y),
            offset(cx, cy, -x, -y),
        ]);
    }
    points
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn mirrored_everywhere(points: &[PointI], cx: i32, cy: i32) -> bool {
        let set: HashSet<PointI> = points.iter().copied().collect();
        set.iter().all(|p| {
            set.contains(&PointI::new(2 * cx - p.x, p.y))
                && set.contains(&PointI::new(p.x, 2 * cy - p.y))
        })
    }

    #[test]
    fn test_circle_steps_first_octant() {
        let steps: Vec<_> = CircleMidpointInterpolator::new(5).collect();
        assert_eq!(steps, vec![(0, 5), (1, 5), (2, 5), (3, 4), (4, 3)]);
    }

    #[test]
    fn test_circle_emits_eight_points_per_step() {
        let pts = circle_midpoint(0, 0, 5);
        assert_eq!(pts.len(), 5 * 8);
        assert_eq!(&pts[..4], &[
            PointI::new(0, 5),
            PointI::new(0, 5),
            PointI::new(0, -5),
            PointI::new(0, -5),
        ]);
    }

    #[test]
    fn test_circle_points_near_radius() {
        let r = 20;
        for p in circle_midpoint(0, 0, r) {
            let d = ((p.x * p.x + p.y * p.y) as f32).sqrt();
            assert!((d - r as f32).abs() <= 1.0, "{p:?} is {d} from center");
        }
    }

    #[test]
    fn test_circle_symmetry_off_center() {
        let pts = circle_midpoint(13, -7, 11);
        assert!(mirrored_everywhere(&pts, 13, -7));
    }

    #[test]
    fn test_circle_negative_radius() {
        assert!(circle_midpoint(4, 4, -1).is_empty());
        assert_eq!(CircleMidpointInterpolator::new(-3).count(), 0);
    }

    #[test]
    fn test_circle_decision_starts_at_one_minus_r() {
        assert_eq!(CircleMidpointInterpolator::new(10).decision(), -9);
    }

    #[test]
    fn test_ellipse_steps_wide() {
        let steps: Vec<_> = EllipseMidpointInterpolator::new(8, 6).collect();
        assert_eq!(steps.first(), Some(&(0, 6)));
        assert_eq!(steps.last(), Some(&(8, 0)));
        assert!(steps.windows(2).all(|w| {
            let (x0, y0) = w[0];
            let (x1, y1) = w[1];
            x1 >= x0 && y1 <= y0 && (x1 - x0) <= 1 && (y0 - y1) <= 1
        }));
    }

    #[test]
    fn test_ellipse_points_near_curve() {
        let (rx, ry) = (30, 12);
        for p in ellipse_midpoint(0, 0, rx, ry) {
            let v = (p.x as f32 / rx as f32).powi(2) + (p.y as f32 / ry as f32).powi(2);
            assert!((v - 1.0).abs() < 0.2, "{p:?} off the ellipse ({v})");
        }
    }

    #[test]
    fn test_ellipse_symmetry() {
        let pts = ellipse_midpoint(50, 40, 17, 9);
        assert_eq!(pts.len() % 4, 0);
        assert!(mirrored_everywhere(&pts, 50, 40));
    }

    #[test]
    fn test_ellipse_equal_radii_reaches_axes() {
        let pts = ellipse_midpoint(0, 0, 10, 10);
        assert!(pts.contains(&PointI::new(0, 10)));
        assert!(pts.contains(&PointI::new(10, 0)));
        assert!(pts.contains(&PointI::new(-10, 0)));
        assert!(pts.contains(&PointI::new(0, -10)));
    }

    #[test]
    fn test_ellipse_negative_radius() {
        assert!(ellipse_midpoint(0, 0, -1, 5).is_empty());
        assert!(ellipse_midpoint(0, 0, 5, -1).is_empty());
    }

    #[test]
    fn test_ellipse_zero_radius_is_degenerate_not_empty() {
        let flat = ellipse_midpoint(3, 3, 0, 0);
        assert_eq!(flat, vec![PointI::new(3, 3); 4]);

        let vertical: Vec<_> = EllipseMidpointInterpolator::new(0, 4).collect();
        assert_eq!(vertical.first(), Some(&(0, 4)));
        assert_eq!(vertical.last(), Some(&(0, 0)));
        assert!(vertical.iter().all(|&(x, _)| x == 0));
    }

    #[test]
    fn test_ellipse_large_radii_do_not_overflow() {
        let steps = EllipseMidpointInterpolator::new(40_000, 30_000).count();
        assert!(steps > 40_000);
    }

    #[test]
    fn test_ellipse_steps_exact() {
        let wide: Vec<_> = EllipseMidpointInterpolator::new(8, 6).collect();
        assert_eq!(
            wide,
            vec![
                (0, 6),
                (1, 6),
                (2, 6),
                (3, 6),
                (4, 5),
                (5, 5),
                (6, 4),
                (7, 3),
                (8, 2),
                (8, 1),
                (8, 0),
            ]
        );
        let tall: Vec<_> = EllipseMidpointInterpolator::new(6, 8).collect();
        assert_eq!(
            tall,
            vec![
                (0, 8),
                (1, 8),
                (2, 8),
                (3, 7),
                (4, 6),
                (5, 5),
                (5, 4),
                (6, 3),
                (6, 2),
                (6, 1),
                (6, 0),
            ]
        );
        let flat: Vec<_> = EllipseMidpointInterpolator::new(10, 3).collect();
        assert_eq!(
            flat,
            vec![
                (0, 3),
                (1, 3),
                (2, 3),
                (3, 3),
                (4, 3),
                (5, 3),
                (6, 2),
                (7, 2),
                (8, 2),
                (9, 1),
                (10, 0),
            ]
        );
    }

    #[test]
    fn test_extreme_negative_radius() {
        assert!(circle_midpoint(0, 0, i32::MIN).is_empty());
        assert!(ellipse_midpoint(0, 0, i32::MIN, 5).is_empty());
        assert!(ellipse_midpoint(0, 0, 5, i32::MIN).is_empty());
        assert!(ellipse_midpoint(0, 0, -2_000_000_000, 5).is_empty());
        assert!(ellipse_midpoint(0, 0, i32::MAX, -1).is_empty());
    }

    #[test]
    fn test_ellipse_huge_radii() {
        let steps: Vec<_> = EllipseMidpointInterpolator::new(3_000_000, 3_000_000).collect();
        assert_eq!(steps.first(), Some(&(0, 3_000_000)));
        assert_eq!(steps.last(), Some(&(3_000_000, 0)));

        let head: Vec<_> = EllipseMidpointInterpolator::new(i32::MAX, i32::MAX)
            .take(2)
            .collect();
        assert_eq!(head, vec![(0, i32::MAX), (1, i32::MAX)]);
    }

    #[test]
    fn test_circle_huge_radius_and_edge_center() {
        let head: Vec<_> = CircleMidpointInterpolator::new(i32::MAX).take(3).collect();
        assert_eq!(head, vec![(0, i32::MAX), (1, i32::MAX), (2, i32::MAX)]);

        let pts = circle_midpoint(i32::MAX, i32::MIN, 3);
        assert!(pts
            .iter()
            .all(|p| p.x >= i32::MAX - 3 && p.y <= i32::MIN + 3));
        assert!(pts.contains(&PointI::new(i32::MAX, i32::MIN)));
    }
}
