use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::thread;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use shape_raster::basics::{iround, is_equal_eps, PointF, PointI, RectI, PI};
use shape_raster::bounding_rect::{bounding_rect, bounding_rect_f};
use shape_raster::dda_line::{line_bresenham, line_dda};
use shape_raster::ellipse_midpoint::{circle_midpoint, ellipse_midpoint};
use shape_raster::shape_library::{ShapeKind, ShapeLibrary};
use shape_raster::shape_outline::ShapeParams;
use shape_raster::trans_affine::TransAffine;

const SAMPLES: usize = 300;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed_0f_5a9e)
}

fn mirrored_set(points: &[PointI], cx: i32, cy: i32) -> bool {
    let set: HashSet<PointI> = points.iter().copied().collect();
    set.iter().all(|p| {
        set.contains(&PointI::new(2 * cx - p.x, p.y)) && set.contains(&PointI::new(p.x, 2 * cy - p.y))
    })
}

// ============================================================================
// Lines
// ============================================================================

#[test]
fn lines_start_and_end_on_rounded_end_points() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let (xa, ya, xb, yb) = (
            rng.gen_range(-500.0f32..500.0),
            rng.gen_range(-500.0f32..500.0),
            rng.gen_range(-500.0f32..500.0),
            rng.gen_range(-500.0f32..500.0),
        );
        let start = PointI::new(iround(xa), iround(ya));
        let end = PointI::new(iround(xb), iround(yb));

        let bres = line_bresenham(xa, ya, xb, yb);
        assert_eq!(bres.first(), Some(&start));
        assert_eq!(bres.last(), Some(&end));

        let dda = line_dda(xa, ya, xb, yb);
        assert_eq!(dda.first(), Some(&start));
        assert_eq!(dda.last(), Some(&end));
    }
}

#[test]
fn bresenham_is_8_connected() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let pts = line_bresenham(
            rng.gen_range(-300.0f32..300.0),
            rng.gen_range(-300.0f32..300.0),
            rng.gen_range(-300.0f32..300.0),
            rng.gen_range(-300.0f32..300.0),
        );
        for w in pts.windows(2) {
            let dx = (w[1].x - w[0].x).abs();
            let dy = (w[1].y - w[0].y).abs();
            assert!(dx <= 1 && dy <= 1 && dx + dy > 0, "{:?} -> {:?}", w[0], w[1]);
        }
    }
}

// ============================================================================
// Circle and ellipse
// ============================================================================

#[test]
fn circle_is_mirror_symmetric() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let (cx, cy, r) = (
            rng.gen_range(-200..200),
            rng.gen_range(-200..200),
            rng.gen_range(0..80),
        );
        let pts = circle_midpoint(cx, cy, r);
        assert!(!pts.is_empty());
        assert!(mirrored_set(&pts, cx, cy), "circle ({cx}, {cy}) r={r}");
    }
}

#[test]
fn ellipse_is_mirror_symmetric() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let (cx, cy, rx, ry) = (
            rng.gen_range(-200..200),
            rng.gen_range(-200..200),
            rng.gen_range(0..80),
            rng.gen_range(0..80),
        );
        let pts = ellipse_midpoint(cx, cy, rx, ry);
        assert_eq!(pts.len() % 4, 0);
        assert!(mirrored_set(&pts, cx, cy), "ellipse ({cx}, {cy}) {rx}x{ry}");
    }
}

#[test]
fn negative_radius_is_empty() {
    assert!(circle_midpoint(0, 0, -1).is_empty());
    assert!(ellipse_midpoint(0, 0, -1, 5).is_empty());
    assert!(ellipse_midpoint(10, 10, 5, -1).is_empty());
}

// ============================================================================
// Transforms
// ============================================================================

#[test]
fn rotate_cw_then_ccw_restores_matrix() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let mut start = TransAffine::new();
        start
            .scale(
                rng.gen_range(0.5f32..2.0),
                rng.gen_range(0.5f32..2.0),
                PointF::ORIGIN,
            )
            .translate(rng.gen_range(-100.0f32..100.0), rng.gen_range(-100.0f32..100.0));

        let pivot = PointF::new(rng.gen_range(-100.0f32..100.0), rng.gen_range(-100.0f32..100.0));
        let angle = rng.gen_range(-2.0 * PI..2.0 * PI);

        let mut m = start;
        m.rotate_cw(angle, pivot).rotate_ccw(angle, pivot);
        assert!(m.is_equal(&start, 1e-3), "{m:?} != {start:?}");
    }
}

#[test]
fn transform_preserves_length_order_and_duplicates() {
    let pts = vec![
        PointF::new(1.0, 1.0),
        PointF::new(1.0, 1.0),
        PointF::new(-3.0, 2.0),
        PointF::new(1.0, 1.0),
    ];
    let mut m = TransAffine::new();
    m.scale(0.0, 0.0, PointF::new(4.0, 4.0));
    let out = m.transform_points(&pts);
    assert_eq!(out.len(), pts.len());
    assert!(out.iter().all(|p| *p == PointF::new(4.0, 4.0)));
}

#[test]
fn placement_maps_pivot_onto_world_position() {
    let mut rng = rng();
    let mut library = ShapeLibrary::new();
    for _ in 0..SAMPLES {
        let kind = ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())];
        let world = PointF::new(rng.gen_range(0.0f32..1000.0), rng.gen_range(0.0f32..1000.0));
        let angle = rng.gen_range(0.0f32..2.0 * PI);
        let scale = rng.gen_range(0.25f32..3.0);

        let template = library.template(kind);
        let p = template.placement(world, angle, scale).transform(template.pivot);
        assert!(p.distance(world) < 1e-2, "{kind}: {p:?} vs {world:?}");
    }

    let square = library.template(ShapeKind::Square);
    let p = square
        .placement(PointF::new(100.0, 100.0), 0.0, 1.0)
        .transform(square.pivot);
    assert_eq!(p, PointF::new(100.0, 100.0));
}

// ============================================================================
// Shapes
// ============================================================================

#[test]
fn flipped_rhombus_keeps_anchor_column() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let anchor = PointF::new(rng.gen_range(-500.0f32..500.0), rng.gen_range(-500.0f32..500.0));
        let side = rng.gen_range(1.0f32..200.0);
        for flip in [false, true] {
            let v = ShapeParams::Rhombus { anchor, side, flip }.vertices();
            let min_x = v.iter().map(|p| p.x).fold(f32::INFINITY, f32::min);
            assert!(is_equal_eps(min_x, anchor.x, 1e-3), "flip={flip}: {min_x} vs {}", anchor.x);
        }
    }
}

#[test]
fn square_outline_scenario() {
    let outline = ShapeParams::Square {
        anchor: PointF::new(0.0, 0.0),
        size: 10.0,
    }
    .outline();
    assert_eq!(bounding_rect(outline.iter().copied()), Some(RectI::new(0, 0, 10, 10)));
    // Four closed edges, each starting where the previous one ended.
    let edges: Vec<&[PointI]> = outline.chunks(11).collect();
    assert_eq!(edges.len(), 4);
    for i in 0..4 {
        assert_eq!(edges[i].last(), edges[(i + 1) % 4].first());
    }
}

#[test]
fn hexagon_fill_scenario() {
    let mut library = ShapeLibrary::new();
    library.set_unit_size(10.0).unwrap();
    let hex = library.create_shape(ShapeKind::Hexagon, PointF::new(0.0, 0.0), true);
    assert_eq!(hex.fill_vertices.len(), 6);
    let r = bounding_rect_f(hex.fill_vertices.iter().copied()).unwrap();
    assert_eq!(hex.pivot, r.center());
}

#[test]
fn library_shared_behind_mutex() {
    let library = Arc::new(Mutex::new(ShapeLibrary::new()));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let library = Arc::clone(&library);
            thread::spawn(move || {
                ShapeKind::ALL
                    .iter()
                    .map(|&kind| library.lock().unwrap().template(kind))
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for templates in &results[1..] {
        for (a, b) in templates.iter().zip(&results[0]) {
            assert!(Arc::ptr_eq(a, b));
        }
    }
    assert_eq!(library.lock().unwrap().cached(), ShapeKind::ALL.len());
}
