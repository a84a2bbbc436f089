use super::detect::{axis_angle_degrees, is_degenerate, is_mirrored, signed_area, wrap_index};
use super::*;
use crate::point::Point;
use crate::shapes::rand::{
    draw_mirrored_polygon, draw_polygon_radial, RadialCfg, ReplayToken, VertexCount,
};
use crate::shapes::{regular_polygon, Preset};
use crate::transform::RigidMotion;
use proptest::prelude::*;

fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().copied().map(Point::from).collect()
}

fn count(points: &[Point]) -> usize {
    Symmetry::new(points).unwrap().detect().len()
}

#[test]
fn doubling_interleaves_midpoints_with_wraparound() {
    let square = Preset::Square.points();
    let d = double_points(&square);
    assert_eq!(d.len(), 8);
    for (i, p) in square.iter().enumerate() {
        assert_eq!(d[2 * i], *p);
    }
    assert_eq!(d[1], Point::new(0.0, 50.0));
    assert_eq!(d[7], Point::new(50.0, 0.0));
    assert!(double_points(&[]).is_empty());
}

#[test]
fn equilateral_triangle_has_three_axes() {
    let tri = pts(&[(0.0, 0.0), (100.0, 173.2), (200.0, 0.0)]);
    let axes = Symmetry::new(tri.clone()).unwrap().detect();
    assert_eq!(axes.len(), 3);
    // vertex 1 pairs with the midpoint of the opposite edge
    let through_apex = axes.iter().find(|a| a.from == tri[1]).unwrap();
    assert_eq!(through_apex.to, Point::new(100.0, 0.0));
    assert_eq!(count(&Preset::Triangle.points()), 3);
}

#[test]
fn square_has_four_axes_in_candidate_order() {
    let axes = Symmetry::new(Preset::Square.points()).unwrap().detect();
    let got: Vec<(usize, Point, Point)> = axes.iter().map(|a| (a.index, a.from, a.to)).collect();
    assert_eq!(
        got,
        vec![
            (0, Point::new(0.0, 0.0), Point::new(100.0, 100.0)),
            (1, Point::new(0.0, 50.0), Point::new(100.0, 50.0)),
            (2, Point::new(0.0, 100.0), Point::new(100.0, 0.0)),
            (3, Point::new(50.0, 100.0), Point::new(50.0, 0.0)),
        ]
    );
}

#[test]
fn preset_axis_counts() {
    let expected = [
        (Preset::Square, 4),
        (Preset::Rectangle, 2),
        (Preset::Triangle, 3),
        (Preset::Pentagon, 5),
        (Preset::Hexagon, 6),
    ];
    for (preset, n) in expected {
        assert_eq!(count(&preset.points()), n, "{preset}");
    }
}

#[test]
fn scalene_triangle_has_no_axes() {
    assert_eq!(count(&pts(&[(0.0, 0.0), (10.0, 50.0), (80.0, 30.0)])), 0);
}

#[test]
fn kite_and_isosceles_have_one_axis() {
    let kite = pts(&[(0.0, 0.0), (50.0, 40.0), (0.0, 120.0), (-50.0, 40.0)]);
    let axes = Symmetry::new(kite).unwrap().detect();
    assert_eq!(axes.len(), 1);
    assert_eq!((axes[0].from, axes[0].to), (Point::new(0.0, 0.0), Point::new(0.0, 120.0)));

    let isosceles = pts(&[(0.0, 0.0), (100.0, 0.0), (50.0, 200.0)]);
    assert_eq!(count(&isosceles), 1);
}

#[test]
fn empty_polygon_is_invalid_input() {
    let err = Symmetry::new(Vec::<Point>::new()).unwrap_err();
    assert!(matches!(err, SymmetryError::InvalidInput { .. }));
    assert!(lines_of_symmetry(&[]).is_err());
}

#[test]
fn non_finite_coordinates_are_rejected_by_default() {
    let bad = pts(&[(0.0, 0.0), (f64::NAN, 1.0), (1.0, 0.0)]);
    assert!(Symmetry::new(bad.clone()).is_err());
    let cfg = SymmetryCfg {
        reject_non_finite: false,
        ..SymmetryCfg::default()
    };
    // accepted, and must not panic
    let _ = Symmetry::with_cfg(bad, cfg).unwrap().detect();
}

#[test]
fn invalid_tolerance_is_rejected() {
    for tolerance in [0.0, -1.0, f64::INFINITY, f64::NAN] {
        let cfg = SymmetryCfg {
            tolerance,
            ..SymmetryCfg::default()
        };
        assert!(Symmetry::with_cfg(Preset::Square.points(), cfg).is_err());
    }
}

#[test]
fn degenerate_polygons_report_nothing_and_stay_silent() {
    let cases = vec![
        pts(&[(5.0, 5.0)]),
        pts(&[(0.0, 0.0), (10.0, 0.0)]),
        pts(&[(0.0, 0.0), (10.0, 0.0), (0.0, 0.0)]),
        pts(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)]),
        pts(&[(0.0, 0.0), (10.0, 10.0), (20.0, 20.0), (30.0, 30.0)]),
    ];
    for poly in cases {
        let det = Symmetry::new(poly.clone()).unwrap();
        let (axes, events) = det.trace();
        assert!(axes.is_empty(), "{poly:?}");
        assert!(events.is_empty(), "{poly:?}");
    }
}

#[test]
fn degenerate_check_is_scale_relative() {
    let tiny = regular_polygon(4, 1e-3, Point::new(0.0, 0.0), 0.0);
    assert!(!is_degenerate(&tiny, 1e-9));
    assert!((signed_area(&Preset::Square.points()).abs() - 10_000.0).abs() < 1e-9);
}

#[test]
fn detect_is_repeatable_and_leaves_input_untouched() {
    let hex = Preset::Hexagon.points();
    let det = Symmetry::new(hex.clone()).unwrap();
    let first = det.detect();
    let second = det.detect();
    assert_eq!(first, second);
    assert_eq!(det.points(), hex.as_slice());
}

#[test]
fn trace_emits_stages_in_order() {
    let det = Symmetry::new(Preset::Rectangle.points()).unwrap();
    let (axes, events) = det.trace();
    let half = 4;
    let found: Vec<&Event> = events
        .iter()
        .filter(|e| e.kind == EventKind::SymmetryFound)
        .collect();
    assert_eq!(found.len(), axes.len());
    assert_eq!(events.len(), 3 * half + axes.len());

    let mut stage = events.iter().filter(|e| e.kind != EventKind::SymmetryFound);
    for index in 0..half {
        for kind in [EventKind::Original, EventKind::Translated, EventKind::Rotated] {
            let e = stage.next().unwrap();
            assert_eq!((e.kind, e.index), (kind, index));
            assert_eq!(e.points.len(), 2 * half);
        }
    }
    for (e, a) in found.iter().zip(&axes) {
        assert_eq!(e.index, a.index);
        assert_eq!(e.points, vec![a.from, a.to]);
    }
}

#[test]
fn translated_and_rotated_stages_place_the_axis_on_x() {
    let det = Symmetry::new(Preset::Pentagon.points()).unwrap();
    let (_, events) = det.trace();
    let half = 5;
    for e in &events {
        match e.kind {
            EventKind::Translated => {
                assert_eq!(e.points[e.index], Point::new(0.0, 0.0));
            }
            EventKind::Rotated => {
                let pivot = e.points[e.index];
                let opposite = e.points[e.index + half];
                assert!(pivot.x.abs() < 1e-9 && pivot.y.abs() < 1e-9);
                assert!(opposite.y.abs() < 1e-9);
                assert!(opposite.x > 0.0);
            }
            _ => {}
        }
    }
}

#[test]
fn callbacks_receive_every_stage() {
    let mut originals = Vec::new();
    let mut rotated = 0usize;
    let mut confirmed = Vec::new();
    {
        let mut cb = Callbacks::new()
            .on_original(|i, p: &[Point]| originals.push((i, p.len())))
            .on_rotate(|_, _| rotated += 1)
            .on_symmetry(|i, from, to| confirmed.push((i, from, to)));
        let axes = Symmetry::new(Preset::Square.points())
            .unwrap()
            .detect_with(&mut cb);
        assert_eq!(axes.len(), 4);
    }
    assert_eq!(originals, vec![(0, 8), (1, 8), (2, 8), (3, 8)]);
    assert_eq!(rotated, 4);
    assert_eq!(confirmed.len(), 4);
    assert_eq!(confirmed[3], (3, Point::new(50.0, 100.0), Point::new(50.0, 0.0)));
}

#[test]
fn callbacks_attached_at_construction_fire_on_every_detect() {
    let mut translated = Vec::new();
    let mut confirmed = Vec::new();
    let mut observed = Symmetry::with_callbacks(
        Preset::Rectangle.points(),
        Callbacks::new()
            .on_translate(|i, p: &[Point]| translated.push((i, p[i])))
            .on_symmetry(|i, _, _| confirmed.push(i)),
    )
    .unwrap();
    let first = observed.detect();
    let second = observed.detect();
    assert_eq!(first, second);
    assert_eq!(first, observed.symmetry().detect());
    let (det, callbacks) = observed.into_parts();
    drop(callbacks);
    assert_eq!(det.points(), Preset::Rectangle.points().as_slice());

    assert_eq!(translated.len(), 2 * 4);
    assert!(translated.iter().all(|&(_, p)| p == Point::new(0.0, 0.0)));
    assert_eq!(confirmed, vec![1, 3, 1, 3]);
}

#[test]
fn construction_with_callbacks_rejects_empty_polygon() {
    let mut fired = false;
    let res = Symmetry::with_callbacks(
        Vec::<Point>::new(),
        Callbacks::new().on_original(|_, _| fired = true),
    );
    assert!(matches!(res, Err(SymmetryError::InvalidInput { .. })));
    drop(res);
    assert!(!fired);
}

#[test]
fn original_stage_sees_untransformed_doubled_points() {
    let det = Symmetry::new(Preset::Triangle.points()).unwrap();
    let expected = det.doubled();
    let mut seen = Vec::new();
    let mut cb = Callbacks::new().on_original(|_, p: &[Point]| seen.push(p.to_vec()));
    det.detect_with(&mut cb);
    drop(cb);
    assert_eq!(seen.len(), 3);
    assert!(seen.iter().all(|s| *s == expected));
}

#[test]
fn wrap_index_is_true_modulo() {
    assert_eq!(wrap_index(-1, 8), 7);
    assert_eq!(wrap_index(-8, 8), 0);
    assert_eq!(wrap_index(3, 8), 3);
}

#[test]
fn axis_angle_uses_flipped_sign() {
    let o = Point::new(0.0, 0.0);
    assert!((axis_angle_degrees(o, Point::new(0.0, 10.0)) + 90.0).abs() < 1e-12);
    assert!((axis_angle_degrees(o, Point::new(-10.0, 0.0)).abs() - 180.0).abs() < 1e-12);
    assert!(axis_angle_degrees(o, Point::new(10.0, 0.0)).abs() < 1e-12);
}

#[test]
fn mirror_check_wraps_below_pivot() {
    // symmetric about the x-axis through index 0 only if index -1 is used
    let work = pts(&[(0.0, 0.0), (1.0, 3.0), (2.0, 0.0), (1.0, -3.0)]);
    assert!(is_mirrored(&work, 0, 2, 0.5));
    let skewed = pts(&[(0.0, 0.0), (1.0, 3.0), (2.0, 0.0), (1.5, -3.0)]);
    assert!(!is_mirrored(&skewed, 0, 2, 0.1));
}

#[test]
fn tolerance_widens_matches() {
    // irregular kite: tip offset by 10 units
    let kite = pts(&[(0.0, 0.0), (50.0, 40.0), (10.0, 120.0), (-50.0, 40.0)]);
    assert_eq!(count(&kite), 0);
    let loose = SymmetryCfg {
        tolerance: 20.0,
        ..SymmetryCfg::default()
    };
    assert_eq!(Symmetry::with_cfg(kite, loose).unwrap().detect().len(), 1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn regular_polygons_keep_axis_count_under_rigid_motion(
        n in 3usize..=10,
        radius in 40.0f64..400.0,
        phase in -180.0f64..180.0,
        dx in -800.0f64..800.0,
        dy in -800.0f64..800.0,
        degrees in -360.0f64..360.0,
    ) {
        let base = regular_polygon(n, radius, Point::new(0.0, 0.0), phase);
        prop_assert_eq!(count(&base), n);
        let moved = RigidMotion::new(dx, dy, degrees).apply(&base);
        prop_assert_eq!(count(&moved), n);
    }

    #[test]
    fn axis_count_never_exceeds_vertex_count(seed in any::<u64>(), n in 3usize..=16) {
        let cfg = RadialCfg { vertex_count: VertexCount::Fixed(n), ..RadialCfg::default() };
        let poly = draw_polygon_radial(cfg, ReplayToken::new(seed, 0));
        let det = Symmetry::new(poly.clone()).unwrap();
        let axes = det.detect();
        prop_assert!(axes.len() <= poly.len());
        prop_assert_eq!(det.detect(), axes);
    }

    #[test]
    fn mirrored_polygons_have_an_axis_through_vertex_zero(
        seed in any::<u64>(),
        n in 4usize..=14,
        degrees in -180.0f64..180.0,
        dx in -300.0f64..300.0,
    ) {
        let cfg = RadialCfg { vertex_count: VertexCount::Fixed(n), ..RadialCfg::default() };
        let mirrored = draw_mirrored_polygon(cfg, ReplayToken::new(seed, 1));
        let poly = RigidMotion::new(dx, 0.0, degrees).apply(&mirrored);
        let axes = Symmetry::new(poly.clone()).unwrap().detect();
        prop_assert!(axes.iter().any(|a| a.index == 0));
        prop_assert_eq!(axes[0].from, poly[0]);
        prop_assert_eq!(axes[0].to, poly[poly.len() / 2]);
    }
}
