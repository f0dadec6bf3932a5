mod support;

use nalgebra::{Point2, Rotation2};
use sprocketrs::{
    ErrorKind,
    float_types::PI,
    geometry::{Arc, Curve, Segment},
};

#[test]
fn center_start_sweep_arc() {
    let arc = Arc::from_center_start_sweep(Point2::new(1.0, 0.0), Point2::new(2.0, 0.0), PI / 2.0)
        .unwrap();
    assert!(support::approx_eq(arc.radius, 1.0, 1e-12));
    assert!(support::approx_eq(arc.end.x, 1.0, 1e-12));
    assert!(support::approx_eq(arc.end.y, 1.0, 1e-12));

    let mid = arc.point_at(0.5);
    let spoke = (PI / 4.0).cos(); // cos 45° = sin 45°
    assert!(support::approx_eq(mid.x, 1.0 + spoke, 1e-12));
    assert!(support::approx_eq(mid.y, spoke, 1e-12));
    assert!(support::approx_eq((mid - arc.center).norm(), 1.0, 1e-12));
}

#[test]
fn zero_radius_arc_is_degenerate() {
    let center = Point2::new(1.0, 1.0);
    let err = Arc::from_center_start_sweep(center, center, PI).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::GeometryConsistency);
}

#[test]
fn three_point_arc_sweeps_through_its_shaping_point() {
    let a = Point2::new(1.0, 0.0);
    let b = Point2::new(0.0, 1.0);
    let c = Point2::new(-1.0, 0.0);

    let ccw = Arc::from_three_points(a, b, c).unwrap();
    assert!(support::approx_eq(ccw.center.x, 0.0, 1e-12));
    assert!(support::approx_eq(ccw.center.y, 0.0, 1e-12));
    assert!(support::approx_eq(ccw.radius, 1.0, 1e-12));
    assert!(support::approx_eq(ccw.sweep, PI, 1e-12));

    // Reversed traversal through the same shaping point goes clockwise.
    let cw = Arc::from_three_points(c, b, a).unwrap();
    assert!(support::approx_eq(cw.sweep, -PI, 1e-12));
}

#[test]
fn minor_arc_classification_splits_at_the_half_turn() {
    let center = Point2::new(0.0, 0.0);
    let start = Point2::new(1.0, 0.0);
    let quarter = Arc::from_center_start_sweep(center, start, PI / 2.0).unwrap();
    assert!(quarter.is_minor());
    let quarter_cw = Arc::from_center_start_sweep(center, start, -PI / 2.0).unwrap();
    assert!(quarter_cw.is_minor());

    let half = Arc::from_center_start_sweep(center, start, PI).unwrap();
    assert!(!half.is_minor());
    let near_full = Arc::from_center_start_sweep(center, start, -5.8697).unwrap();
    assert!(!near_full.is_minor());
}

#[test]
fn arc_endpoints_are_returned_exactly() {
    let arc = Arc::from_three_points(
        Point2::new(7.9226, 0.2626),
        Point2::new(8.1766, 0.1622),
        Point2::new(8.4306, 0.0635),
    )
    .unwrap();
    assert_eq!(arc.point_at(0.0), arc.start);
    assert_eq!(arc.point_at(1.0), arc.end);
}

#[test]
fn rotation_about_the_origin_preserves_shape() {
    let rotation = Rotation2::new(PI / 2.0);
    let arc = Arc::from_center_start_sweep(Point2::new(2.0, 0.0), Point2::new(3.0, 0.0), 1.0)
        .unwrap()
        .rotated(&rotation);
    assert!(support::approx_eq(arc.center.x, 0.0, 1e-12));
    assert!(support::approx_eq(arc.center.y, 2.0, 1e-12));
    assert!(support::approx_eq(arc.radius, 1.0, 1e-12));
    assert!(support::approx_eq(arc.sweep, 1.0, 1e-12));

    let segment = Curve::Segment(Segment::new(Point2::new(1.0, 0.0), Point2::new(1.0, 1.0)))
        .rotated(&rotation);
    assert!(support::approx_eq(segment.start().y, 1.0, 1e-12));
    assert!(support::approx_eq(segment.end().x, -1.0, 1e-12));
}
