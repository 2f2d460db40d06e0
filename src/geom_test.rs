#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Point
// =============================================================

#[test]
fn point_offset_adds_components() {
    let p = Point::new(50.0, 50.0).offset(20.0, 20.0);
    assert_eq!(p, Point::new(70.0, 70.0));
}

#[test]
fn point_offset_negative() {
    let p = Point::new(5.0, 10.0).offset(-5.0, -20.0);
    assert_eq!(p.x, 0.0);
    assert_eq!(p.y, -10.0);
}

// =============================================================
// Bounds
// =============================================================

#[test]
fn bounds_from_rect_corners() {
    let b = Bounds::from_rect(10.0, 20.0, 100.0, 50.0);
    assert_eq!(b.min, Point::new(10.0, 20.0));
    assert_eq!(b.max, Point::new(110.0, 70.0));
    assert_eq!(b.width(), 100.0);
    assert_eq!(b.height(), 50.0);
}

#[test]
fn bounds_center_is_midpoint() {
    let b = Bounds::from_rect(0.0, 0.0, 100.0, 40.0);
    assert_eq!(b.center(), Point::new(50.0, 20.0));
}

#[test]
fn bounds_union_all_empty_is_none() {
    assert!(Bounds::union_all(Vec::new()).is_none());
}

#[test]
fn bounds_union_all_single_is_identity() {
    let b = Bounds::from_rect(1.0, 2.0, 3.0, 4.0);
    assert_eq!(Bounds::union_all([b]), Some(b));
}

#[test]
fn bounds_union_all_spans_every_box() {
    let a = Bounds::from_rect(0.0, 0.0, 10.0, 10.0);
    let b = Bounds::from_rect(50.0, -5.0, 10.0, 10.0);
    let c = Bounds::from_rect(20.0, 30.0, 5.0, 5.0);
    let u = Bounds::union_all([a, b, c]).unwrap_or(a);
    assert_eq!(u.min, Point::new(0.0, -5.0));
    assert_eq!(u.max, Point::new(60.0, 35.0));
}

#[test]
fn bounds_contains_edges_inclusive() {
    let b = Bounds::from_rect(0.0, 0.0, 10.0, 10.0);
    assert!(b.contains(Point::new(0.0, 0.0)));
    assert!(b.contains(Point::new(10.0, 10.0)));
    assert!(b.contains(Point::new(5.0, 5.0)));
    assert!(!b.contains(Point::new(10.1, 5.0)));
    assert!(!b.contains(Point::new(5.0, -0.1)));
}
