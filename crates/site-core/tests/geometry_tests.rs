// Host-side tests for rectangle distance and contain-fit image placement.

use glam::Vec2;
use site_core::{circle_contains_point, contain_fit, ContainFit, Rect};

#[test]
fn clamp_point_is_the_identity_inside() {
    let rect = Rect::new(10.0, 10.0, 110.0, 60.0);
    let p = Vec2::new(40.0, 30.0);
    assert_eq!(rect.clamp_point(p), p);
    assert_eq!(rect.distance_to_point(p), 0.0);
}

#[test]
fn distance_is_axis_aligned_off_an_edge() {
    let rect = Rect::new(10.0, 10.0, 110.0, 60.0);
    // Straight left of the rect.
    assert!((rect.distance_to_point(Vec2::new(0.0, 30.0)) - 10.0).abs() < 1e-6);
    // Straight below.
    assert!((rect.distance_to_point(Vec2::new(50.0, 90.0)) - 30.0).abs() < 1e-6);
}

#[test]
fn distance_is_diagonal_off_a_corner() {
    let rect = Rect::new(10.0, 10.0, 110.0, 60.0);
    // 3-4-5 triangle off the top-left corner.
    let d = rect.distance_to_point(Vec2::new(7.0, 6.0));
    assert!((d - 5.0).abs() < 1e-6);
}

#[test]
fn from_min_size_matches_explicit_edges() {
    let a = Rect::from_min_size(Vec2::new(5.0, 6.0), Vec2::new(20.0, 10.0));
    let b = Rect::new(5.0, 6.0, 25.0, 16.0);
    assert_eq!(a, b);
    assert_eq!(a.width(), 20.0);
    assert_eq!(a.height(), 10.0);
}

#[test]
fn circle_containment_is_strict() {
    let center = Vec2::new(0.0, 0.0);
    assert!(circle_contains_point(center, 10.0, Vec2::new(9.9, 0.0)));
    assert!(!circle_contains_point(center, 10.0, Vec2::new(10.0, 0.0)));
    assert!(!circle_contains_point(center, 10.0, Vec2::new(f32::NAN, 0.0)));
}

#[test]
fn wide_image_fits_to_width_and_centers_vertically() {
    // 2:1 image in a 1000x800 viewport: width 1000, height 500, y 150.
    let fit = contain_fit(Vec2::new(2000.0, 1000.0), Vec2::new(1000.0, 800.0));
    assert!((fit.width - 1000.0).abs() < 1e-3);
    assert!((fit.height - 500.0).abs() < 1e-3);
    assert!((fit.x - 0.0).abs() < 1e-3);
    assert!((fit.y - 150.0).abs() < 1e-3);
}

#[test]
fn tall_image_fits_to_height_and_centers_horizontally() {
    // 1:2 image in a 1000x800 viewport: height 800, width 400, x 300.
    let fit = contain_fit(Vec2::new(500.0, 1000.0), Vec2::new(1000.0, 800.0));
    assert!((fit.height - 800.0).abs() < 1e-3);
    assert!((fit.width - 400.0).abs() < 1e-3);
    assert!((fit.y - 0.0).abs() < 1e-3);
    assert!((fit.x - 300.0).abs() < 1e-3);
}

#[test]
fn matching_aspect_fills_the_viewport_exactly() {
    let fit = contain_fit(Vec2::new(1600.0, 900.0), Vec2::new(3200.0, 1800.0));
    assert!((fit.width - 3200.0).abs() < 1e-3);
    assert!((fit.height - 1800.0).abs() < 1e-3);
    assert_eq!(fit.x, 0.0);
    assert_eq!(fit.y, 0.0);
}

#[test]
fn degenerate_inputs_collapse_to_the_default() {
    assert_eq!(
        contain_fit(Vec2::ZERO, Vec2::new(1000.0, 800.0)),
        ContainFit::default()
    );
    assert_eq!(
        contain_fit(Vec2::new(800.0, 600.0), Vec2::new(0.0, 800.0)),
        ContainFit::default()
    );
}
