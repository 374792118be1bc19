// Host-side tests for the assembled scene: mask composition, the
// resting state, proximity refresh through the smoothing step, and
// decay routed through the scene.

use glam::Vec2;
use site_core::{
    MaskShape, Rect, SceneState, BLOB_RADIUS_X, BLOB_RADIUS_Y, ELEMENT_PROXIMITY_RADIUS,
};

const VIEWPORT: Vec2 = Vec2::new(1000.0, 600.0);

#[test]
fn at_rest_nothing_is_revealed_and_no_flags_are_set() {
    let mut scene = SceneState::new(VIEWPORT);
    let region = scene
        .proximity
        .register(Rect::new(100.0, 100.0, 200.0, 140.0), ELEMENT_PROXIMITY_RADIUS);

    for _ in 0..10 {
        scene.step_smoothing();
        scene.step_wave();
    }
    scene.step_decay();

    assert!(scene.mask_shapes().is_empty());
    assert!(!scene.proximity.is_under(region));
}

#[test]
fn the_primary_ellipse_appears_only_while_active() {
    let mut scene = SceneState::new(VIEWPORT);
    scene.pointer_move(Vec2::new(400.0, 300.0));
    // The fast arrival spawned a trail; let it decay away.
    for _ in 0..20 {
        scene.step_decay();
    }

    let shapes = scene.mask_shapes();
    assert_eq!(shapes.len(), 1);
    match shapes[0] {
        MaskShape::Ellipse { radius_x, radius_y, .. } => {
            assert_eq!(radius_x, BLOB_RADIUS_X);
            assert_eq!(radius_y, BLOB_RADIUS_Y);
        }
        other => panic!("expected the ellipse, got {other:?}"),
    }

    scene.pointer_leave();
    assert!(scene.mask_shapes().is_empty());
}

#[test]
fn the_ellipse_tracks_the_smoothed_position_not_the_raw_one() {
    let mut scene = SceneState::new(VIEWPORT);
    scene.pointer_move(Vec2::new(400.0, 300.0));
    scene.step_smoothing();

    let shapes = scene.mask_shapes();
    let MaskShape::Ellipse { center, .. } = shapes[0] else {
        panic!("expected the ellipse first");
    };
    // One smoothing step from the sentinel cannot have reached the target.
    assert!((center - Vec2::new(400.0, 300.0)).length() > 1.0);
    assert_eq!(center, scene.pointer.smoothed);
}

#[test]
fn fast_motion_adds_half_size_trail_circles() {
    let mut scene = SceneState::new(VIEWPORT);
    scene.pointer_move(Vec2::ZERO);
    // Velocity 50 => trail size 65 => circle radius 32.5.
    scene.pointer_move(Vec2::new(50.0, 0.0));

    let shapes = scene.mask_shapes();
    assert_eq!(shapes.len(), 2);
    match shapes[1] {
        MaskShape::Circle { center, radius } => {
            assert_eq!(center, Vec2::new(50.0, 0.0));
            assert!((radius - 32.5).abs() < 1e-5);
        }
        other => panic!("expected a trail circle, got {other:?}"),
    }
}

#[test]
fn trails_outlive_a_pointer_leave() {
    let mut scene = SceneState::new(VIEWPORT);
    scene.pointer_move(Vec2::ZERO);
    scene.pointer_move(Vec2::new(50.0, 0.0));
    scene.pointer_leave();

    let shapes = scene.mask_shapes();
    assert_eq!(shapes.len(), 1);
    assert!(matches!(shapes[0], MaskShape::Circle { .. }));
}

#[test]
fn decay_ticks_eventually_clear_the_mask() {
    let mut scene = SceneState::new(VIEWPORT);
    scene.pointer_move(Vec2::ZERO);
    scene.pointer_move(Vec2::new(50.0, 0.0));
    scene.pointer_leave();

    for _ in 0..20 {
        scene.step_decay();
    }
    assert!(scene.mask_shapes().is_empty());
}

#[test]
fn smoothing_refreshes_the_proximity_flags() {
    let mut scene = SceneState::new(VIEWPORT);
    let region = scene
        .proximity
        .register(Rect::new(100.0, 100.0, 200.0, 140.0), ELEMENT_PROXIMITY_RADIUS);

    scene.pointer_move(Vec2::new(150.0, 120.0));
    // Flags follow the smoothed blob, so the first frames may still miss.
    for _ in 0..240 {
        scene.step_smoothing();
    }
    assert!(scene.proximity.is_under(region));

    scene.pointer_leave();
    for _ in 0..240 {
        scene.step_smoothing();
    }
    assert!(!scene.proximity.is_under(region));
}

#[test]
fn blob_over_uses_the_cursor_radius() {
    let mut scene = SceneState::new(VIEWPORT);
    scene.pointer_move(Vec2::new(500.0, 300.0));
    for _ in 0..240 {
        scene.step_smoothing();
    }
    // Smoothed position is (500, 300) to within a fraction of a pixel.
    let near = Rect::new(560.0, 280.0, 620.0, 320.0); // 60 px away
    let far = Rect::new(590.0, 280.0, 650.0, 320.0); // 90 px away
    assert!(scene.is_blob_over(&near));
    assert!(!scene.is_blob_over(&far));
}

#[test]
fn resize_updates_the_viewport_used_for_parallax() {
    let mut scene = SceneState::new(VIEWPORT);
    scene.set_viewport(Vec2::new(2000.0, 1200.0));
    scene.pointer_move(Vec2::new(1100.0, 700.0));
    // Displacement from the new center (1000, 600) is (100, 100).
    assert!((scene.pointer.parallax - Vec2::new(-2.0, -2.0)).length() < 1e-5);
}
