// Off-axis projection: frustum shape and the screen-plane invariance that
// makes the portal illusion work.

use glam::Vec3;
use portal_core::{HeadPose, OffAxisProjector, ProjectionConfig, ScreenGeometry};

fn screen() -> ScreenGeometry {
    ScreenGeometry::new(0.0715, 0.1496).unwrap()
}

fn projector(movement_scale: f32) -> OffAxisProjector {
    OffAxisProjector::new(&ProjectionConfig {
        movement_scale,
        ..ProjectionConfig::default()
    })
}

fn project(p: &OffAxisProjector, head: &HeadPose, point: Vec3) -> Vec3 {
    let clip_from_world = p.projection_matrix(head, &screen()) * p.view_matrix(head);
    clip_from_world.project_point3(point)
}

#[test]
fn centered_head_gives_symmetric_frustum() {
    let p = projector(1.5);
    for d in [0.2, 0.4, 0.9] {
        let f = p.frustum(&HeadPose::new(0.0, 0.0, d, 0.0), &screen());
        assert!((f.left + f.right).abs() < 1e-9);
        assert!((f.bottom + f.top).abs() < 1e-9);
        assert!(f.right > 0.0 && f.top > 0.0);
    }
}

#[test]
fn frustum_shifts_opposite_to_head() {
    let p = projector(1.5);
    let mut prev = p.frustum(&HeadPose::new(0.0, 0.0, 0.4, 0.0), &screen());
    for i in 1..=10 {
        let hx = i as f32 * 0.01;
        let f = p.frustum(&HeadPose::new(hx, 0.0, 0.4, 0.0), &screen());
        assert!(f.right < prev.right, "right did not shrink at hx={hx}");
        assert!(f.left.abs() > prev.left.abs(), "left did not grow at hx={hx}");
        prev = f;
    }
}

#[test]
fn screen_center_is_invariant_under_head_motion() {
    let p = projector(1.5);
    for (hx, hy) in [(0.0, 0.0), (0.05, 0.0), (-0.08, 0.03), (0.02, -0.06)] {
        let ndc = project(&p, &HeadPose::new(hx, hy, 0.45, 0.0), Vec3::ZERO);
        assert!(ndc.x.abs() < 1e-4, "x drifted to {} for ({hx},{hy})", ndc.x);
        assert!(ndc.y.abs() < 1e-4, "y drifted to {} for ({hx},{hy})", ndc.y);
    }
}

#[test]
fn any_point_on_the_glass_keeps_its_screen_position() {
    let p = projector(2.0);
    let s = screen();
    let (half_w, half_h) = s.half_extents();
    let point = Vec3::new(0.02, -0.03, 0.0);
    let expected = (point.x / half_w, point.y / half_h);
    for (hx, hy, d) in [(0.0, 0.0, 0.3), (0.07, 0.02, 0.5), (-0.04, -0.05, 0.25)] {
        let ndc = project(&p, &HeadPose::new(hx, hy, d, 0.0), point);
        assert!((ndc.x - expected.0).abs() < 1e-4);
        assert!((ndc.y - expected.1).abs() < 1e-4);
    }
}

#[test]
fn content_behind_the_glass_shows_parallax() {
    let p = projector(1.5);
    let behind = Vec3::new(0.0, 0.0, -0.3);
    let left = project(&p, &HeadPose::new(-0.05, 0.0, 0.4, 0.0), behind);
    let right = project(&p, &HeadPose::new(0.05, 0.0, 0.4, 0.0), behind);
    // deep content follows the viewer, as through a real window
    assert!(right.x > left.x);
}

#[test]
fn camera_position_tracks_scaled_head() {
    let p = projector(1.5);
    let cam = p.camera_position(&HeadPose::new(0.04, -0.02, 0.5, 0.0));
    assert!((cam - Vec3::new(0.06, -0.03, 0.5)).length() < 1e-6);
}

#[test]
fn degenerate_distance_is_clamped() {
    let p = projector(1.0);
    let head = HeadPose {
        x: 0.0,
        y: 0.0,
        z: -2.0,
        timestamp: 0.0,
    };
    assert_eq!(p.camera_position(&head).z, 0.1);
    let f = p.frustum(&head, &screen());
    assert!(f.right.is_finite() && f.right > 0.0);
}

#[test]
fn negative_movement_scale_is_floored() {
    let mut p = projector(1.0);
    p.set_movement_scale(-3.0);
    assert_eq!(p.movement_scale(), 0.0);
    let cam = p.camera_position(&HeadPose::new(0.1, 0.1, 0.4, 0.0));
    assert_eq!(cam.x, 0.0);
    assert_eq!(cam.y, 0.0);
}
