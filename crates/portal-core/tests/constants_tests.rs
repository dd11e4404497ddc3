// Relationships between tuning constants that the effects rely on.

use portal_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_constants_are_valid_alphas() {
    assert!(MIN_SMOOTHING_ALPHA > 0.0 && MIN_SMOOTHING_ALPHA < 1.0);
    assert!(HEAD_SMOOTHING_ALPHA >= MIN_SMOOTHING_ALPHA && HEAD_SMOOTHING_ALPHA <= 1.0);
    assert!(TILT_SMOOTHING_ALPHA >= MIN_SMOOTHING_ALPHA && TILT_SMOOTHING_ALPHA <= 1.0);
    assert!(TILT_SENSITIVITY >= 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn head_and_projection_planes_are_ordered() {
    assert!(MIN_HEAD_DISTANCE > 0.0);
    assert!(DEFAULT_HEAD_DISTANCE > MIN_HEAD_DISTANCE);
    assert!(NEAR_PLANE > 0.0 && NEAR_PLANE < MIN_HEAD_DISTANCE);
    assert!(FAR_PLANE > NEAR_PLANE);
    // the back wall at max zoom must still sit inside the far plane
    assert!(CUBE_ROOM[2] * MAX_ZOOM + DEFAULT_HEAD_DISTANCE < FAR_PLANE);
    assert!(MOVEMENT_SCALE >= 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn frame_timing_is_sane() {
    assert!(FALLBACK_DT_SEC > 0.0);
    assert!(MAX_DT_SEC >= FALLBACK_DT_SEC);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn bounce_limits_nest() {
    assert!(BOUNCE_LIMIT < BOUNCE_MAX_OFFSET);
    assert!(LINE_BOUNCE_LIMIT < LINE_BOUNCE_MAX_OFFSET);
}

#[test]
fn wobble_springs_are_underdamped_and_stable_at_max_dt() {
    for (k, c) in [
        (WOBBLE_STIFFNESS, WOBBLE_DAMPING),
        (LINE_WOBBLE_STIFFNESS, LINE_WOBBLE_DAMPING),
    ] {
        // jiggles rather than creeping back
        assert!(c * c < 4.0 * k);
        // semi-implicit Euler stays stable for k*dt^2 < 4
        assert!(k * MAX_DT_SEC * MAX_DT_SEC < 4.0);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn zoom_range_contains_default() {
    assert!(MIN_ZOOM > 0.0);
    assert!(MIN_ZOOM <= DEFAULT_ZOOM && DEFAULT_ZOOM <= MAX_ZOOM);
}

#[test]
fn room_shapes_are_positive() {
    for room in [CUBE_ROOM, PORTRAIT_ROOM] {
        assert!(room.iter().all(|&d| d > 0.0));
        assert!(room[2] > MIN_ROOM_DEPTH);
    }
    assert!(PORTRAIT_ROOM[1] > PORTRAIT_ROOM[0]);
}
