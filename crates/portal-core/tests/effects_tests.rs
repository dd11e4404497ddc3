// Whole-room wobble / inertia / bounce.

use glam::{Vec2, Vec3};
use rand::prelude::*;
use portal_core::constants::*;
use portal_core::{EffectField, EffectToggles, RigidOffset};

const DT: f32 = 1.0 / 60.0;

fn only(wobble: bool, inertia: bool, bounce: bool) -> EffectToggles {
    EffectToggles {
        wobble,
        inertia,
        bounce,
    }
}

#[test]
fn rest_stays_at_rest_without_input() {
    let mut field = EffectField::default();
    for _ in 0..100 {
        let out = field.step(Vec3::ZERO, DT, EffectToggles::ALL);
        assert_eq!(out, RigidOffset::ZERO);
    }
}

#[test]
fn wobble_decays_to_rest_after_input_stops() {
    let mut field = EffectField::default();
    let toggles = only(true, false, false);
    for _ in 0..30 {
        field.step(Vec3::new(1.5, -2.0, 0.5), DT, toggles);
    }
    assert!(field.wobble().offset.length() > 1e-3);
    for _ in 0..600 {
        field.step(Vec3::ZERO, DT, toggles);
    }
    let o = field.wobble().offset;
    assert!(o.abs().max_element() < 1e-4, "wobble still at {o:?}");
}

#[test]
fn pitch_drives_the_second_axis() {
    let mut field = EffectField::default();
    let out = field.step(Vec3::new(1.0, 0.0, 0.0), DT, only(true, false, false));
    assert_eq!(out.rotation.x, 0.0);
    assert!(out.rotation.y > 0.0);
    // from rest one semi-implicit step moves drive * dt^2
    let expected = WOBBLE_SENSITIVITY * WOBBLE_DRIVE_GAIN * DT * DT;
    assert!((out.rotation.y - expected).abs() < 1e-7);
}

#[test]
fn disabling_zeroes_state_on_the_next_call() {
    let mut field = EffectField::default();
    for _ in 0..20 {
        field.step(Vec3::new(2.0, 2.0, 1.0), DT, EffectToggles::ALL);
    }
    assert!(!field.wobble().is_at_rest());
    assert!(!field.inertia().is_at_rest());
    assert!(!field.bounce().is_at_rest());

    let out = field.step(Vec3::new(2.0, 2.0, 1.0), DT, EffectToggles::NONE);
    assert_eq!(out, RigidOffset::ZERO);
    assert!(field.wobble().is_at_rest());
    assert!(field.inertia().is_at_rest());
    assert!(field.bounce().is_at_rest());
}

#[test]
fn offsets_respect_hard_limits() {
    let mut field = EffectField::default();
    let wild = Vec3::new(40.0, -55.0, 30.0);
    for _ in 0..240 {
        field.step(wild, DT, EffectToggles::ALL);
        assert!(field.wobble().offset.abs().max_element() <= WOBBLE_MAX_ANGLE);
        assert!(field.inertia().offset.abs().max_element() <= INERTIA_MAX_DRIFT);
        assert!(field.bounce().offset.abs().max_element() <= BOUNCE_MAX_OFFSET);
    }
}

#[test]
fn slides_follow_roll_and_oppose_pitch() {
    let mut field = EffectField::default();
    let out = field.step(Vec3::new(0.0, 1.0, 0.0), DT, only(false, true, false));
    assert!(out.translation.x > 0.0);
    assert_eq!(out.translation.y, 0.0);

    field.reset();
    let out = field.step(Vec3::new(1.0, 0.0, 0.0), DT, only(false, true, false));
    assert!(out.translation.y < 0.0);
    assert_eq!(out.translation.x, 0.0);
}

#[test]
fn inertia_and_bounce_add_up_and_never_move_depth() {
    let mut field = EffectField::default();
    let mut out = RigidOffset::ZERO;
    for _ in 0..10 {
        out = field.step(Vec3::new(0.3, 0.6, 0.0), DT, only(false, true, true));
    }
    let sum: Vec2 = field.inertia().offset + field.bounce().offset;
    assert!((out.translation.truncate() - sum).length() < 1e-7);
    assert_eq!(out.translation.z, 0.0);
    assert_eq!(out.rotation, Vec3::ZERO);
}

#[test]
fn bounce_is_pulled_back_inside_its_limit() {
    let mut field = EffectField::default();
    let toggles = only(false, false, true);
    for _ in 0..20 {
        field.step(Vec3::new(0.0, 8.0, 0.0), DT, toggles);
    }
    assert!(field.bounce().offset.x > BOUNCE_LIMIT);
    for _ in 0..600 {
        field.step(Vec3::ZERO, DT, toggles);
    }
    // nothing pulls it to zero inside the limit, only back to the edge
    assert!(field.bounce().offset.x <= BOUNCE_LIMIT + 1e-3);
}

#[test]
fn frame_hitches_are_capped() {
    let w = Vec3::new(0.5, -0.7, 0.2);
    let mut a = EffectField::default();
    let mut b = EffectField::default();
    let slow = a.step(w, 1.0, EffectToggles::ALL);
    let capped = b.step(w, MAX_DT_SEC, EffectToggles::ALL);
    assert_eq!(slow, capped);
}

#[test]
fn noisy_motion_never_escapes_the_limits() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut field = EffectField::default();
    for _ in 0..2000 {
        let w = Vec3::new(
            rng.gen_range(-12.0..12.0),
            rng.gen_range(-12.0..12.0),
            rng.gen_range(-6.0..6.0),
        );
        let dt = rng.gen_range(0.0..0.1);
        let out = field.step(w, dt, EffectToggles::ALL);
        assert!(out.rotation.abs().max_element() <= WOBBLE_MAX_ANGLE);
        let slide = INERTIA_MAX_DRIFT + BOUNCE_MAX_OFFSET;
        assert!(out.translation.abs().max_element() <= slide + 1e-6);
        assert!(out.rotation.is_finite() && out.translation.is_finite());
    }
}

#[test]
fn glitched_rate_sample_does_not_latch_the_room() {
    let mut field = EffectField::default();
    field.step(Vec3::new(f32::NAN, 0.0, 0.0), DT, EffectToggles::ALL);
    for _ in 0..600 {
        field.step(Vec3::ZERO, DT, EffectToggles::ALL);
    }
    assert_eq!(field.offset(), RigidOffset::ZERO);

    // mid-motion glitch: wobble still settles and slides stay finite
    for _ in 0..20 {
        field.step(Vec3::new(1.0, -1.5, 0.5), DT, EffectToggles::ALL);
    }
    field.step(Vec3::new(0.0, f32::INFINITY, 0.0), DT, EffectToggles::ALL);
    let mut out = RigidOffset::ZERO;
    for _ in 0..600 {
        out = field.step(Vec3::ZERO, DT, EffectToggles::ALL);
    }
    assert!(out.rotation.abs().max_element() < 1e-4, "{out:?}");
    assert!(out.translation.is_finite());
    assert!(out.translation.abs().max_element() < INERTIA_MAX_DRIFT + BOUNCE_MAX_OFFSET);
    assert!(field.inertia().velocity.abs().max_element() < 1e-6);
}
