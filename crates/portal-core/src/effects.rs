use crate::config::EffectTuning;
use crate::springs::{clamp_dt, finite_rate, SpringState};
use glam::{EulerRot, Quat, Vec2, Vec3};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EffectToggles {
    pub wobble: bool,
    pub inertia: bool,
    pub bounce: bool,
}

impl EffectToggles {
    pub const NONE: EffectToggles = EffectToggles {
        wobble: false,
        inertia: false,
        bounce: false,
    };
    pub const ALL: EffectToggles = EffectToggles {
        wobble: true,
        inertia: true,
        bounce: true,
    };

    pub fn any(&self) -> bool {
        self.wobble || self.inertia || self.bounce
    }
}

/// 6-DoF offset for the scene container: Euler rotation (radians) + translation (meters).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RigidOffset {
    pub rotation: Vec3,
    pub translation: Vec3,
}

impl RigidOffset {
    pub const ZERO: RigidOffset = RigidOffset {
        rotation: Vec3::ZERO,
        translation: Vec3::ZERO,
    };

    pub fn rotation_quat(&self) -> Quat {
        let r = self.rotation;
        Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z)
    }
}

/// Pitch drives one axis and roll the other, so the room leans into the motion.
#[inline]
pub fn wobble_drive(angular_velocity: Vec3, sensitivity: f32, gain: f32) -> Vec3 {
    let w = angular_velocity;
    Vec3::new(w.y, w.x, w.z) * sensitivity * gain
}

/// Lateral impulse: roll pushes along x, pitch along -y.
#[inline]
pub fn slide_push(angular_velocity: Vec3, sensitivity: f32) -> Vec2 {
    Vec2::new(angular_velocity.y, -angular_velocity.x) * sensitivity
}

/// Rigid offset for the scene container; the camera is never touched.
#[derive(Clone, Debug)]
pub struct EffectField {
    tuning: EffectTuning,
    wobble: SpringState<Vec3>,
    inertia: SpringState<Vec2>,
    bounce: SpringState<Vec2>,
}

impl EffectField {
    pub fn new(tuning: EffectTuning) -> Self {
        Self {
            tuning,
            wobble: SpringState::default(),
            inertia: SpringState::default(),
            bounce: SpringState::default(),
        }
    }

    pub fn tuning(&self) -> &EffectTuning {
        &self.tuning
    }

    /// Advances every enabled family; disabled ones are zeroed on the spot.
    pub fn step(&mut self, angular_velocity: Vec3, dt: f32, toggles: EffectToggles) -> RigidOffset {
        let dt = clamp_dt(dt);
        let angular_velocity = finite_rate(angular_velocity);
        let t = &self.tuning;

        if toggles.wobble {
            let drive = wobble_drive(angular_velocity, t.wobble.sensitivity, t.wobble.drive_gain);
            self.wobble.step_wobble(&t.wobble, drive, dt);
        } else {
            self.wobble.reset();
        }

        if toggles.inertia {
            let push = slide_push(angular_velocity, t.inertia.sensitivity);
            self.inertia.step_inertia(&t.inertia, push, dt);
        } else {
            self.inertia.reset();
        }

        if toggles.bounce {
            let push = slide_push(angular_velocity, t.bounce.sensitivity);
            self.bounce.step_bounce(&t.bounce, push, dt);
        } else {
            self.bounce.reset();
        }

        self.offset()
    }

    /// Combined offset; disabled families are already at rest and add nothing.
    pub fn offset(&self) -> RigidOffset {
        let slide = self.inertia.offset + self.bounce.offset;
        RigidOffset {
            rotation: self.wobble.offset,
            translation: slide.extend(0.0),
        }
    }

    pub fn wobble(&self) -> &SpringState<Vec3> {
        &self.wobble
    }

    pub fn inertia(&self) -> &SpringState<Vec2> {
        &self.inertia
    }

    pub fn bounce(&self) -> &SpringState<Vec2> {
        &self.bounce
    }

    pub fn reset(&mut self) {
        self.wobble.reset();
        self.inertia.reset();
        self.bounce.reset();
    }
}

impl Default for EffectField {
    fn default() -> Self {
        Self::new(EffectTuning::rigid())
    }
}
