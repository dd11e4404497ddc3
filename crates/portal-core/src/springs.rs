use crate::config::{BounceTuning, InertiaTuning, WobbleTuning};
use crate::constants::{FALLBACK_DT_SEC, MAX_DT_SEC};
use glam::{Vec2, Vec3};
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub};

pub trait SpringVector:
    Copy
    + PartialEq
    + std::fmt::Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f32, Output = Self>
    + AddAssign
    + MulAssign<f32>
{
    const ZERO: Self;

    /// Clamps every component into `[-limit, limit]`.
    fn clamp_abs(self, limit: f32) -> Self;

    /// Per-axis `-stiffness * (x -/+ limit)` beyond `±limit`, zero inside.
    fn edge_restore(self, limit: f32, stiffness: f32) -> Self;
}

#[inline]
fn restore_axis(x: f32, limit: f32, stiffness: f32) -> f32 {
    if x > limit {
        -stiffness * (x - limit)
    } else if x < -limit {
        -stiffness * (x + limit)
    } else {
        0.0
    }
}

impl SpringVector for Vec2 {
    const ZERO: Self = Vec2::ZERO;

    fn clamp_abs(self, limit: f32) -> Self {
        self.clamp(Vec2::splat(-limit), Vec2::splat(limit))
    }

    fn edge_restore(self, limit: f32, stiffness: f32) -> Self {
        Vec2::new(
            restore_axis(self.x, limit, stiffness),
            restore_axis(self.y, limit, stiffness),
        )
    }
}

impl SpringVector for Vec3 {
    const ZERO: Self = Vec3::ZERO;

    fn clamp_abs(self, limit: f32) -> Self {
        self.clamp(Vec3::splat(-limit), Vec3::splat(limit))
    }

    fn edge_restore(self, limit: f32, stiffness: f32) -> Self {
        Vec3::new(
            restore_axis(self.x, limit, stiffness),
            restore_axis(self.y, limit, stiffness),
            restore_axis(self.z, limit, stiffness),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringState<V: SpringVector> {
    pub offset: V,
    pub velocity: V,
}

impl<V: SpringVector> Default for SpringState<V> {
    fn default() -> Self {
        Self {
            offset: V::ZERO,
            velocity: V::ZERO,
        }
    }
}

impl<V: SpringVector> SpringState<V> {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_at_rest(&self) -> bool {
        self.offset == V::ZERO && self.velocity == V::ZERO
    }

    /// Wobble: `F = -k*x - c*v + drive`, semi-implicit Euler, hard clamp.
    pub fn step_wobble(&mut self, tuning: &WobbleTuning, drive: V, dt: f32) {
        let force = self.offset * -tuning.stiffness + self.velocity * -tuning.damping + drive;
        self.velocity += force * dt;
        self.offset += self.velocity * dt;
        self.offset = self.offset.clamp_abs(tuning.max_offset);
    }

    /// Inertia: impulse, exponential friction, drift clamp.
    pub fn step_inertia(&mut self, tuning: &InertiaTuning, push: V, dt: f32) {
        self.velocity += push;
        self.velocity *= (-tuning.friction * dt).exp();
        self.offset += self.velocity * dt;
        self.offset = self.offset.clamp_abs(tuning.max_drift);
    }

    /// Bounce: impulse, rubber-band spring past `limit`, damping, hard clamp.
    pub fn step_bounce(&mut self, tuning: &BounceTuning, push: V, dt: f32) {
        self.velocity += push;
        let restore = self.offset.edge_restore(tuning.limit, tuning.stiffness);
        self.velocity += restore * dt;
        self.velocity *= (-tuning.damping * dt).exp();
        self.offset += self.velocity * dt;
        self.offset = self.offset.clamp_abs(tuning.max_offset);
    }
}

/// Bounds a frame delta for integration: non-finite or non-positive deltas
/// fall back to one 60 Hz frame, and hitches are capped at 1/30 s.
#[inline]
pub fn clamp_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt.min(MAX_DT_SEC)
    } else {
        FALLBACK_DT_SEC
    }
}

/// A glitched (non-finite) rate sample drives nothing instead of poisoning
/// spring state.
#[inline]
pub fn finite_rate(angular_velocity: Vec3) -> Vec3 {
    if angular_velocity.is_finite() {
        angular_velocity
    } else {
        Vec3::ZERO
    }
}
