//! Asymmetric-frustum projection. The near-plane bounds shift opposite to the
//! head, so points on the screen plane (z = 0) keep their on-screen position
//! and only content off the glass moves.

use crate::config::ProjectionConfig;
use crate::pose::{clamp_distance, HeadPose};
use crate::screen::ScreenGeometry;
use glam::{Mat4, Vec3, Vec4};

/// Near-plane bounds of an off-center perspective frustum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frustum {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl Frustum {
    /// Right-handed, column-major, clip depth in [-1, 1] (OpenGL convention).
    pub fn to_matrix(&self) -> Mat4 {
        let Frustum {
            left: l,
            right: r,
            bottom: b,
            top: t,
            near: n,
            far: f,
        } = *self;
        let rl = r - l;
        let tb = t - b;
        let fne = f - n;
        Mat4::from_cols(
            Vec4::new(2.0 * n / rl, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 * n / tb, 0.0, 0.0),
            Vec4::new((r + l) / rl, (t + b) / tb, -(f + n) / fne, -1.0),
            Vec4::new(0.0, 0.0, -2.0 * f * n / fne, 0.0),
        )
    }
}

#[derive(Clone, Copy, Debug)]
pub struct OffAxisProjector {
    near: f32,
    far: f32,
    movement_scale: f32,
}

impl OffAxisProjector {
    pub fn new(config: &ProjectionConfig) -> Self {
        let mut p = Self {
            near: config.near,
            far: config.far,
            movement_scale: 0.0,
        };
        p.set_movement_scale(config.movement_scale);
        p
    }

    pub fn movement_scale(&self) -> f32 {
        self.movement_scale
    }

    pub fn set_movement_scale(&mut self, scale: f32) {
        self.movement_scale = if scale.is_finite() { scale.max(0.0) } else { 0.0 };
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    pub fn frustum(&self, head: &HeadPose, screen: &ScreenGeometry) -> Frustum {
        let (half_w, half_h) = screen.half_extents();
        let eye = self.camera_position(head);
        let near_over_dist = self.near / eye.z;
        Frustum {
            left: (-half_w - eye.x) * near_over_dist,
            right: (half_w - eye.x) * near_over_dist,
            bottom: (-half_h - eye.y) * near_over_dist,
            top: (half_h - eye.y) * near_over_dist,
            near: self.near,
            far: self.far,
        }
    }

    pub fn projection_matrix(&self, head: &HeadPose, screen: &ScreenGeometry) -> Mat4 {
        self.frustum(head, screen).to_matrix()
    }

    /// World-space eye position; shares the scaling and distance floor with `frustum`.
    pub fn camera_position(&self, head: &HeadPose) -> Vec3 {
        Vec3::new(
            head.x * self.movement_scale,
            head.y * self.movement_scale,
            clamp_distance(head.z),
        )
    }

    /// The camera never rotates, so the view is a pure translation.
    pub fn view_matrix(&self, head: &HeadPose) -> Mat4 {
        Mat4::from_translation(-self.camera_position(head))
    }
}

impl Default for OffAxisProjector {
    fn default() -> Self {
        Self::new(&ProjectionConfig::default())
    }
}
