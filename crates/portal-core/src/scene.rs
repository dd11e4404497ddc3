//! Per-frame driver: sensor snapshots and `dt` in, render state out.

use crate::config::PortalConfig;
use crate::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};
use crate::corners::{CornerEffectField, EdgeSegment, RoomShape, CORNER_COUNT, EDGE_COUNT};
use crate::effects::{EffectField, EffectToggles, RigidOffset};
use crate::error::ConfigError;
use crate::pose::HeadPose;
use crate::projection::OffAxisProjector;
use crate::screen::ScreenGeometry;
use glam::{Mat4, Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    pub head: HeadPose,
    /// Device-tilt parallax, present only while motion tracking is active.
    pub tilt: Option<Vec2>,
    pub angular_velocity: Vec3,
    pub dt: f32,
    pub effects: EffectToggles,
    pub line_effects: EffectToggles,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            head: HeadPose::DEFAULT,
            tilt: None,
            angular_velocity: Vec3::ZERO,
            dt: 0.0,
            effects: EffectToggles::NONE,
            line_effects: EffectToggles::NONE,
        }
    }
}

/// Transform of the room container: depth-only zoom plus the rigid effect offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoomTransform {
    pub scale: Vec3,
    pub offset: RigidOffset,
}

impl RoomTransform {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            self.offset.rotation_quat(),
            self.offset.translation,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutput {
    pub projection: Mat4,
    pub view: Mat4,
    pub camera_position: Vec3,
    pub room: RoomTransform,
    pub corners: [Vec3; CORNER_COUNT],
    pub segments: [EdgeSegment; EDGE_COUNT],
}

/// Uniform block laid out for direct upload by a renderer.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PortalUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub camera_pos: [f32; 4],
}

impl FrameOutput {
    pub fn uniforms(&self) -> PortalUniforms {
        PortalUniforms {
            view_proj: (self.projection * self.view).to_cols_array_2d(),
            model: self.room.model_matrix().to_cols_array_2d(),
            camera_pos: self.camera_position.extend(1.0).to_array(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct PortalScene {
    screen: ScreenGeometry,
    projector: OffAxisProjector,
    effects: EffectField,
    lines: CornerEffectField,
    shape: RoomShape,
    zoom: f32,
}

impl PortalScene {
    pub fn new(config: &PortalConfig, screen: ScreenGeometry) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut scene = Self {
            screen,
            projector: OffAxisProjector::new(&config.projection),
            effects: EffectField::new(config.rigid),
            lines: CornerEffectField::new(config.room.shape, config.line),
            shape: config.room.shape,
            zoom: DEFAULT_ZOOM,
        };
        scene.set_zoom(config.room.zoom);
        log::debug!(
            "[scene] screen={:.4}x{:.4} m shape={:?} zoom={:.2}",
            screen.width_meters(),
            screen.height_meters(),
            scene.shape,
            scene.zoom
        );
        Ok(scene)
    }

    pub fn screen(&self) -> &ScreenGeometry {
        &self.screen
    }

    pub fn projector(&self) -> &OffAxisProjector {
        &self.projector
    }

    pub fn effects(&self) -> &EffectField {
        &self.effects
    }

    pub fn line_effects(&self) -> &CornerEffectField {
        &self.lines
    }

    pub fn set_movement_scale(&mut self, scale: f32) {
        self.projector.set_movement_scale(scale);
    }

    pub fn shape(&self) -> RoomShape {
        self.shape
    }

    pub fn set_shape(&mut self, shape: RoomShape) {
        if shape == self.shape {
            return;
        }
        self.shape = shape;
        self.lines.set_shape(shape);
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Zoom scales only room depth; the front opening stays screen-sized.
    pub fn set_zoom(&mut self, zoom: f32) {
        let clamped = if zoom.is_nan() {
            DEFAULT_ZOOM
        } else {
            zoom.clamp(MIN_ZOOM, MAX_ZOOM)
        };
        if clamped != zoom {
            log::warn!("[scene] zoom {zoom} clamped to {clamped}");
        }
        self.zoom = clamped;
    }

    pub fn step(&mut self, input: &FrameInput) -> FrameOutput {
        let head = match input.tilt {
            Some(tilt) => input.head.offset_by(tilt),
            None => input.head,
        };
        let offset = self
            .effects
            .step(input.angular_velocity, input.dt, input.effects);
        self.lines
            .step(input.angular_velocity, input.dt, input.line_effects);
        self.output(&head, offset)
    }

    /// Default zoom, default pose, every spring at rest.
    pub fn reset_view(&mut self) -> FrameOutput {
        self.zoom = DEFAULT_ZOOM;
        self.effects.reset();
        self.lines.reset();
        log::debug!("[scene] view reset");
        self.output(&HeadPose::DEFAULT, RigidOffset::ZERO)
    }

    fn output(&self, head: &HeadPose, offset: RigidOffset) -> FrameOutput {
        FrameOutput {
            projection: self.projector.projection_matrix(head, &self.screen),
            view: self.projector.view_matrix(head),
            camera_position: self.projector.camera_position(head),
            room: RoomTransform {
                scale: Vec3::new(1.0, 1.0, self.zoom),
                offset,
            },
            corners: *self.lines.corners(),
            segments: *self.lines.segments(),
        }
    }
}
