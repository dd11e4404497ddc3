use crate::constants::*;
use crate::corners::RoomShape;
use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothingConfig {
    pub head_alpha: f32,
    pub tilt_alpha: f32,
    pub tilt_sensitivity: f32,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            head_alpha: HEAD_SMOOTHING_ALPHA,
            tilt_alpha: TILT_SMOOTHING_ALPHA,
            tilt_sensitivity: TILT_SENSITIVITY,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionConfig {
    pub near: f32,
    pub far: f32,
    /// Parallax exaggeration; 1.0 is physically accurate.
    pub movement_scale: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            near: NEAR_PLANE,
            far: FAR_PLANE,
            movement_scale: MOVEMENT_SCALE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoomConfig {
    pub shape: RoomShape,
    pub zoom: f32,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            shape: RoomShape::Cube,
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// Spring-mass-damper driven by angular velocity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WobbleTuning {
    pub stiffness: f32,
    pub damping: f32,
    pub sensitivity: f32,
    pub drive_gain: f32,
    pub max_offset: f32,
}

/// Impulse push followed by exponential friction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InertiaTuning {
    pub friction: f32,
    pub sensitivity: f32,
    pub max_drift: f32,
}

/// Impulse push with a restoring spring that only engages past `limit`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BounceTuning {
    pub sensitivity: f32,
    pub limit: f32,
    pub stiffness: f32,
    pub damping: f32,
    pub max_offset: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectTuning {
    pub wobble: WobbleTuning,
    pub inertia: InertiaTuning,
    pub bounce: BounceTuning,
}

impl EffectTuning {
    /// Tuning for the whole-room effects (wobble in radians, slides in meters).
    pub fn rigid() -> Self {
        Self {
            wobble: WobbleTuning {
                stiffness: WOBBLE_STIFFNESS,
                damping: WOBBLE_DAMPING,
                sensitivity: WOBBLE_SENSITIVITY,
                drive_gain: WOBBLE_DRIVE_GAIN,
                max_offset: WOBBLE_MAX_ANGLE,
            },
            inertia: InertiaTuning {
                friction: INERTIA_FRICTION,
                sensitivity: INERTIA_SENSITIVITY,
                max_drift: INERTIA_MAX_DRIFT,
            },
            bounce: BounceTuning {
                sensitivity: BOUNCE_SENSITIVITY,
                limit: BOUNCE_LIMIT,
                stiffness: BOUNCE_STIFFNESS,
                damping: BOUNCE_DAMPING,
                max_offset: BOUNCE_MAX_OFFSET,
            },
        }
    }

    /// Tuning for the per-corner line effects (all offsets in meters).
    pub fn line() -> Self {
        Self {
            wobble: WobbleTuning {
                stiffness: LINE_WOBBLE_STIFFNESS,
                damping: LINE_WOBBLE_DAMPING,
                sensitivity: LINE_WOBBLE_SENSITIVITY,
                drive_gain: LINE_WOBBLE_DRIVE_GAIN,
                max_offset: LINE_WOBBLE_MAX_OFFSET,
            },
            inertia: InertiaTuning {
                friction: LINE_INERTIA_FRICTION,
                sensitivity: LINE_INERTIA_SENSITIVITY,
                max_drift: LINE_INERTIA_MAX_DRIFT,
            },
            bounce: BounceTuning {
                sensitivity: LINE_BOUNCE_SENSITIVITY,
                limit: LINE_BOUNCE_LIMIT,
                stiffness: LINE_BOUNCE_STIFFNESS,
                damping: LINE_BOUNCE_DAMPING,
                max_offset: LINE_BOUNCE_MAX_OFFSET,
            },
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.wobble;
        let i = &self.inertia;
        let b = &self.bounce;
        let params = [
            ("wobble.stiffness", w.stiffness),
            ("wobble.damping", w.damping),
            ("wobble.sensitivity", w.sensitivity),
            ("wobble.drive_gain", w.drive_gain),
            ("wobble.max_offset", w.max_offset),
            ("inertia.friction", i.friction),
            ("inertia.sensitivity", i.sensitivity),
            ("inertia.max_drift", i.max_drift),
            ("bounce.sensitivity", b.sensitivity),
            ("bounce.limit", b.limit),
            ("bounce.stiffness", b.stiffness),
            ("bounce.damping", b.damping),
            ("bounce.max_offset", b.max_offset),
        ];
        for (name, value) in params {
            // NaN fails `>= 0.0` too
            if !(value >= 0.0) {
                return Err(ConfigError::EffectParam { name, value });
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PortalConfig {
    pub smoothing: SmoothingConfig,
    pub projection: ProjectionConfig,
    pub room: RoomConfig,
    pub rigid: EffectTuning,
    pub line: EffectTuning,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            smoothing: SmoothingConfig::default(),
            projection: ProjectionConfig::default(),
            room: RoomConfig::default(),
            rigid: EffectTuning::rigid(),
            line: EffectTuning::line(),
        }
    }
}

impl PortalConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for alpha in [self.smoothing.head_alpha, self.smoothing.tilt_alpha] {
            if !(alpha > 0.0 && alpha <= 1.0) {
                return Err(ConfigError::Alpha(alpha));
            }
        }
        if !(self.smoothing.tilt_sensitivity >= 0.0) {
            return Err(ConfigError::EffectParam {
                name: "tilt_sensitivity",
                value: self.smoothing.tilt_sensitivity,
            });
        }
        let p = &self.projection;
        if !(p.near > 0.0) {
            return Err(ConfigError::NearPlane(p.near));
        }
        if !(p.near < p.far) {
            return Err(ConfigError::PlaneOrder {
                near: p.near,
                far: p.far,
            });
        }
        if !(p.movement_scale >= 0.0) {
            return Err(ConfigError::MovementScale(p.movement_scale));
        }
        let dims = self.room.shape.dimensions();
        if !(dims.width > 0.0 && dims.height > 0.0 && dims.depth > 0.0) {
            return Err(ConfigError::Room {
                width: dims.width,
                height: dims.height,
                depth: dims.depth,
            });
        }
        self.rigid.validate()?;
        self.line.validate()?;
        Ok(())
    }
}
