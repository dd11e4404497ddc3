use crate::constants::{DEFAULT_HEAD_DISTANCE, MIN_HEAD_DISTANCE};
use crate::smoother::AxisSmoother;
use glam::{Vec2, Vec3};

/// Filtered head offset relative to the screen center, in meters.
///
/// `z` is the distance from the screen and is always at least
/// [`MIN_HEAD_DISTANCE`]. Replaced wholesale every tracked update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeadPose {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub timestamp: f64,
}

impl HeadPose {
    pub const DEFAULT: HeadPose = HeadPose {
        x: 0.0,
        y: 0.0,
        z: DEFAULT_HEAD_DISTANCE,
        timestamp: 0.0,
    };

    /// Builds a pose, flooring the distance.
    pub fn new(x: f32, y: f32, z: f32, timestamp: f64) -> Self {
        Self {
            x,
            y,
            z: clamp_distance(z),
            timestamp,
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Adds a lateral parallax offset (e.g. device tilt) without touching distance.
    pub fn offset_by(self, lateral: Vec2) -> Self {
        Self {
            x: self.x + lateral.x,
            y: self.y + lateral.y,
            ..self
        }
    }
}

impl Default for HeadPose {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Floors the head distance; NaN collapses to the floor as well.
#[inline]
pub fn clamp_distance(z: f32) -> f32 {
    if z.is_nan() {
        MIN_HEAD_DISTANCE
    } else {
        z.max(MIN_HEAD_DISTANCE)
    }
}

/// Unfiltered face-anchor translation as delivered by the capture subsystem.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawHeadSample {
    pub translation: Vec3,
    pub timestamp: f64,
}

/// Converts raw anchor samples into smoothed [`HeadPose`] values.
///
/// Each axis has its own smoother. `recenter` makes the current position the
/// new origin for x/y so the room sits straight ahead of the viewer.
#[derive(Clone, Debug)]
pub struct HeadTracker {
    smoother: AxisSmoother,
    origin: Vec2,
    current: HeadPose,
}

impl HeadTracker {
    pub fn new(alpha: f32) -> Self {
        Self {
            smoother: AxisSmoother::new(alpha),
            origin: Vec2::ZERO,
            current: HeadPose::DEFAULT,
        }
    }

    pub fn current(&self) -> HeadPose {
        self.current
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn smoothing_alpha(&self) -> f32 {
        self.smoother.alpha()
    }

    pub fn set_smoothing_alpha(&mut self, alpha: f32) {
        self.smoother.set_alpha(alpha);
    }

    pub fn update(&mut self, sample: RawHeadSample) -> HeadPose {
        let t = sample.translation;
        // anchor z points away from the screen; distance is its magnitude
        let raw = Vec3::new(
            t.x - self.origin.x,
            t.y - self.origin.y,
            clamp_distance(t.z.abs()),
        );
        let s = self.smoother.smooth(raw);
        self.current = HeadPose::new(s.x, s.y, s.z, sample.timestamp);
        self.current
    }

    pub fn recenter(&mut self) {
        // current is already origin-relative, so accumulate
        self.origin += Vec2::new(self.current.x, self.current.y);
        self.smoother.reset();
        log::debug!(
            "[head] recentered origin=({:.3},{:.3})",
            self.origin.x,
            self.origin.y
        );
    }
}

impl Default for HeadTracker {
    fn default() -> Self {
        Self::new(crate::constants::HEAD_SMOOTHING_ALPHA)
    }
}
