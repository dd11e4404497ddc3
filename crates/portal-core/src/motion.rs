use crate::smoother::Smoother;
use glam::{EulerRot, Quat, Vec2, Vec3};

/// One device-motion update from the sensor subsystem.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSample {
    pub attitude: Quat,
    /// Angular velocity in rad/s (x = pitch rate, y = roll rate, z = yaw rate).
    pub rotation_rate: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Reference {
    Unset,
    Captured(Quat),
}

/// Turns attitude samples into a smoothed lateral tilt offset (meters).
#[derive(Clone, Debug)]
pub struct DeviceTilt {
    pitch: Smoother,
    roll: Smoother,
    sensitivity: f32,
    reference: Reference,
    tilt_offset: Vec2,
    rotation_rate: Vec3,
    active: bool,
}

impl DeviceTilt {
    pub fn new(alpha: f32, sensitivity: f32) -> Self {
        Self {
            pitch: Smoother::new(alpha),
            roll: Smoother::new(alpha),
            sensitivity,
            reference: Reference::Unset,
            tilt_offset: Vec2::ZERO,
            rotation_rate: Vec3::ZERO,
            active: false,
        }
    }

    pub fn start(&mut self) {
        self.active = true;
    }

    pub fn stop(&mut self) {
        self.active = false;
        self.reset_reference();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reference(&self) -> Reference {
        self.reference
    }

    pub fn tilt_offset(&self) -> Vec2 {
        self.tilt_offset
    }

    /// Latest raw angular velocity, unsmoothed.
    pub fn rotation_rate(&self) -> Vec3 {
        self.rotation_rate
    }

    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.sensitivity = sensitivity.max(0.0);
    }

    /// Samples are ignored while stopped.
    pub fn update(&mut self, sample: MotionSample) -> Vec2 {
        if !self.active {
            return self.tilt_offset;
        }
        let reference = match self.reference {
            Reference::Unset => {
                self.reference = Reference::Captured(sample.attitude);
                log::debug!("[motion] captured reference attitude");
                sample.attitude
            }
            Reference::Captured(q) => q,
        };
        let relative = reference.inverse() * sample.attitude;
        // yaw about Z, then pitch about X, then roll about Y
        let (_yaw, pitch, roll) = relative.to_euler(EulerRot::ZXY);
        let pitch = self.pitch.smooth(pitch);
        let roll = self.roll.smooth(roll);
        self.tilt_offset = Vec2::new(roll * self.sensitivity, -pitch * self.sensitivity);
        self.rotation_rate = sample.rotation_rate;
        self.tilt_offset
    }

    pub fn reset_reference(&mut self) {
        self.reference = Reference::Unset;
        self.pitch.reset();
        self.roll.reset();
        self.tilt_offset = Vec2::ZERO;
    }
}

impl Default for DeviceTilt {
    fn default() -> Self {
        Self::new(
            crate::constants::TILT_SMOOTHING_ALPHA,
            crate::constants::TILT_SENSITIVITY,
        )
    }
}
