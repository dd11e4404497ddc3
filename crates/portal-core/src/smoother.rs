use crate::constants::MIN_SMOOTHING_ALPHA;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum History {
    Uninitialized,
    Primed(f32),
}

/// Recursive EMA over previous *output*; the first sample after `new` or
/// `reset` passes through.
#[derive(Clone, Copy, Debug)]
pub struct Smoother {
    alpha: f32,
    history: History,
}

impl Smoother {
    /// `alpha` is clamped into (0, 1]; 1.0 disables smoothing.
    pub fn new(alpha: f32) -> Self {
        Self {
            alpha: clamp_alpha(alpha),
            history: History::Uninitialized,
        }
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Retune without discarding history.
    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = clamp_alpha(alpha);
    }

    pub fn history(&self) -> History {
        self.history
    }

    pub fn smooth(&mut self, value: f32) -> f32 {
        let out = match self.history {
            History::Uninitialized => value,
            History::Primed(prev) => self.alpha * value + (1.0 - self.alpha) * prev,
        };
        self.history = History::Primed(out);
        out
    }

    pub fn reset(&mut self) {
        self.history = History::Uninitialized;
    }
}

fn clamp_alpha(alpha: f32) -> f32 {
    if alpha.is_nan() {
        log::warn!("smoothing alpha is NaN, disabling smoothing");
        return 1.0;
    }
    let clamped = alpha.clamp(MIN_SMOOTHING_ALPHA, 1.0);
    if clamped != alpha {
        log::warn!("smoothing alpha {alpha} clamped to {clamped}");
    }
    clamped
}

/// Three independent smoothers so axes never share history.
#[derive(Clone, Copy, Debug)]
pub struct AxisSmoother {
    x: Smoother,
    y: Smoother,
    z: Smoother,
}

impl AxisSmoother {
    pub fn new(alpha: f32) -> Self {
        let s = Smoother::new(alpha);
        Self { x: s, y: s, z: s }
    }

    pub fn smooth(&mut self, v: Vec3) -> Vec3 {
        Vec3::new(self.x.smooth(v.x), self.y.smooth(v.y), self.z.smooth(v.z))
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.x.set_alpha(alpha);
        self.y.set_alpha(alpha);
        self.z.set_alpha(alpha);
    }

    pub fn alpha(&self) -> f32 {
        self.x.alpha()
    }

    pub fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
        self.z.reset();
    }
}
