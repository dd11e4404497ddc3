use thiserror::Error;

/// Rejected configuration values.
///
/// Only configuration is validated; the per-frame pipeline clamps instead of failing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("smoothing alpha {0} must be in (0, 1]")]
    Alpha(f32),
    #[error("near plane {0} must be positive")]
    NearPlane(f32),
    #[error("near plane {near} must be closer than far plane {far}")]
    PlaneOrder { near: f32, far: f32 },
    #[error("movement scale {0} must not be negative")]
    MovementScale(f32),
    #[error("screen extents {width}x{height} m must be positive")]
    Screen { width: f32, height: f32 },
    #[error("room dimensions {width}x{height}x{depth} m must be positive")]
    Room { width: f32, height: f32, depth: f32 },
    #[error("effect parameter `{name}` = {value} must not be negative")]
    EffectParam { name: &'static str, value: f32 },
}
