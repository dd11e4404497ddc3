use crate::constants::{FALLBACK_PPI, MM_PER_INCH};
use crate::error::ConfigError;

/// Active display area in meters (portrait orientation, bezels excluded).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenGeometry {
    width_meters: f32,
    height_meters: f32,
}

// (identifier, width mm, height mm)
const DEVICE_DISPLAYS: &[(&str, f32, f32)] = &[
    ("iPhone17,2", 77.6, 163.0), // 16 Pro Max
    ("iPhone17,1", 71.5, 149.6), // 16 Pro
    ("iPhone17,4", 77.8, 160.9), // 16 Plus
    ("iPhone17,3", 71.6, 147.7), // 16
    ("iPhone16,2", 77.6, 163.0), // 15 Pro Max
    ("iPhone16,1", 71.5, 149.6), // 15 Pro
    ("iPhone15,5", 77.8, 160.9), // 15 Plus
    ("iPhone15,4", 71.6, 147.7), // 15
    ("iPhone15,3", 77.6, 163.0), // 14 Pro Max
    ("iPhone15,2", 71.5, 147.5), // 14 Pro
    ("iPhone14,8", 77.8, 160.9), // 14 Plus
    ("iPhone14,7", 71.6, 146.7), // 14
];

impl ScreenGeometry {
    pub fn new(width_meters: f32, height_meters: f32) -> Result<Self, ConfigError> {
        if !(width_meters > 0.0 && height_meters > 0.0) {
            return Err(ConfigError::Screen {
                width: width_meters,
                height: height_meters,
            });
        }
        Ok(Self {
            width_meters,
            height_meters,
        })
    }

    /// Looks up a known device; otherwise estimates from the native pixel size.
    pub fn for_device(identifier: &str, native_px: (u32, u32)) -> Result<Self, ConfigError> {
        let (w_mm, h_mm) = match lookup_display_mm(identifier) {
            Some(dims) => dims,
            None => {
                log::info!("[screen] unknown device {identifier:?}, estimating from {FALLBACK_PPI} ppi");
                estimate_mm_from_pixels(native_px.0, native_px.1, FALLBACK_PPI)
            }
        };
        Self::new(w_mm / 1000.0, h_mm / 1000.0)
    }

    pub fn width_meters(&self) -> f32 {
        self.width_meters
    }

    pub fn height_meters(&self) -> f32 {
        self.height_meters
    }

    pub fn half_extents(&self) -> (f32, f32) {
        (self.width_meters * 0.5, self.height_meters * 0.5)
    }
}

pub fn lookup_display_mm(identifier: &str) -> Option<(f32, f32)> {
    DEVICE_DISPLAYS
        .iter()
        .find(|(id, _, _)| *id == identifier)
        .map(|&(_, w, h)| (w, h))
}

#[inline]
pub fn estimate_mm_from_pixels(width_px: u32, height_px: u32, ppi: f32) -> (f32, f32) {
    (
        width_px as f32 / ppi * MM_PER_INCH,
        height_px as f32 / ppi * MM_PER_INCH,
    )
}
