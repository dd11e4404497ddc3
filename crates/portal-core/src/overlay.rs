use crate::constants::{OVERLAY_BASE_SCALE, OVERLAY_CENTER_Y_FRACTION, OVERLAY_HEAD_SHIFT};
use crate::pose::{clamp_distance, HeadPose};
use glam::Vec2;

/// One cubic Bezier piece of a closed contour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicSegment {
    pub from: Vec2,
    pub ctrl1: Vec2,
    pub ctrl2: Vec2,
    pub to: Vec2,
}

/// Map mesh-space contours into overlay pixels (y down) for a view of `size`.
///
/// The outline follows the head across the view and grows as the viewer leans
/// in; x is mirrored so the overlay reads like a mirror image.
pub fn map_contours(contours: &[Vec<Vec2>], head: &HeadPose, size: Vec2) -> Vec<Vec<Vec2>> {
    let center = Vec2::new(
        size.x * 0.5 - head.x * OVERLAY_HEAD_SHIFT,
        size.y * OVERLAY_CENTER_Y_FRACTION - head.y * OVERLAY_HEAD_SHIFT,
    );
    let scale = OVERLAY_BASE_SCALE * (crate::constants::DEFAULT_HEAD_DISTANCE / clamp_distance(head.z));
    contours
        .iter()
        .map(|c| {
            c.iter()
                .map(|p| Vec2::new(center.x - p.x * scale, center.y - p.y * scale))
                .collect()
        })
        .collect()
}

/// Closed Catmull-Rom spline through `points`, as cubic Bezier pieces.
///
/// Fewer than 3 points produce no curve.
pub fn closed_catmull_rom(points: &[Vec2]) -> Vec<CubicSegment> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let p0 = points[(i + n - 1) % n];
            let p1 = points[i];
            let p2 = points[(i + 1) % n];
            let p3 = points[(i + 2) % n];
            CubicSegment {
                from: p1,
                ctrl1: p1 + (p2 - p0) / 6.0,
                ctrl2: p2 - (p3 - p1) / 6.0,
                to: p2,
            }
        })
        .collect()
}
