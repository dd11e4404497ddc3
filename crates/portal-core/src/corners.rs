//! Room wireframe corners and the per-corner line effects.

use crate::config::EffectTuning;
use crate::constants::{CUBE_ROOM, MIN_ROOM_DEPTH, MIN_SEGMENT_LENGTH, PORTRAIT_ROOM};
use crate::effects::EffectToggles;
use crate::springs::{clamp_dt, finite_rate, SpringState};
use glam::{Mat4, Quat, Vec3};

pub const CORNER_COUNT: usize = 8;
pub const EDGE_COUNT: usize = 12;

/// Corner index pairs. Order: depth edges, back wall, front opening.
pub const ROOM_EDGES: [(usize, usize); EDGE_COUNT] = [
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
    (4, 5),
    (6, 7),
    (4, 6),
    (5, 7),
    (0, 1),
    (2, 3),
    (0, 2),
    (1, 3),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoomDimensions {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl RoomDimensions {
    const fn from_array(d: [f32; 3]) -> Self {
        Self {
            width: d[0],
            height: d[1],
            depth: d[2],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RoomShape {
    /// Square front opening.
    Cube,
    /// Tall rectangle for portrait screens.
    Portrait,
    Custom(RoomDimensions),
}

impl RoomShape {
    pub fn dimensions(&self) -> RoomDimensions {
        match self {
            RoomShape::Cube => RoomDimensions::from_array(CUBE_ROOM),
            RoomShape::Portrait => RoomDimensions::from_array(PORTRAIT_ROOM),
            RoomShape::Custom(d) => *d,
        }
    }
}

/// Immutable corner positions for one room shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoomTopology {
    dims: RoomDimensions,
    corners: [Vec3; CORNER_COUNT],
}

impl RoomTopology {
    pub fn new(dims: RoomDimensions) -> Self {
        let hw = dims.width * 0.5;
        let hh = dims.height * 0.5;
        let d = dims.depth;
        Self {
            dims,
            corners: [
                Vec3::new(-hw, hh, 0.0),  // front top-left
                Vec3::new(hw, hh, 0.0),   // front top-right
                Vec3::new(-hw, -hh, 0.0), // front bottom-left
                Vec3::new(hw, -hh, 0.0),  // front bottom-right
                Vec3::new(-hw, hh, -d),   // back top-left
                Vec3::new(hw, hh, -d),    // back top-right
                Vec3::new(-hw, -hh, -d),  // back bottom-left
                Vec3::new(hw, -hh, -d),   // back bottom-right
            ],
        }
    }

    pub fn dimensions(&self) -> RoomDimensions {
        self.dims
    }

    pub fn corners(&self) -> &[Vec3; CORNER_COUNT] {
        &self.corners
    }

    pub fn edges(&self) -> &'static [(usize, usize); EDGE_COUNT] {
        &ROOM_EDGES
    }

    /// Wobble pivot at the room's center of depth.
    pub fn pivot(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, -self.dims.depth * 0.5)
    }

    /// 0 on the front opening, 1 on the back wall.
    pub fn depth_factor(&self, corner: usize) -> f32 {
        self.corners[corner].z.abs() / self.dims.depth.max(MIN_ROOM_DEPTH)
    }
}

/// A straight edge between two (possibly displaced) corners, laid out the way
/// a Y-up cylinder mesh needs it: centered at `midpoint`, `length` tall, and
/// rotated from +Y onto the segment direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeSegment {
    pub start: Vec3,
    pub end: Vec3,
    pub midpoint: Vec3,
    pub length: f32,
    pub orientation: Quat,
}

impl EdgeSegment {
    /// `None` when the endpoints are closer than [`MIN_SEGMENT_LENGTH`].
    pub fn between(start: Vec3, end: Vec3) -> Option<Self> {
        let delta = end - start;
        let length = delta.length();
        if !(length > MIN_SEGMENT_LENGTH) {
            return None;
        }
        let dir = delta / length;
        // from_rotation_arc picks a half turn about an orthogonal axis when
        // dir is -Y; pin it to X so the result is stable
        let orientation = if dir.y < -1.0 + 1e-6 {
            Quat::from_rotation_x(std::f32::consts::PI)
        } else {
            Quat::from_rotation_arc(Vec3::Y, dir)
        };
        Some(Self {
            start,
            end,
            midpoint: (start + end) * 0.5,
            length,
            orientation,
        })
    }

    /// Model matrix for a unit-height Y-up cylinder.
    pub fn model_matrix(&self, radius: f32) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::new(radius, self.length, radius),
            self.orientation,
            self.midpoint,
        )
    }
}

/// Per-corner wobble drive: torque-like `ω × arm`, so longer arms swing more.
#[inline]
pub fn corner_wobble_drive(angular_velocity: Vec3, arm: Vec3, sensitivity: f32, gain: f32) -> Vec3 {
    angular_velocity.cross(arm) * sensitivity * gain
}

/// Per-corner slide impulse, scaled by how deep the corner sits.
#[inline]
pub fn corner_slide_push(angular_velocity: Vec3, sensitivity: f32, depth_factor: f32) -> Vec3 {
    Vec3::new(angular_velocity.y, -angular_velocity.x, 0.0) * sensitivity * depth_factor
}

#[derive(Clone, Debug)]
pub struct CornerEffectField {
    topology: RoomTopology,
    tuning: EffectTuning,
    wobble: [SpringState<Vec3>; CORNER_COUNT],
    inertia: [SpringState<Vec3>; CORNER_COUNT],
    bounce: [SpringState<Vec3>; CORNER_COUNT],
    displaced: [Vec3; CORNER_COUNT],
    segments: [EdgeSegment; EDGE_COUNT],
    was_active: bool,
}

impl CornerEffectField {
    pub fn new(shape: RoomShape, tuning: EffectTuning) -> Self {
        let topology = RoomTopology::new(shape.dimensions());
        let corners = *topology.corners();
        Self {
            topology,
            tuning,
            wobble: [SpringState::default(); CORNER_COUNT],
            inertia: [SpringState::default(); CORNER_COUNT],
            bounce: [SpringState::default(); CORNER_COUNT],
            displaced: corners,
            segments: base_segments(&topology),
            was_active: false,
        }
    }

    pub fn topology(&self) -> &RoomTopology {
        &self.topology
    }

    /// Rebuilds the corners for a new shape and drops all spring state.
    pub fn set_shape(&mut self, shape: RoomShape) {
        self.topology = RoomTopology::new(shape.dimensions());
        log::debug!("[room] shape -> {:?}", shape);
        self.reset();
    }

    /// Displaced corner positions from the last step.
    pub fn corners(&self) -> &[Vec3; CORNER_COUNT] {
        &self.displaced
    }

    pub fn segments(&self) -> &[EdgeSegment; EDGE_COUNT] {
        &self.segments
    }

    pub fn is_active(&self) -> bool {
        self.was_active
    }

    pub fn step(
        &mut self,
        angular_velocity: Vec3,
        dt: f32,
        toggles: EffectToggles,
    ) -> &[Vec3; CORNER_COUNT] {
        if !toggles.any() {
            if self.was_active {
                self.reset();
            }
            return &self.displaced;
        }
        self.was_active = true;

        let dt = clamp_dt(dt);
        let angular_velocity = finite_rate(angular_velocity);
        let t = &self.tuning;
        let topo = &self.topology;
        let pivot = topo.pivot();
        let mut displaced = *topo.corners();

        for (i, base) in topo.corners().iter().enumerate() {
            if toggles.wobble {
                let drive = corner_wobble_drive(
                    angular_velocity,
                    *base - pivot,
                    t.wobble.sensitivity,
                    t.wobble.drive_gain,
                );
                self.wobble[i].step_wobble(&t.wobble, drive, dt);
                displaced[i] += self.wobble[i].offset;
            } else {
                self.wobble[i].reset();
            }

            let depth_factor = topo.depth_factor(i);

            if toggles.inertia {
                let push = corner_slide_push(angular_velocity, t.inertia.sensitivity, depth_factor);
                self.inertia[i].step_inertia(&t.inertia, push, dt);
                displaced[i] += self.inertia[i].offset;
            } else {
                self.inertia[i].reset();
            }

            if toggles.bounce {
                let push = corner_slide_push(angular_velocity, t.bounce.sensitivity, depth_factor);
                self.bounce[i].step_bounce(&t.bounce, push, dt);
                displaced[i] += self.bounce[i].offset;
            } else {
                self.bounce[i].reset();
            }
        }

        self.displaced = displaced;
        for (seg, &(a, b)) in self.segments.iter_mut().zip(ROOM_EDGES.iter()) {
            if let Some(s) = EdgeSegment::between(displaced[a], displaced[b]) {
                *seg = s;
            }
        }
        &self.displaced
    }

    /// Restores every corner to its base position and zeroes all springs.
    pub fn reset(&mut self) {
        self.wobble = [SpringState::default(); CORNER_COUNT];
        self.inertia = [SpringState::default(); CORNER_COUNT];
        self.bounce = [SpringState::default(); CORNER_COUNT];
        self.displaced = *self.topology.corners();
        self.segments = base_segments(&self.topology);
        self.was_active = false;
    }
}

fn base_segments(topology: &RoomTopology) -> [EdgeSegment; EDGE_COUNT] {
    let c = topology.corners();
    ROOM_EDGES.map(|(a, b)| {
        EdgeSegment::between(c[a], c[b]).unwrap_or(EdgeSegment {
            start: c[a],
            end: c[b],
            midpoint: (c[a] + c[b]) * 0.5,
            length: 0.0,
            orientation: Quat::IDENTITY,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downward_segment_is_half_turn_about_x() {
        let s = EdgeSegment::between(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0)).unwrap();
        let rotated = s.orientation * Vec3::Y;
        assert!((rotated - Vec3::new(0.0, -1.0, 0.0)).length() < 1e-5);
        assert!(s.orientation.angle_between(Quat::from_rotation_x(std::f32::consts::PI)) < 1e-4);
    }

    #[test]
    fn degenerate_segment_is_rejected() {
        assert!(EdgeSegment::between(Vec3::ONE, Vec3::ONE).is_none());
    }

    #[test]
    fn depth_factor_spans_front_to_back() {
        let topo = RoomTopology::new(RoomShape::Cube.dimensions());
        assert_eq!(topo.depth_factor(0), 0.0);
        assert!((topo.depth_factor(7) - 1.0).abs() < 1e-6);
    }
}
