// Shared tuning constants for head tracking, projection and the room effects.

// Smoothing
pub const HEAD_SMOOTHING_ALPHA: f32 = 0.25; // typical head-tracking range is 0.15..0.4
pub const MIN_SMOOTHING_ALPHA: f32 = 1e-3; // alpha is kept in [this, 1.0]
pub const TILT_SMOOTHING_ALPHA: f32 = 0.3;
pub const TILT_SENSITIVITY: f32 = 0.03; // radians of tilt -> meters of parallax

// Head pose
pub const MIN_HEAD_DISTANCE: f32 = 0.1; // meters; floor that keeps the frustum non-degenerate
pub const DEFAULT_HEAD_DISTANCE: f32 = 0.4;

// Projection
pub const NEAR_PLANE: f32 = 0.001;
pub const FAR_PLANE: f32 = 10.0;
pub const MOVEMENT_SCALE: f32 = 1.5; // 1.0 = physically accurate parallax

// Frame timing
pub const MAX_DT_SEC: f32 = 1.0 / 30.0; // cap integration step on frame hitches
pub const FALLBACK_DT_SEC: f32 = 1.0 / 60.0;

// Rigid wobble (radians)
pub const WOBBLE_STIFFNESS: f32 = 120.0;
pub const WOBBLE_DAMPING: f32 = 6.0;
pub const WOBBLE_SENSITIVITY: f32 = 0.08;
pub const WOBBLE_DRIVE_GAIN: f32 = 50.0;
pub const WOBBLE_MAX_ANGLE: f32 = 0.15;

// Rigid inertia (meters)
pub const INERTIA_FRICTION: f32 = 3.0;
pub const INERTIA_SENSITIVITY: f32 = 0.012;
pub const INERTIA_MAX_DRIFT: f32 = 0.05;

// Rigid bounce (meters)
pub const BOUNCE_SENSITIVITY: f32 = 0.008;
pub const BOUNCE_LIMIT: f32 = 0.03;
pub const BOUNCE_STIFFNESS: f32 = 200.0;
pub const BOUNCE_DAMPING: f32 = 8.0;
pub const BOUNCE_MAX_OFFSET: f32 = 0.08;

// Line wobble (per corner, meters)
pub const LINE_WOBBLE_STIFFNESS: f32 = 80.0;
pub const LINE_WOBBLE_DAMPING: f32 = 5.0;
pub const LINE_WOBBLE_SENSITIVITY: f32 = 0.004;
pub const LINE_WOBBLE_DRIVE_GAIN: f32 = 100.0;
pub const LINE_WOBBLE_MAX_OFFSET: f32 = 0.03;

// Line inertia
pub const LINE_INERTIA_FRICTION: f32 = 3.5;
pub const LINE_INERTIA_SENSITIVITY: f32 = 0.003;
pub const LINE_INERTIA_MAX_DRIFT: f32 = 0.04;

// Line bounce
pub const LINE_BOUNCE_SENSITIVITY: f32 = 0.002;
pub const LINE_BOUNCE_LIMIT: f32 = 0.02;
pub const LINE_BOUNCE_STIFFNESS: f32 = 150.0;
pub const LINE_BOUNCE_DAMPING: f32 = 7.0;
pub const LINE_BOUNCE_MAX_OFFSET: f32 = 0.06;

// Room shapes: (width, height, depth) in meters
pub const CUBE_ROOM: [f32; 3] = [0.30, 0.30, 0.50];
pub const PORTRAIT_ROOM: [f32; 3] = [0.22, 0.42, 0.50];
pub const MIN_ROOM_DEPTH: f32 = 0.01; // guards the depth-factor division

// Zoom only scales room depth
pub const DEFAULT_ZOOM: f32 = 0.6;
pub const MIN_ZOOM: f32 = 0.3;
pub const MAX_ZOOM: f32 = 4.0;

// Edge segments shorter than this keep their previous geometry
pub const MIN_SEGMENT_LENGTH: f32 = 1e-4;

// Face mesh contours
pub const MIN_CHAIN_LEN: usize = 5;

// Overlay mapping (points per meter of head motion / mesh extent)
pub const OVERLAY_HEAD_SHIFT: f32 = 300.0;
pub const OVERLAY_BASE_SCALE: f32 = 1500.0;
pub const OVERLAY_CENTER_Y_FRACTION: f32 = 0.35;

// Screen size fallback
pub const FALLBACK_PPI: f32 = 460.0;
pub const MM_PER_INCH: f32 = 25.4;

