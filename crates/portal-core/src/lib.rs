pub mod boundary;
pub mod config;
pub mod constants;
pub mod corners;
pub mod effects;
pub mod error;
pub mod motion;
pub mod overlay;
pub mod pose;
pub mod projection;
pub mod scene;
pub mod screen;
pub mod smoother;
pub mod snapshot;
pub mod springs;

pub use boundary::MeshBoundaryExtractor;
pub use config::*;
pub use corners::{CornerEffectField, EdgeSegment, RoomDimensions, RoomShape, RoomTopology};
pub use effects::{EffectField, EffectToggles, RigidOffset};
pub use error::ConfigError;
pub use motion::{DeviceTilt, MotionSample};
pub use pose::{HeadPose, HeadTracker, RawHeadSample};
pub use projection::{Frustum, OffAxisProjector};
pub use scene::{FrameInput, FrameOutput, PortalScene, PortalUniforms, RoomTransform};
pub use screen::ScreenGeometry;
pub use smoother::{AxisSmoother, Smoother};
pub use springs::SpringState;
