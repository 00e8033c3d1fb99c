pub mod camera;
pub mod cli;
pub mod collision;
pub mod config;
pub mod core;
pub mod math;
pub mod projection;
pub mod scene;
pub mod traits;
pub mod types;
pub mod viewport;

pub use camera::{Camera, CameraMovement, CameraPose};
pub use collision::{is_colliding, Collider, DEFAULT_CAMERA_RADIUS};
pub use config::ViewportConfig;
pub use math::AABB;
pub use projection::ProjectionMode;
pub use scene::{create_default_scene, Scene};
pub use viewport::{FrameOutcome, Viewport};
