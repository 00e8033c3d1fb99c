use std::path::Path;

use anyhow::{ensure, Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::camera::{DEFAULT_MOUSE_SENSITIVITY, DEFAULT_MOVEMENT_SPEED, DEFAULT_ZOOM};
use crate::collision::DEFAULT_CAMERA_RADIUS;
use crate::math::AABB;

pub const DEFAULT_WINDOW_WIDTH: u32 = 960;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 1080;
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 1000.0;
pub const DEFAULT_ORTHO_HALF_HEIGHT: f32 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            title: "Scene Viewport".to_string(),
        }
    }
}

impl WindowConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    /// Initial vertical field of view in degrees
    pub zoom: f32,
    pub collision_radius: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            movement_speed: DEFAULT_MOVEMENT_SPEED,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
            collision_radius: DEFAULT_CAMERA_RADIUS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub near: f32,
    pub far: f32,
    pub ortho_half_height: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            ortho_half_height: DEFAULT_ORTHO_HALF_HEIGHT,
        }
    }
}

/// Obstacles to collide against; an empty box list selects the built-in scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub name: String,
    pub boxes: Vec<AABB>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            name: "custom".to_string(),
            boxes: Vec::new(),
        }
    }
}

/// Viewport tuning; every field falls back to its default when missing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub projection: ProjectionConfig,
    pub scene: SceneConfig,
}

impl ViewportConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("Failed to parse viewport config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_json(&json)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        debug!("loaded viewport config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.window.width > 0 && self.window.height > 0,
            "window size must be non-zero, got {}x{}",
            self.window.width,
            self.window.height
        );
        ensure!(
            self.camera.collision_radius >= 0.0,
            "collision radius must not be negative, got {}",
            self.camera.collision_radius
        );
        ensure!(
            self.projection.near > 0.0 && self.projection.far > self.projection.near,
            "projection planes must satisfy 0 < near < far, got near={} far={}",
            self.projection.near,
            self.projection.far
        );
        for (i, b) in self.scene.boxes.iter().enumerate() {
            ensure!(
                b.min.cmple(b.max).all(),
                "scene box {i} has min {} above max {}",
                b.min,
                b.max
            );
        }
        Ok(())
    }
}
