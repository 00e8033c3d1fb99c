use glam::Vec3;
use log::debug;

use crate::config::SceneConfig;
use crate::math::AABB;
use crate::traits::CollisionSource;

/// Static set of obstacles with a name for logging
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub name: String,
    pub boxes: Vec<AABB>,
}

impl Scene {
    pub fn new(name: impl Into<String>, boxes: Vec<AABB>) -> Self {
        Self {
            name: name.into(),
            boxes,
        }
    }

    /// Boxes from config, or the built-in scene when none are listed
    pub fn from_config(config: &SceneConfig) -> Self {
        if config.boxes.is_empty() {
            return create_default_scene();
        }
        debug!("scene '{}' loaded from config: {} collision boxes", config.name, config.boxes.len());
        Self::new(config.name.clone(), config.boxes.clone())
    }
}

impl CollisionSource for Scene {
    fn collision_boxes(&self) -> &[AABB] {
        &self.boxes
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Floor slab, a ring of pillars and a back wall around the origin
pub fn create_default_scene() -> Scene {
    let ground = AABB::new(Vec3::new(-30.0, -1.5, -30.0), Vec3::new(30.0, -1.0, 30.0));

    let pillars = (0..8).map(|i| {
        let angle = (i as f32 / 8.0) * std::f32::consts::TAU;
        let center = Vec3::new(angle.cos() * 8.0, 1.5, angle.sin() * 8.0);
        AABB::from_center(center, Vec3::new(0.75, 2.5, 0.75))
    });

    let back_wall = AABB::new(Vec3::new(-12.0, -1.0, -14.0), Vec3::new(12.0, 6.0, -13.0));
    let table = AABB::new(Vec3::new(-1.5, -1.0, -1.0), Vec3::new(1.5, 0.75, 1.0));

    let boxes: Vec<AABB> = std::iter::once(ground)
        .chain(pillars)
        .chain([back_wall, table])
        .collect();

    debug!("default scene created: {} collision boxes", boxes.len());
    Scene::new("default", boxes)
}
