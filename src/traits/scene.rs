use crate::math::AABB;

/// Scene collaborator - supplies the obstacles the camera must not enter
pub trait CollisionSource {
    /// Snapshot of the current collision boxes
    fn collision_boxes(&self) -> &[AABB];

    /// Get scene name for debugging
    fn name(&self) -> &str {
        "Scene"
    }
}

impl CollisionSource for [AABB] {
    fn collision_boxes(&self) -> &[AABB] {
        self
    }
}

impl CollisionSource for Vec<AABB> {
    fn collision_boxes(&self) -> &[AABB] {
        self
    }
}
