use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned collision volume. Callers keep `min <= max` on every axis.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
}

impl AABB {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box of the given half extents around `center`
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Closest point on or inside the box, clamping each axis independently
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        Vec3::new(
            self.min.x.max(point.x.min(self.max.x)),
            self.min.y.max(point.y.min(self.max.y)),
            self.min.z.max(point.z.min(self.max.z)),
        )
    }

    /// Euclidean distance from `point` to the box (0 inside)
    pub fn distance_to(&self, point: Vec3) -> f32 {
        point.distance(self.closest_point(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_new() {
        let min = Vec3::new(0.0, 0.0, 0.0);
        let max = Vec3::new(1.0, 1.0, 1.0);
        let aabb = AABB::new(min, max);
        assert_eq!(aabb.min, min);
        assert_eq!(aabb.max, max);
    }

    #[test]
    fn test_aabb_from_center() {
        let aabb = AABB::from_center(Vec3::new(1.0, 2.0, 3.0), Vec3::splat(0.5));
        assert_eq!(aabb.min, Vec3::new(0.5, 1.5, 2.5));
        assert_eq!(aabb.max, Vec3::new(1.5, 2.5, 3.5));
    }

    #[test]
    fn test_aabb_center_negative() {
        let aabb = AABB::new(Vec3::new(-2.0, -4.0, -6.0), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(aabb.center(), Vec3::ZERO);
    }

    #[test]
    fn test_closest_point_inside_is_identity() {
        let aabb = AABB::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        let p = Vec3::new(0.25, -0.5, 0.75);
        assert_eq!(aabb.closest_point(p), p);
        assert_eq!(aabb.distance_to(p), 0.0);
    }

    #[test]
    fn test_closest_point_clamps_each_axis() {
        let aabb = AABB::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        let closest = aabb.closest_point(Vec3::new(3.0, -5.0, 0.5));
        assert_eq!(closest, Vec3::new(1.0, -1.0, 0.5));
    }

    #[test]
    fn test_distance_to_corner() {
        let aabb = AABB::new(Vec3::ZERO, Vec3::ONE);
        let d = aabb.distance_to(Vec3::new(2.0, 2.0, 1.0));
        assert!((d - 2.0_f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_point_box() {
        let aabb = AABB::new(Vec3::ONE, Vec3::ONE);
        assert_eq!(aabb.closest_point(Vec3::ZERO), Vec3::ONE);
        assert_eq!(aabb.distance_to(Vec3::ONE), 0.0);
        assert!((aabb.distance_to(Vec3::ZERO) - 3.0_f32.sqrt()).abs() < 1e-6);
    }
}
