use glam::Vec3;
use log::trace;

use crate::math::AABB;

/// Radius of the sphere standing in for the camera body
pub const DEFAULT_CAMERA_RADIUS: f32 = 0.5;

/// Sphere-vs-box collision for the camera, with axis-sliding resolution.
///
/// The collider holds no per-frame state; the box set is borrowed for the
/// duration of each call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub radius: f32,
}

impl Collider {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    /// True if a sphere at `candidate` overlaps any box.
    ///
    /// Touching at exactly `radius` does not count as a collision.
    pub fn is_colliding(&self, candidate: Vec3, boxes: &[AABB]) -> bool {
        is_colliding(candidate, boxes, self.radius)
    }

    /// Pick a non-colliding position for a rejected move.
    ///
    /// Tries the candidate, then keeps only its X motion, then only its Z
    /// motion, and finally falls back to `previous`. Y is never slid on its own.
    pub fn resolve(&self, candidate: Vec3, previous: Vec3, boxes: &[AABB]) -> Vec3 {
        if !self.is_colliding(candidate, boxes) {
            return candidate;
        }

        let slide_x = Vec3::new(candidate.x, previous.y, previous.z);
        if !self.is_colliding(slide_x, boxes) {
            trace!("collision resolved by sliding along x: {slide_x}");
            return slide_x;
        }

        let slide_z = Vec3::new(previous.x, previous.y, candidate.z);
        if !self.is_colliding(slide_z, boxes) {
            trace!("collision resolved by sliding along z: {slide_z}");
            return slide_z;
        }

        trace!("move to {candidate} rejected, staying at {previous}");
        previous
    }
}

impl Default for Collider {
    fn default() -> Self {
        Self::new(DEFAULT_CAMERA_RADIUS)
    }
}

/// Exact sphere-vs-AABB test against every box, stopping at the first hit
pub fn is_colliding(candidate: Vec3, boxes: &[AABB], radius: f32) -> bool {
    boxes.iter().any(|b| b.distance_to(candidate) < radius)
}
