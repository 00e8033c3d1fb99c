use glam::Vec3;
use scene_viewport::{is_colliding, Collider, AABB, DEFAULT_CAMERA_RADIUS};

fn unit_box() -> AABB {
    AABB::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0))
}

fn obstacle_course() -> Vec<AABB> {
    vec![
        unit_box(),
        AABB::new(Vec3::new(4.0, 0.0, -2.0), Vec3::new(6.0, 3.0, 2.0)),
        AABB::new(Vec3::new(-8.0, -1.0, 5.0), Vec3::new(-7.0, 1.0, 9.0)),
        AABB::new(Vec3::new(0.0, 10.0, 0.0), Vec3::new(0.0, 10.0, 0.0)),
    ]
}

/// Deterministic spread of sample points across [-10, 10]^3
fn sample_points() -> Vec<Vec3> {
    (0..1000)
        .map(|i| {
            let f = i as f32;
            Vec3::new(
                ((f * 0.618_034) % 1.0) * 20.0 - 10.0,
                ((f * 0.414_214) % 1.0) * 20.0 - 10.0,
                ((f * 0.732_051) % 1.0) * 20.0 - 10.0,
            )
        })
        .collect()
}

#[cfg(test)]
mod collision_tests {
    use super::*;

    #[test]
    fn test_scenario_center_inside_box() {
        assert!(is_colliding(Vec3::ZERO, &[unit_box()], 0.5));
    }

    #[test]
    fn test_scenario_clear_of_face() {
        // closest point (1,0,0), distance 1.0
        assert!(!is_colliding(Vec3::new(2.0, 0.0, 0.0), &[unit_box()], 0.5));
    }

    #[test]
    fn test_scenario_resolve_falls_back_to_previous() {
        let collider = Collider::new(0.5);
        let candidate = Vec3::new(1.3, 0.0, 0.0);
        let previous = Vec3::new(3.0, 0.0, 0.0);

        assert!(collider.is_colliding(candidate, &[unit_box()]));
        let resolved = collider.resolve(candidate, previous, &[unit_box()]);
        assert_eq!(resolved, Vec3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn test_default_radius() {
        assert_eq!(DEFAULT_CAMERA_RADIUS, 0.5);
        assert_eq!(Collider::default().radius, DEFAULT_CAMERA_RADIUS);
    }

    #[test]
    fn test_free_space_far_from_boxes() {
        let boxes = obstacle_course();
        let collider = Collider::default();
        for p in sample_points() {
            let clearance = boxes
                .iter()
                .map(|b| b.distance_to(p))
                .fold(f32::INFINITY, f32::min);
            if clearance >= 0.5 {
                assert!(!collider.is_colliding(p, &boxes), "free point {p} reported colliding");
            }
        }
    }

    #[test]
    fn test_points_inside_boxes_collide() {
        let boxes = obstacle_course();
        let collider = Collider::default();
        for b in &boxes {
            assert!(collider.is_colliding(b.center(), &boxes));
            assert!(collider.is_colliding(b.min, &boxes));
            assert!(collider.is_colliding(b.max, &boxes));
        }
    }

    #[test]
    fn test_boundary_on_each_face_is_free() {
        let collider = Collider::default();
        let faces = [
            Vec3::new(1.5, 0.0, 0.0),
            Vec3::new(-1.5, 0.0, 0.0),
            Vec3::new(0.0, 1.5, 0.0),
            Vec3::new(0.0, -1.5, 0.0),
            Vec3::new(0.0, 0.0, 1.5),
            Vec3::new(0.0, 0.0, -1.5),
        ];
        for p in faces {
            assert!(!collider.is_colliding(p, &[unit_box()]), "{p} at exactly radius should be free");
            assert!(collider.is_colliding(p * 0.99, &[unit_box()]), "{p} just inside radius should collide");
        }
    }

    #[test]
    fn test_order_independence() {
        let boxes = obstacle_course();
        let mut reversed = boxes.clone();
        reversed.reverse();
        let mut rotated = boxes.clone();
        rotated.rotate_left(2);

        for p in sample_points() {
            let expected = is_colliding(p, &boxes, 0.5);
            assert_eq!(is_colliding(p, &reversed, 0.5), expected);
            assert_eq!(is_colliding(p, &rotated, 0.5), expected);
        }
    }

    #[test]
    fn test_resolve_never_returns_colliding_position() {
        let boxes = obstacle_course();
        let collider = Collider::default();
        let points = sample_points();

        let free: Vec<Vec3> = points
            .iter()
            .copied()
            .filter(|&p| !collider.is_colliding(p, &boxes))
            .collect();
        assert!(!free.is_empty());

        for (i, &previous) in free.iter().enumerate() {
            // Small steps in a handful of directions from each free point
            let step = points[i % points.len()].normalize_or_zero() * 1.5;
            let resolved = collider.resolve(previous + step, previous, &boxes);
            assert!(
                !collider.is_colliding(resolved, &boxes),
                "resolve({}, {previous}) returned colliding {resolved}",
                previous + step
            );
        }
    }

    #[test]
    fn test_resolve_idempotent_on_free_position() {
        let boxes = obstacle_course();
        let collider = Collider::default();
        for p in sample_points() {
            if !collider.is_colliding(p, &boxes) {
                assert_eq!(collider.resolve(p, p, &boxes), p);
            }
        }
    }

    #[test]
    fn test_resolve_prefers_slide_x_over_slide_z() {
        // Both single-axis slides are free here; X is tried first
        let wall = AABB::new(Vec3::new(2.0, -5.0, -0.5), Vec3::new(5.0, 5.0, 0.0));
        let collider = Collider::default();
        let previous = Vec3::new(0.0, 0.0, 1.0);
        let candidate = Vec3::new(3.0, 0.0, 0.2);

        assert!(!collider.is_colliding(Vec3::new(0.0, 0.0, 0.2), &[wall]));
        let resolved = collider.resolve(candidate, previous, &[wall]);
        assert_eq!(resolved, Vec3::new(3.0, 0.0, 1.0));
    }
}
