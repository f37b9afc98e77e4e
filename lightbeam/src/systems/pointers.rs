use glam::{Vec3, Vec4};
use hecs::{Entity, World};

use crate::components::{
    LaserPointer, LaserSegment, LocalTransform, PointerConfig, PointerState, ReticlePlacement,
};

/// Pointer visuals system
/// Recomputes the reticle placement and laser segment for every pointer and
/// moves the pointer's reticle entity to match. Runs every tick, whether or
/// not the pointer is visible.
pub fn pointer_visuals_system(world: &mut World, camera_position: Vec3) {
    let mut reticle_updates: Vec<(Entity, ReticlePlacement)> = Vec::new();

    for (_, (pointer, local_transform)) in
        world.query_mut::<(&mut LaserPointer, &LocalTransform)>()
    {
        pointer.alpha_value = 1.0;
        pointer.reticle_placement = compute_reticle_placement(
            &pointer.state,
            local_transform,
            camera_position,
            &pointer.config,
        );
        pointer.segment = compute_laser_segment(
            local_transform,
            &pointer.state,
            &pointer.config,
            pointer.alpha_value,
        );

        if let Some(reticle) = pointer.reticle {
            reticle_updates.push((reticle, pointer.reticle_placement));
        }
    }

    for (entity, placement) in reticle_updates {
        match world.get::<&mut LocalTransform>(entity) {
            Ok(mut local_transform) => {
                local_transform.translation = placement.position;
                local_transform.scale = Vec3::splat(placement.scale);
            }
            Err(_) => {
                println!(
                    "[LIGHTBEAM_POINTERS] Pointer references a reticle without a transform: {entity:?}"
                );
            }
        }
    }
}

/// Work out where the reticle goes and how big it should be.
///
/// While the pointer intersects something, the reticle sits on the
/// intersection point, pulled back along the ray so it never ends up further
/// than `max_reticle_distance` from the ray origin. Otherwise it floats at
/// `max_reticle_distance` straight ahead of the pointer. Its scale grows
/// linearly with distance from the camera so it subtends a constant angle.
pub fn compute_reticle_placement(
    state: &PointerState,
    pointer_transform: &LocalTransform,
    camera_position: Vec3,
    config: &PointerConfig,
) -> ReticlePlacement {
    let position = if state.is_intersecting {
        let difference = state.intersection_point - state.intersection_ray.origin;
        let clamped_difference = difference.clamp_length_max(config.max_reticle_distance);
        state.intersection_ray.origin + clamped_difference
    } else {
        pointer_transform.translation + pointer_transform.forward() * config.max_reticle_distance
    };

    ReticlePlacement {
        position,
        scale: config.reticle_size * position.distance(camera_position),
    }
}

/// Work out the laser line and its color gradient.
///
/// The line runs from the pointer origin to the intersection point while one
/// exists strictly closer than `max_laser_distance`; an intersection at or
/// beyond that distance falls back to the extended-forward endpoint.
pub fn compute_laser_segment(
    pointer_transform: &LocalTransform,
    state: &PointerState,
    config: &PointerConfig,
    alpha: f32,
) -> LaserSegment {
    let start = pointer_transform.translation;
    let end = if state.is_intersecting
        && start.distance(state.intersection_point) < config.max_laser_distance
    {
        state.intersection_point
    } else {
        start + pointer_transform.forward() * config.max_laser_distance
    };

    LaserSegment {
        start,
        end,
        near_color: Vec4::ZERO.lerp(config.laser_color, alpha),
        far_color: Vec4::ZERO.lerp(config.laser_color, 0.5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use glam::{vec3, vec4};

    use crate::Ray;

    fn intersecting_state(origin: Vec3, point: Vec3) -> PointerState {
        PointerState {
            is_intersecting: true,
            intersection_point: point,
            intersection_ray: Ray::new(origin, (point - origin).normalize()),
        }
    }

    fn pointer_at(translation: Vec3) -> LocalTransform {
        LocalTransform {
            translation,
            ..Default::default()
        }
    }

    #[test]
    pub fn test_reticle_sits_on_intersection_within_range() {
        let origin = vec3(0.2, 1.4, 0.0);
        let point = vec3(0.2, 1.4, -1.0);
        let state = intersecting_state(origin, point);

        let placement = compute_reticle_placement(
            &state,
            &pointer_at(origin),
            vec3(0.0, 1.6, 0.0),
            &PointerConfig::default(),
        );

        assert_relative_eq!(placement.position, point);
    }

    #[test]
    pub fn test_reticle_clamps_to_max_distance() {
        let origin = vec3(0.0, 1.0, 0.0);
        let point = vec3(3.0, 1.0, -4.0);
        let state = intersecting_state(origin, point);
        let config = PointerConfig::default();

        let placement =
            compute_reticle_placement(&state, &pointer_at(origin), Vec3::ZERO, &config);

        // Clamped to max_reticle_distance along the same direction.
        assert_relative_eq!(
            placement.position.distance(origin),
            config.max_reticle_distance
        );
        assert_relative_eq!(placement.position, vec3(1.5, 1.0, -2.0));
    }

    #[test]
    pub fn test_reticle_floats_ahead_when_not_intersecting() {
        let pointer_transform = pointer_at(vec3(0.2, 1.4, 0.0));
        let config = PointerConfig::default();

        // Camera position must not influence the reticle's position.
        for camera_position in [Vec3::ZERO, vec3(5.0, 5.0, 5.0)] {
            let placement = compute_reticle_placement(
                &PointerState::default(),
                &pointer_transform,
                camera_position,
                &config,
            );
            assert_relative_eq!(placement.position, vec3(0.2, 1.4, -2.5));
        }
    }

    #[test]
    pub fn test_reticle_scale_is_linear_in_camera_distance() {
        let state = intersecting_state(Vec3::ZERO, vec3(0.0, 0.0, -2.0));
        let config = PointerConfig::default();

        let near = compute_reticle_placement(
            &state,
            &pointer_at(Vec3::ZERO),
            vec3(0.0, 0.0, -1.0),
            &config,
        );
        let far = compute_reticle_placement(
            &state,
            &pointer_at(Vec3::ZERO),
            vec3(0.0, 0.0, 2.0),
            &config,
        );

        assert_relative_eq!(near.scale, config.reticle_size * 1.0);
        assert_relative_eq!(far.scale, config.reticle_size * 4.0);
        assert!(far.scale > near.scale);
    }

    #[test]
    pub fn test_laser_ends_on_close_intersection() {
        let origin = vec3(0.0, 1.0, 0.0);
        let point = vec3(0.0, 1.0, -0.5);
        let state = intersecting_state(origin, point);

        let segment = compute_laser_segment(
            &pointer_at(origin),
            &state,
            &PointerConfig::default(),
            1.0,
        );

        assert_relative_eq!(segment.start, origin);
        assert_relative_eq!(segment.end, point);
    }

    #[test]
    pub fn test_laser_falls_back_at_exact_max_distance() {
        let origin = Vec3::ZERO;
        // Off to the side, exactly max_laser_distance away.
        let point = vec3(0.75, 0.0, 0.0);
        let state = intersecting_state(origin, point);
        let config = PointerConfig::default();
        assert_eq!(origin.distance(point), config.max_laser_distance);

        let segment = compute_laser_segment(&pointer_at(origin), &state, &config, 1.0);

        assert_relative_eq!(segment.end, vec3(0.0, 0.0, -0.75));
    }

    #[test]
    pub fn test_laser_clamps_beyond_max_distance() {
        let origin = Vec3::ZERO;
        let state = intersecting_state(origin, vec3(0.0, 0.0, -5.0));

        let segment = compute_laser_segment(
            &pointer_at(origin),
            &state,
            &PointerConfig::default(),
            1.0,
        );

        assert_relative_eq!(segment.end, vec3(0.0, 0.0, -0.75));
    }

    #[test]
    pub fn test_laser_colors() {
        let config = PointerConfig {
            laser_color: vec4(1.0, 0.5, 0.0, 0.25),
            ..Default::default()
        };

        let segment = compute_laser_segment(
            &LocalTransform::default(),
            &PointerState::default(),
            &config,
            1.0,
        );

        assert_relative_eq!(segment.near_color, config.laser_color);
        assert_relative_eq!(segment.far_color, vec4(0.5, 0.25, 0.0, 0.125));
    }

    #[test]
    pub fn test_pointer_visuals_system() {
        let mut world = World::default();
        let camera_position = vec3(0.0, 1.6, 0.0);

        let reticle = world.spawn((LocalTransform::default(),));
        let pointer_transform = pointer_at(vec3(0.2, 1.4, 0.0));
        let pointer = world.spawn((
            LaserPointer::default().with_reticle(reticle),
            pointer_transform,
        ));

        pointer_visuals_system(&mut world, camera_position);

        // Nothing intersecting: the reticle floats straight ahead.
        let expected_position = vec3(0.2, 1.4, -2.5);
        {
            let reticle_transform = world.get::<&LocalTransform>(reticle).unwrap();
            assert_relative_eq!(reticle_transform.translation, expected_position);

            let expected_scale = 0.01 * expected_position.distance(camera_position);
            assert_relative_eq!(reticle_transform.scale, Vec3::splat(expected_scale));
        }

        let laser_pointer = world.get::<&LaserPointer>(pointer).unwrap();
        assert_relative_eq!(laser_pointer.segment.start, vec3(0.2, 1.4, 0.0));
        assert_relative_eq!(laser_pointer.segment.end, vec3(0.2, 1.4, -0.75));
        assert_relative_eq!(laser_pointer.reticle_placement.position, expected_position);
    }
}
