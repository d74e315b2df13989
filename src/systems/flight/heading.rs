use bevy::prelude::*;
use bevy_rapier3d::prelude::{DefaultRapierContext, RapierContext};

use crate::{
    components::{Drone, DroneConfig, VirtualCamera},
    resources::ActiveCamera,
    systems::flight::active_heading,
    utils::math::{heading_yaw, horizontal, rotate_towards},
};

/// Turns airborne drones toward the live camera's heading once per rendered
/// frame. Grounded drones keep their heading.
pub fn heading_follow_system(
    time: Res<Time>,
    active_camera: Res<ActiveCamera>,
    contexts: Query<&RapierContext, With<DefaultRapierContext>>,
    cameras: Query<&GlobalTransform, With<VirtualCamera>>,
    mut drones: Query<(&DroneConfig, &mut Transform), With<Drone>>,
) {
    let Some(heading) = active_heading(&active_camera, &cameras) else {
        return;
    };
    let dt = time.delta_secs();
    let ground = contexts.get_single().ok();

    for (config, mut transform) in drones.iter_mut() {
        let grounded =
            config
                .ground_sensor()
                .is_grounded(&ground, transform.translation, *transform.up());
        if grounded {
            continue;
        }
        follow_heading(&mut transform, heading, config.rotation_speed * dt);
    }
}

/// Rotates `body` toward a level orientation facing `heading` by at most
/// `max_degrees`. Returns false when `heading` has no horizontal component.
pub fn follow_heading(body: &mut Transform, heading: Vec3, max_degrees: f32) -> bool {
    let Some(flat) = horizontal(heading) else {
        return false;
    };
    let target = Quat::from_rotation_y(heading_yaw(flat));
    body.rotation = rotate_towards(body.rotation, target, max_degrees);
    true
}
