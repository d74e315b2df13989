use bevy::prelude::*;
use bevy_rapier3d::prelude::{DefaultRapierContext, Group, RapierContext};

use crate::{components::KinematicBody, physics::RayCaster, resources::PhysicsConfig};

/// Gap kept between a body and the surface it stops against [m].
const CONTACT_SKIN: f32 = 1.0e-3;
/// Surface contacts resolved per body per tick.
const MAX_CONTACTS: usize = 3;

/// Moves every kinematic body by its velocity, stopping it on the first
/// rapier collider in its way.
pub fn integrate_bodies_system(
    time: Res<Time>,
    config: Res<PhysicsConfig>,
    contexts: Query<&RapierContext, With<DefaultRapierContext>>,
    mut bodies: Query<(&mut KinematicBody, &mut Transform)>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    let world = contexts.get_single().ok();
    for (mut body, mut transform) in bodies.iter_mut() {
        integrate_body(
            &mut body,
            &mut transform,
            config.gravity,
            config.max_velocity,
            &world,
            dt,
        );
    }
}

/// Semi-implicit Euler step with gravity, a speed cap and surface contact.
///
/// On contact the body stops just short of the surface, the velocity loses
/// its component into the surface and what is left of the step slides along it.
pub fn integrate_body<R: RayCaster + ?Sized>(
    body: &mut KinematicBody,
    transform: &mut Transform,
    gravity: Vec3,
    max_velocity: f32,
    world: &R,
    dt: f32,
) {
    let mut velocity = (body.linear_velocity + gravity * body.gravity_scale * dt)
        .clamp_length_max(max_velocity);
    let mut remaining = velocity * dt;

    for _ in 0..MAX_CONTACTS {
        let distance = remaining.length();
        if distance <= f32::EPSILON {
            break;
        }
        let direction = remaining / distance;

        let Some(hit) =
            world.cast_ray(transform.translation, direction, distance + CONTACT_SKIN, Group::ALL)
        else {
            transform.translation += remaining;
            break;
        };

        let travel = (hit.distance - CONTACT_SKIN).max(0.0);
        transform.translation += direction * travel;
        remaining -= direction * travel;
        remaining -= hit.normal * remaining.dot(hit.normal).min(0.0);
        velocity -= hit.normal * velocity.dot(hit.normal).min(0.0);
    }

    body.linear_velocity = velocity;
}
