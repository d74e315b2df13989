use bevy::prelude::*;
use bevy_rapier3d::prelude::{DefaultRapierContext, RapierContext};

use crate::{
    components::{Drone, DroneConfig, FlightState, KinematicBody, Rotor, RotorSet, VirtualCamera},
    physics::RayCaster,
    resources::ActiveCamera,
    systems::flight::active_heading,
    utils::math::{clamp01, heading_yaw, horizontal, rotate_towards, tilt_rotation, yaw_of},
};

/// What a fixed tick hands back to the physics body and the rotors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightOutput {
    /// Linear velocity to assign to the rigid body.
    pub velocity: Vec3,
    /// Speed command for every rotor of the drone.
    pub rotor_speed: f32,
    pub grounded: bool,
}

/// Fixed-tick flight update for every drone.
///
/// Reads the live camera heading once, advances each drone's [`FlightState`],
/// assigns the resulting velocity to its body and pushes the rotor command to
/// all bound rotors.
pub fn flight_control_system(
    time: Res<Time>,
    active_camera: Res<ActiveCamera>,
    contexts: Query<&RapierContext, With<DefaultRapierContext>>,
    cameras: Query<&GlobalTransform, With<VirtualCamera>>,
    mut drones: Query<
        (
            &DroneConfig,
            &mut FlightState,
            &mut Transform,
            &mut KinematicBody,
            &RotorSet,
        ),
        With<Drone>,
    >,
    mut rotors: Query<&mut Rotor>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    let heading = active_heading(&active_camera, &cameras);
    let ground = contexts.get_single().ok();

    for (config, mut state, mut transform, mut body, rotor_set) in drones.iter_mut() {
        let output = step_flight(
            &mut state,
            config,
            &mut transform,
            heading,
            &ground,
            dt,
        );
        body.linear_velocity = output.velocity;

        for entity in rotor_set.iter() {
            if let Ok(mut rotor) = rotors.get_mut(entity) {
                rotor.set_target_speed(output.rotor_speed);
            }
        }

        trace!(
            "velocity: {:?}, grounded: {}, rotor_speed: {}",
            output.velocity,
            output.grounded,
            output.rotor_speed
        );
    }
}

/// Advances one drone by a fixed tick of length `dt`.
///
/// Velocity decays toward zero, then stick and button thrust are summed in
/// along the body axes as they were at the start of the tick. While airborne
/// the tilt target is rebuilt from the stick and the camera heading (falling
/// back to the body's own yaw without one) and the smoothed tilt slerps
/// toward it. The body then turns toward the smoothed tilt at a bounded rate.
/// The rotor command is derived last, from the grounded state after rotation.
///
/// # Arguments
/// * `state` - Flight state to advance.
/// * `config` - Controller tuning.
/// * `body` - Body pose; only its rotation is written.
/// * `heading` - Forward vector of the live camera, if any.
/// * `ground` - Collision geometry queried by the ground sensor.
/// * `dt` - Fixed tick length [s].
pub fn step_flight<R: RayCaster + ?Sized>(
    state: &mut FlightState,
    config: &DroneConfig,
    body: &mut Transform,
    heading: Option<Vec3>,
    ground: &R,
    dt: f32,
) -> FlightOutput {
    let forward = *body.forward();
    let right = *body.right();
    let up = *body.up();
    let sensor = config.ground_sensor();

    state.velocity = state
        .velocity
        .lerp(Vec3::ZERO, clamp01(config.steadiness_gain * dt));

    let horizontal_input = state.horizontal_input();
    let vertical_input = state.vertical_input();

    if vertical_input != 0.0 {
        apply_upward_thrust(state, config, up, dt);
        let speed = if vertical_input > 0.0 {
            config.forward_speed
        } else {
            -config.backward_speed
        };
        state.velocity += forward * speed;
    }

    if horizontal_input != 0.0 {
        apply_upward_thrust(state, config, up, dt);
        let speed = if horizontal_input > 0.0 {
            config.sideward_speed
        } else {
            -config.sideward_speed
        };
        state.velocity += right * speed;
    }

    // Ascend wins when both buttons are held
    if state.ascend_pressed {
        state.velocity += up * config.ascent_speed * config.ascent_speed_multiplier * dt;
    } else if state.descend_pressed {
        state.velocity -= up * config.descent_speed * config.descent_speed_multiplier * dt;
    }

    if !sensor.is_grounded(ground, body.translation, up) {
        let yaw = heading
            .and_then(horizontal)
            .map(heading_yaw)
            .unwrap_or_else(|| yaw_of(body.rotation));
        let target = tilt_rotation(
            yaw,
            vertical_input * config.tilt_angle,
            -horizontal_input * config.tilt_angle,
        );
        state.tilt = state
            .tilt
            .slerp(target, clamp01(config.steadiness_gain * dt))
            .normalize();
    }

    body.rotation = rotate_towards(body.rotation, state.tilt, config.rotation_speed * dt);

    let grounded = sensor.is_grounded(ground, body.translation, *body.up());
    state.grounded = grounded;
    state.rotor_command = rotor_speed(state, config, grounded, dt);

    FlightOutput {
        velocity: state.velocity,
        rotor_speed: state.rotor_command,
        grounded,
    }
}

/// Synthetic lift that keeps horizontal motion from sinking the drone.
/// Holding descend suppresses it.
fn apply_upward_thrust(state: &mut FlightState, config: &DroneConfig, up: Vec3, dt: f32) {
    if state.descend_pressed {
        return;
    }
    state.velocity += up * config.ascent_speed * config.upward_thrust_multiplier * dt;
}

/// Rotor command for this tick. On the ground the previous command winds down
/// toward zero; in the air it is a fixed base plus the stick deflection.
pub fn rotor_speed(state: &FlightState, config: &DroneConfig, grounded: bool, dt: f32) -> f32 {
    if grounded {
        state.rotor_command * (1.0 - clamp01(config.rotor_spin_down_rate * dt))
    } else {
        config.ascent_speed_multiplier * config.max_rotor_speed
            + (state.vertical_input() + state.horizontal_input() + 1.0).abs()
    }
}
