use bevy::{ecs::system::EntityCommands, prelude::*};

use crate::{
    components::{Drone, DroneConfig, FlightState, KinematicBody, PlayerController, RotorSet},
    plugins::{staging::configure_sets, FlightCommand, FlightSet, InputSet, SetupSet},
    resources::ActiveCamera,
    systems::{
        apply_flight_commands_system, bind_rotors_system, flight_control_system,
        heading_follow_system, spin_rotors_system,
    },
    utils::errors::ConfigError,
};

/// Flight controller, rotor visuals and the command input boundary.
pub struct DronePlugin;

impl Plugin for DronePlugin {
    fn build(&self, app: &mut App) {
        configure_sets(app);

        app.add_event::<FlightCommand>()
            .init_resource::<ActiveCamera>()
            .add_systems(
                PostStartup,
                (
                    bind_rotors_system.in_set(SetupSet::BindRotors),
                    check_flight_preconditions.in_set(SetupSet::Validate),
                ),
            )
            .add_systems(
                PreUpdate,
                (
                    bind_rotors_system,
                    apply_flight_commands_system.in_set(InputSet::Apply),
                ),
            )
            .add_systems(FixedUpdate, flight_control_system.in_set(FlightSet::Control))
            .add_systems(Update, (heading_follow_system, spin_rotors_system));
    }
}

/// Components of a drone root entity, built from a validated configuration.
///
/// The smoothed tilt starts at the spawn orientation so a freshly placed
/// drone holds its pose.
pub fn drone_bundle(config: DroneConfig, transform: Transform) -> Result<impl Bundle, ConfigError> {
    config.validate()?;

    let state = FlightState {
        tilt: transform.rotation,
        ..default()
    };
    Ok((
        Drone,
        config,
        state,
        KinematicBody::default(),
        RotorSet::default(),
        PlayerController::default(),
        transform,
        Visibility::default(),
        Name::new("Drone"),
    ))
}

/// Spawns a drone root entity. Rotors are attached by the caller as
/// descendants carrying a `Rotor` and are bound after startup.
pub fn spawn_drone<'a>(
    commands: &'a mut Commands,
    config: DroneConfig,
    transform: Transform,
) -> Result<EntityCommands<'a>, ConfigError> {
    let bundle = drone_bundle(config, transform)?;
    let entity = commands.spawn(bundle);
    info!("Spawned drone {}", entity.id());
    Ok(entity)
}

fn check_flight_preconditions(
    active_camera: Res<ActiveCamera>,
    drones: Query<(Entity, &DroneConfig, &RotorSet), With<Drone>>,
) {
    if drones.is_empty() {
        return;
    }

    if active_camera.0.is_none() {
        error!("No live camera; drones will tilt and steer by their own heading");
    }

    for (entity, config, rotors) in drones.iter() {
        if let Err(err) = config.validate() {
            error!("Drone {} failed validation: {}", entity, err);
        }
        if rotors.is_empty() {
            warn!("Drone {} will fly without visible rotors", entity);
        }
    }
}
