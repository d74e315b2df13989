use bevy::prelude::*;
use bevy_rapier3d::prelude::{NoUserData, RapierPhysicsPlugin};

use crate::{
    plugins::{staging::configure_sets, FlightSet},
    resources::PhysicsConfig,
    systems::integrate_bodies_system,
};

/// Fixed timestep, the rapier collision world and kinematic body integration.
///
/// Scene geometry is plain `bevy_rapier3d` colliders; an app that already
/// added `RapierPhysicsPlugin` keeps its own setup.
#[derive(Default)]
pub struct PhysicsPlugin {
    config: PhysicsConfig,
}

impl PhysicsPlugin {
    pub fn with_config(config: PhysicsConfig) -> Self {
        Self { config }
    }
}

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        configure_sets(app);

        let config = match self.config.validate() {
            Ok(()) => self.config.clone(),
            Err(err) => {
                error!("Invalid physics configuration, using defaults: {}", err);
                PhysicsConfig::default()
            }
        };

        if !app.is_plugin_added::<RapierPhysicsPlugin<NoUserData>>() {
            app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default());
        }

        app.insert_resource(Time::<Fixed>::from_seconds(config.timestep))
            .insert_resource(config)
            .add_systems(
                FixedUpdate,
                integrate_bodies_system.in_set(FlightSet::Integrate),
            );
    }
}
