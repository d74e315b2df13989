mod camera;
mod drone;
mod events;
mod input;
mod physics;
mod staging;

pub use camera::CameraPlugin;
pub use drone::{drone_bundle, spawn_drone, DronePlugin};
pub use events::FlightCommand;
pub use input::KeyboardPilotPlugin;
pub use physics::PhysicsPlugin;
pub use staging::{FlightSet, InputSet, SetupSet, StartupSequencePlugin, StartupStage};

use bevy::app::PluginGroupBuilder;
use bevy::prelude::*;

/// Every plugin needed to fly a drone, minus rendering and windowing.
pub struct DroneSimPlugins;

impl PluginGroup for DroneSimPlugins {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>()
            .add(StartupSequencePlugin)
            .add(PhysicsPlugin::default())
            .add(DronePlugin)
            .add(CameraPlugin)
            .add(KeyboardPilotPlugin)
    }
}
