mod config;
mod state;

pub use config::DroneConfig;
pub use state::FlightState;

use bevy::prelude::*;

/// Marks the root entity of a flyable drone.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Drone;

/// Rotor entities bound to a drone, discovered among its descendants.
#[derive(Component, Debug, Default, Clone)]
pub struct RotorSet {
    pub rotors: Vec<Entity>,
    /// Set once discovery has run, even if it found nothing.
    pub bound: bool,
}

impl RotorSet {
    pub fn len(&self) -> usize {
        self.rotors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rotors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.rotors.iter().copied()
    }
}
