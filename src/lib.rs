//! Flyable quadcopter drone for Bevy.
//!
//! A fixed-tick flight controller turns stick and button input into a
//! smoothed velocity and a banked orientation, a per-frame pass spins the
//! rotor meshes and turns the drone toward the live camera's heading, and a
//! small kinematic integrator moves bodies without letting them sink through
//! the ground.

pub mod components;
pub mod physics;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;
