use bevy::prelude::*;
use drone::resources::PhysicsConfig;

pub const TIMESTEP: f64 = 1.0 / 50.0;

/// Creates a test physics configuration
pub fn create_test_physics_config() -> PhysicsConfig {
    PhysicsConfig {
        timestep: TIMESTEP,
        gravity: Vec3::new(0.0, -9.81, 0.0),
        max_velocity: 100.0,
    }
}

/// Physics without gravity, so the controller's velocity is the body's velocity
pub fn create_weightless_physics_config() -> PhysicsConfig {
    PhysicsConfig {
        gravity: Vec3::ZERO,
        ..create_test_physics_config()
    }
}
