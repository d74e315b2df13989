use bevy::prelude::*;

/// Kinematic body moved by the integrator from its assigned linear velocity.
///
/// Scene geometry is made of `bevy_rapier3d` colliders; this body only queries
/// them and never enters the rapier simulation itself.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct KinematicBody {
    /// World-space velocity [m/s]
    pub linear_velocity: Vec3,
    /// Fraction of the configured gravity applied during integration
    pub gravity_scale: f32,
}

impl Default for KinematicBody {
    fn default() -> Self {
        Self {
            linear_velocity: Vec3::ZERO,
            gravity_scale: 1.0,
        }
    }
}
