use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::errors::{ConfigError, Result};

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Fixed tick length [s]
    pub timestep: f64,
    /// Gravitational acceleration [m/s²], world frame
    pub gravity: Vec3,
    /// Speed cap applied by the integrator [m/s]
    pub max_velocity: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: 1.0 / 50.0,
            gravity: Vec3::new(0.0, -9.81, 0.0),
            max_velocity: 100.0,
        }
    }
}

impl PhysicsConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.timestep.is_finite() || self.timestep <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "timestep must be positive, got {}",
                self.timestep
            )));
        }
        if !self.gravity.is_finite() {
            return Err(ConfigError::ValidationError(
                "gravity must be finite".to_string(),
            ));
        }
        if !self.max_velocity.is_finite() || self.max_velocity <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "max_velocity must be positive, got {}",
                self.max_velocity
            )));
        }
        Ok(())
    }
}
