use bevy::prelude::*;
use bevy_rapier3d::prelude::Group;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::physics::GroundSensor;
use crate::utils::errors::{ConfigError, Result};

/// Tuning parameters of a drone's flight controller.
///
/// Speeds and multipliers combine per fixed tick the way the controller
/// accumulates velocity; see `step_flight` for how each one is used.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DroneConfig {
    /// Velocity added per tick while the stick points forward.
    pub forward_speed: f32,
    /// Velocity removed per tick while the stick points backward.
    pub backward_speed: f32,
    /// Velocity added per tick while the stick points sideways.
    pub sideward_speed: f32,
    /// Upper bound on orientation change [deg/s].
    pub rotation_speed: f32,
    pub ascent_speed: f32,
    pub descent_speed: f32,
    pub ascent_speed_multiplier: f32,
    pub descent_speed_multiplier: f32,
    /// Scales the synthetic lift applied while moving horizontally.
    pub upward_thrust_multiplier: f32,
    /// Rate [1/s] at which velocity decays and the tilt converges.
    pub steadiness_gain: f32,
    /// Full-stick tilt [deg].
    pub tilt_angle: f32,
    /// Base rotor speed scale while airborne.
    pub max_rotor_speed: f32,
    /// Rate [1/s] at which the rotor command winds down once grounded.
    pub rotor_spin_down_rate: f32,
    /// Length of the downward ground ray [m].
    pub ground_sensor_length: f32,
    /// Collision group bits the ground ray reports, matched against each
    /// collider's `CollisionGroups` memberships.
    pub ground_layers: u32,
}

impl Default for DroneConfig {
    fn default() -> Self {
        Self {
            forward_speed: 5.0,
            backward_speed: 2.0,
            sideward_speed: 3.0,
            rotation_speed: 60.0,
            ascent_speed: 5.0,
            descent_speed: 3.0,
            ascent_speed_multiplier: 3.0,
            descent_speed_multiplier: 3.0,
            upward_thrust_multiplier: 3.0,
            steadiness_gain: 3.0,
            tilt_angle: 10.0,
            max_rotor_speed: 10.0,
            rotor_spin_down_rate: 2.0,
            ground_sensor_length: 0.1,
            ground_layers: u32::MAX,
        }
    }
}

impl DroneConfig {
    /// Loads a configuration from a YAML file, or JSON when the extension is `.json`.
    ///
    /// Missing fields take their default values. The result is validated before
    /// it is returned.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        let config: Self = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&contents)?,
            _ => serde_yaml::from_str(&contents)?,
        };
        config.validate()?;
        info!("Loaded drone configuration from {}", path.display());
        Ok(config)
    }

    /// Checks the startup preconditions of the controller.
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("forward_speed", self.forward_speed),
            ("backward_speed", self.backward_speed),
            ("sideward_speed", self.sideward_speed),
            ("rotation_speed", self.rotation_speed),
            ("ascent_speed", self.ascent_speed),
            ("descent_speed", self.descent_speed),
            ("ascent_speed_multiplier", self.ascent_speed_multiplier),
            ("descent_speed_multiplier", self.descent_speed_multiplier),
            ("upward_thrust_multiplier", self.upward_thrust_multiplier),
            ("tilt_angle", self.tilt_angle),
            ("max_rotor_speed", self.max_rotor_speed),
            ("rotor_spin_down_rate", self.rotor_spin_down_rate),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        for (name, value) in [
            ("steadiness_gain", self.steadiness_gain),
            ("ground_sensor_length", self.ground_sensor_length),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }

        if self.ground_layers == 0 {
            return Err(ConfigError::ValidationError(
                "ground_layers must select at least one collision layer".to_string(),
            ));
        }

        Ok(())
    }

    pub fn ground_sensor(&self) -> GroundSensor {
        GroundSensor::new(
            self.ground_sensor_length,
            Group::from_bits_truncate(self.ground_layers),
        )
    }
}
