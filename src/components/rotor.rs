use bevy::prelude::*;

/// Visual rotor spinning about its local up axis.
///
/// Purely cosmetic: nothing here feeds back into the drone's motion.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Rotor {
    /// Current spin rate [deg/s], always within `[0, max_speed]`.
    current_speed: f32,
    /// Spin rate ceiling [deg/s].
    pub max_speed: f32,
}

impl Default for Rotor {
    fn default() -> Self {
        Self {
            current_speed: 1.0,
            max_speed: 1000.0,
        }
    }
}

impl Rotor {
    pub fn with_max_speed(max_speed: f32) -> Self {
        let mut rotor = Self {
            max_speed: max_speed.max(0.0),
            ..default()
        };
        rotor.set_target_speed(rotor.current_speed);
        rotor
    }

    pub fn speed(&self) -> f32 {
        self.current_speed
    }

    pub fn set_target_speed(&mut self, speed: f32) {
        self.current_speed = if speed.is_nan() {
            0.0
        } else {
            speed.clamp(0.0, self.max_speed)
        };
    }

    /// Angle [deg] swept over a frame of length `dt`.
    pub fn spin_angle(&self, dt: f32) -> f32 {
        self.current_speed * dt
    }
}
