use bevy::prelude::*;

/// Mutable flight state of a drone.
///
/// The setters may be called at any point in a frame; `velocity`, `tilt` and
/// `rotor_command` are only written by the fixed-tick flight update.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct FlightState {
    /// Last stick sample; x is right (+) / left (-), y is forward (+) / backward (-).
    pub input: Vec2,
    pub ascend_pressed: bool,
    pub descend_pressed: bool,
    /// Smoothed world-space linear velocity [m/s].
    pub velocity: Vec3,
    /// Smoothed target orientation the body is rotated toward.
    pub tilt: Quat,
    /// Result of the most recent ground test.
    pub grounded: bool,
    /// Rotor speed most recently pushed to the rotors.
    pub rotor_command: f32,
}

impl Default for FlightState {
    fn default() -> Self {
        Self {
            input: Vec2::ZERO,
            ascend_pressed: false,
            descend_pressed: false,
            velocity: Vec3::ZERO,
            tilt: Quat::IDENTITY,
            grounded: false,
            rotor_command: 0.0,
        }
    }
}

impl FlightState {
    /// Stores a stick sample, clamped to `[-1, 1]` per axis. Non-finite axes read as 0.
    pub fn set_move_input(&mut self, input: Vec2) {
        let sanitize = |v: f32| if v.is_finite() { v.clamp(-1.0, 1.0) } else { 0.0 };
        self.input = Vec2::new(sanitize(input.x), sanitize(input.y));
    }

    pub fn set_ascend(&mut self, pressed: bool) {
        self.ascend_pressed = pressed;
    }

    pub fn set_descend(&mut self, pressed: bool) {
        self.descend_pressed = pressed;
    }

    #[inline]
    pub fn horizontal_input(&self) -> f32 {
        self.input.x
    }

    #[inline]
    pub fn vertical_input(&self) -> f32 {
        self.input.y
    }
}
