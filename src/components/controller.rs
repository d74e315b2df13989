use bevy::prelude::*;

/// Routes pilot input to the drone carrying it. Inactive controllers ignore
/// incoming flight commands.
#[derive(Component, Debug, Clone, Copy)]
pub struct PlayerController {
    pub active: bool,
}

impl Default for PlayerController {
    fn default() -> Self {
        Self { active: true }
    }
}

impl PlayerController {
    pub fn disabled() -> Self {
        Self { active: false }
    }
}
