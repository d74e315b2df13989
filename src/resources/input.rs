use bevy::prelude::*;

/// Keyboard layout for piloting the drone.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct InputBindings {
    pub forward: KeyCode,
    pub backward: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub ascend: KeyCode,
    pub descend: KeyCode,
    /// Released to swap the live camera
    pub switch_camera: KeyCode,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            forward: KeyCode::KeyW,
            backward: KeyCode::KeyS,
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
            ascend: KeyCode::Space,
            descend: KeyCode::ShiftLeft,
            switch_camera: KeyCode::KeyV,
        }
    }
}

impl InputBindings {
    /// Stick vector from the currently held movement keys. Opposing keys cancel.
    pub fn move_axis(&self, keys: &ButtonInput<KeyCode>) -> Vec2 {
        let axis = |positive: KeyCode, negative: KeyCode| {
            let mut value = 0.0;
            if keys.pressed(positive) {
                value += 1.0;
            }
            if keys.pressed(negative) {
                value -= 1.0;
            }
            value
        };
        Vec2::new(
            axis(self.right, self.left),
            axis(self.forward, self.backward),
        )
    }
}
