use bevy::{input::InputSystem, prelude::*};

use crate::{
    plugins::{staging::configure_sets, InputSet},
    resources::InputBindings,
    systems::keyboard_input_system,
};

/// Keyboard piloting through [`InputBindings`].
pub struct KeyboardPilotPlugin;

impl Plugin for KeyboardPilotPlugin {
    fn build(&self, app: &mut App) {
        configure_sets(app);

        app.init_resource::<InputBindings>()
            .configure_sets(PreUpdate, InputSet::Read.after(InputSystem))
            .add_systems(
                PreUpdate,
                keyboard_input_system
                    .run_if(resource_exists::<ButtonInput<KeyCode>>)
                    .in_set(InputSet::Read),
            );
    }
}
