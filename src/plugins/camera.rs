use bevy::prelude::*;

use crate::{
    plugins::{staging::configure_sets, SetupSet},
    resources::{ActiveCamera, CameraSwitcher, InputBindings},
    systems::{camera_switch_input_system, init_camera_switcher_system, sync_active_camera_system},
};

/// Virtual camera priorities, the optional two-camera switcher and the live
/// camera selection the flight controller steers by.
///
/// Insert a [`CameraSwitcher`] resource during startup to enable switching.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        configure_sets(app);

        app.init_resource::<ActiveCamera>()
            .init_resource::<InputBindings>()
            .add_systems(
                PostStartup,
                (
                    init_camera_switcher_system.run_if(resource_exists::<CameraSwitcher>),
                    sync_active_camera_system,
                )
                    .chain()
                    .in_set(SetupSet::SelectCamera),
            )
            .add_systems(
                Update,
                (
                    camera_switch_input_system
                        .run_if(resource_exists::<CameraSwitcher>)
                        .run_if(resource_exists::<ButtonInput<KeyCode>>),
                    sync_active_camera_system,
                )
                    .chain(),
            );
    }
}
