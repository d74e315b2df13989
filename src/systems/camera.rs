use bevy::prelude::*;

use crate::{
    components::VirtualCamera,
    resources::{ActiveCamera, CameraSwitcher, InputBindings},
};

/// Applies the first switch so the pair starts out of balance.
pub fn init_camera_switcher_system(
    mut switcher: ResMut<CameraSwitcher>,
    mut cameras: Query<&mut VirtualCamera>,
) {
    apply_switch(&mut switcher, &mut cameras);
}

/// Swaps the live camera when the switch key is released.
pub fn camera_switch_input_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<InputBindings>,
    mut switcher: ResMut<CameraSwitcher>,
    mut cameras: Query<&mut VirtualCamera>,
) {
    if keyboard.just_released(bindings.switch_camera) {
        apply_switch(&mut switcher, &mut cameras);
    }
}

fn apply_switch(switcher: &mut CameraSwitcher, cameras: &mut Query<&mut VirtualCamera>) {
    let deltas = switcher.toggle();
    for (entity, delta) in switcher.pair.into_iter().zip(deltas) {
        match cameras.get_mut(entity) {
            Ok(mut camera) => camera.priority += delta,
            Err(_) => warn!("Camera switcher references missing camera {}", entity),
        }
    }
}

/// Marks the highest-priority virtual camera as live. Ties go to the camera
/// met first.
pub fn sync_active_camera_system(
    mut active: ResMut<ActiveCamera>,
    mut cameras: Query<(Entity, &VirtualCamera, Option<&mut Camera>)>,
) {
    let live = cameras
        .iter()
        .fold(None::<(Entity, i32)>, |best, (entity, camera, _)| match best {
            Some((_, priority)) if priority >= camera.priority => best,
            _ => Some((entity, camera.priority)),
        })
        .map(|(entity, _)| entity);

    if active.0 != live {
        info!("Live camera changed: {:?} -> {:?}", active.0, live);
        active.0 = live;
    }

    for (entity, _, camera) in cameras.iter_mut() {
        if let Some(mut camera) = camera {
            let is_live = Some(entity) == live;
            if camera.is_active != is_live {
                camera.is_active = is_live;
            }
        }
    }
}
