use bevy::hierarchy::HierarchyQueryExt;
use bevy::prelude::*;

use crate::components::{Drone, Rotor, RotorSet};

/// Binds newly spawned drones to the rotors found among their descendants.
///
/// Runs once per drone; rotors attached after discovery are not picked up.
pub fn bind_rotors_system(
    mut drones: Query<(Entity, &mut RotorSet, Option<&Name>), (With<Drone>, Added<RotorSet>)>,
    children: Query<&Children>,
    rotors: Query<(), With<Rotor>>,
) {
    for (entity, mut rotor_set, name) in drones.iter_mut() {
        if rotor_set.bound {
            continue;
        }

        rotor_set.rotors = children
            .iter_descendants(entity)
            .filter(|child| rotors.contains(*child))
            .collect();
        rotor_set.bound = true;

        let label = name.map_or_else(|| format!("{entity}"), |n| n.to_string());
        if rotor_set.is_empty() {
            warn!("Drone {} has no rotors attached", label);
        } else {
            info!("Drone {} bound {} rotors", label, rotor_set.len());
        }
    }
}

/// Spins every rotor about its local up axis by its current speed.
pub fn spin_rotors_system(time: Res<Time>, mut rotors: Query<(&Rotor, &mut Transform)>) {
    let dt = time.delta_secs();
    for (rotor, mut transform) in rotors.iter_mut() {
        transform.rotate_local_y(rotor.spin_angle(dt).to_radians());
    }
}
