mod controller;
mod heading;

pub use controller::{flight_control_system, rotor_speed, step_flight, FlightOutput};
pub use heading::{follow_heading, heading_follow_system};

use bevy::prelude::*;

use crate::{components::VirtualCamera, resources::ActiveCamera};

/// Forward vector of the live camera, if one is set and still exists.
pub(crate) fn active_heading(
    active_camera: &ActiveCamera,
    cameras: &Query<&GlobalTransform, With<VirtualCamera>>,
) -> Option<Vec3> {
    let entity = active_camera.0?;
    cameras.get(entity).ok().map(|transform| *transform.forward())
}
