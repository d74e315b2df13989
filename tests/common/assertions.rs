use approx::assert_relative_eq;
use bevy::prelude::*;
use drone::components::FlightState;

/// Assert that a flight state holds only finite, well-formed values
#[track_caller]
pub fn assert_flight_state_valid(state: &FlightState) {
    assert!(state.velocity.is_finite(), "Velocity is not finite");
    assert!(state.tilt.is_finite(), "Tilt is not finite");
    assert!(state.tilt.is_normalized(), "Tilt is not normalized");
    assert!(
        state.rotor_command.is_finite() && state.rotor_command >= 0.0,
        "Invalid rotor command {}",
        state.rotor_command
    );
    assert!(
        (-1.0..=1.0).contains(&state.input.x) && (-1.0..=1.0).contains(&state.input.y),
        "Input out of range"
    );
}

/// Assert that two vectors are approximately equal
#[track_caller]
pub fn assert_vec3_eq(actual: Vec3, expected: Vec3, epsilon: f32) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}

/// Assert that two orientations differ by less than `epsilon_deg` degrees
#[track_caller]
pub fn assert_rotation_eq(actual: Quat, expected: Quat, epsilon_deg: f32) {
    let angle = actual.angle_between(expected).to_degrees();
    assert!(
        angle < epsilon_deg,
        "Rotation difference {} exceeds epsilon {}",
        angle,
        epsilon_deg
    );
}
