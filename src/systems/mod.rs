mod camera;
pub mod flight;
mod input;
pub mod physics;
mod rotor;

pub use camera::{camera_switch_input_system, init_camera_switcher_system, sync_active_camera_system};
pub use flight::{
    flight_control_system, follow_heading, heading_follow_system, rotor_speed, step_flight,
    FlightOutput,
};
pub use input::{apply_flight_commands_system, keyboard_input_system, PilotInput};
pub use physics::{integrate_bodies_system, integrate_body};
pub use rotor::{bind_rotors_system, spin_rotors_system};
