pub mod camera;
pub mod controller;
pub mod drone;
pub mod physics;
pub mod rotor;

pub use camera::VirtualCamera;
pub use controller::PlayerController;
pub use drone::{Drone, DroneConfig, FlightState, RotorSet};
pub use physics::KinematicBody;
pub use rotor::Rotor;
