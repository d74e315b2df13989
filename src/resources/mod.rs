pub mod camera;
pub mod config;
pub mod input;

pub use camera::{ActiveCamera, CameraSwitcher};
pub use config::PhysicsConfig;
pub use input::InputBindings;
