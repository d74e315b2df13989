pub mod ground;
pub mod rapier;
pub mod traits;


pub use ground::GroundSensor;
pub use traits::{RayCaster, RayHit};
