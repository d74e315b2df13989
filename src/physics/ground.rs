use bevy_rapier3d::prelude::Group;
use glam::Vec3;

use crate::physics::RayCaster;

/// Short downward ray used to decide whether a body is resting on something.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundSensor {
    /// Ray length [m]
    pub length: f32,
    /// Collision groups counted as ground
    pub layers: Group,
}

impl Default for GroundSensor {
    fn default() -> Self {
        Self {
            length: 0.1,
            layers: Group::ALL,
        }
    }
}

impl GroundSensor {
    pub fn new(length: f32, layers: Group) -> Self {
        Self { length, layers }
    }

    /// Cast from `origin` along `-up`. A miss means airborne.
    pub fn is_grounded<R: RayCaster + ?Sized>(&self, caster: &R, origin: Vec3, up: Vec3) -> bool {
        let Some(down) = (-up).try_normalize() else {
            return false;
        };
        caster
            .cast_ray(origin, down, self.length, self.layers)
            .is_some()
    }
}
