use bevy::prelude::*;

/// A camera competing for the live view; the highest priority wins.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VirtualCamera {
    pub priority: i32,
}

impl VirtualCamera {
    pub fn new(priority: i32) -> Self {
        Self { priority }
    }
}
