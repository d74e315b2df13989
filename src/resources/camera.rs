use bevy::prelude::*;

/// Camera whose forward vector steers the drone's heading.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ActiveCamera(pub Option<Entity>);

/// Swaps priority between two virtual cameras.
///
/// Each toggle boosts one camera and lowers the other by `boost`, alternating
/// which one is ahead.
#[derive(Resource, Debug, Clone)]
pub struct CameraSwitcher {
    pub pair: [Entity; 2],
    pub boost: i32,
    toggled: bool,
}

impl CameraSwitcher {
    pub fn new(first: Entity, second: Entity) -> Self {
        Self {
            pair: [first, second],
            boost: 5,
            toggled: false,
        }
    }

    pub fn with_boost(mut self, boost: i32) -> Self {
        self.boost = boost;
        self
    }

    pub fn toggled(&self) -> bool {
        self.toggled
    }

    /// Flips the switch and returns the priority change for each camera in `pair`.
    pub fn toggle(&mut self) -> [i32; 2] {
        self.toggled = !self.toggled;
        if self.toggled {
            [self.boost, -self.boost]
        } else {
            [-self.boost, self.boost]
        }
    }
}
