use bevy::prelude::*;

/// Pilot input delivered to every drone with an active `PlayerController`.
///
/// Any input layer may send these; they are applied before the next fixed tick.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum FlightCommand {
    /// Stick sample, each axis in `[-1, 1]`.
    Move(Vec2),
    Ascend(bool),
    Descend(bool),
}
