use bevy::prelude::*;

use crate::{
    components::{FlightState, PlayerController},
    plugins::FlightCommand,
    resources::InputBindings,
};

/// Snapshot of what the keyboard last reported.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PilotInput {
    pub movement: Vec2,
    pub ascend: bool,
    pub descend: bool,
}

/// Maps held keys onto [`FlightCommand`]s, sending only what changed.
pub fn keyboard_input_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<InputBindings>,
    mut last: Local<Option<PilotInput>>,
    mut commands: EventWriter<FlightCommand>,
) {
    let current = PilotInput {
        movement: bindings.move_axis(&keyboard),
        ascend: keyboard.pressed(bindings.ascend),
        descend: keyboard.pressed(bindings.descend),
    };

    let previous = *last;
    if previous.map_or(true, |p| p.movement != current.movement) {
        commands.send(FlightCommand::Move(current.movement));
    }
    if previous.map_or(true, |p| p.ascend != current.ascend) {
        commands.send(FlightCommand::Ascend(current.ascend));
    }
    if previous.map_or(true, |p| p.descend != current.descend) {
        commands.send(FlightCommand::Descend(current.descend));
    }
    *last = Some(current);
}

/// Feeds pending flight commands into every drone with an active [`PlayerController`].
pub fn apply_flight_commands_system(
    mut events: EventReader<FlightCommand>,
    mut drones: Query<(&mut FlightState, &PlayerController)>,
) {
    for command in events.read() {
        debug!("Flight command: {:?}", command);
        for (mut state, controller) in drones.iter_mut() {
            if !controller.active {
                continue;
            }
            match *command {
                FlightCommand::Move(input) => state.set_move_input(input),
                FlightCommand::Ascend(pressed) => state.set_ascend(pressed),
                FlightCommand::Descend(pressed) => state.set_descend(pressed),
            }
        }
    }
}
