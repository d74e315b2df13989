use bevy::prelude::*;

/// Startup ordering: world geometry, then drones, then cameras.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum StartupStage {
    BuildWorld,
    BuildDrones,
    BuildCameras,
}

/// Post-startup ordering: bind rotors and pick the live camera before the
/// controller's preconditions are checked.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum SetupSet {
    BindRotors,
    SelectCamera,
    Validate,
}

/// Fixed-tick ordering: run the flight controller, then integrate bodies.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    Control,
    Integrate,
}

/// Input ordering within `PreUpdate`.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum InputSet {
    Read,
    Apply,
}

pub struct StartupSequencePlugin;

impl Plugin for StartupSequencePlugin {
    fn build(&self, app: &mut App) {
        configure_sets(app);
    }
}

/// Shared by every plugin of the crate, so each works on its own.
pub(crate) fn configure_sets(app: &mut App) {
    app.configure_sets(
        Startup,
        (
            StartupStage::BuildWorld,
            StartupStage::BuildDrones,
            StartupStage::BuildCameras,
        )
            .chain(),
    )
    .configure_sets(
        PostStartup,
        (SetupSet::BindRotors, SetupSet::SelectCamera, SetupSet::Validate).chain(),
    )
    .configure_sets(
        FixedUpdate,
        (FlightSet::Control, FlightSet::Integrate).chain(),
    )
    .configure_sets(PreUpdate, (InputSet::Read, InputSet::Apply).chain());
}
