use crate::common::TestApp;
use bevy::prelude::*;
use drone::components::FlightState;

/// Steps the app until `condition` holds, giving up after `max_steps` frames
pub fn wait_for_condition<F>(test_app: &mut TestApp, condition: F, max_steps: usize) -> bool
where
    F: Fn(&mut App) -> bool,
{
    for _ in 0..max_steps {
        if condition(&mut test_app.app) {
            return true;
        }
        test_app.run_frame();
    }
    false
}

/// Steps the app until the first drone's ground sensor reports contact
pub fn wait_until_grounded(test_app: &mut TestApp, max_steps: usize) -> bool {
    let drone = test_app.drone();
    wait_for_condition(
        test_app,
        |app| {
            app.world()
                .get::<FlightState>(drone)
                .is_some_and(|state| state.grounded)
        },
        max_steps,
    )
}

/// Runs enough fixed ticks to cover `duration` seconds
pub fn simulate_duration(test_app: &mut TestApp, duration: f64, timestep: f64) {
    let steps = (duration / timestep).ceil() as usize;
    test_app.run_steps(steps);
}
