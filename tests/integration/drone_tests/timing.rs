use crate::common::*;
use bevy::prelude::*;
use drone::{components::Rotor, plugins::FlightCommand};
use pretty_assertions::assert_eq;
use std::time::Duration;

fn body_yaw(app: &TestApp) -> f32 {
    app.drone_transform().rotation.to_euler(EulerRot::YXZ).0
}

fn rotor_transforms(app: &mut TestApp) -> Vec<Transform> {
    let world = app.app.world_mut();
    let mut rotors = world.query_filtered::<&Transform, With<Rotor>>();
    rotors.iter(world).copied().collect()
}

#[test]
fn test_visuals_run_per_frame_and_flight_per_tick() {
    // Four 5 ms frames per 20 ms flight tick
    let mut app = TestAppBuilder::new()
        .with_drone(create_test_drone_config(), airborne_position())
        .with_camera(Vec3::new(0.0, 25.0, 10.0), Vec3::X, 10)
        .with_physics(create_weightless_physics_config())
        .with_frame_duration(Duration::from_millis(5))
        .build();

    app.send(FlightCommand::Ascend(true));
    // The first tick spins the rotors up
    app.run_steps(4);
    assert!(app.flight_state().rotor_command > 0.0);

    let mut yaw = body_yaw(&app);
    let mut rotors = rotor_transforms(&mut app);
    let mut velocity = app.flight_state().velocity;
    let mut ticks = Vec::new();

    for frame in 1..=8 {
        app.run_frame();

        let next_yaw = body_yaw(&app);
        assert!(next_yaw != yaw, "Body yaw held on frame {frame}");
        yaw = next_yaw;

        let next_rotors = rotor_transforms(&mut app);
        assert_eq!(next_rotors.len(), 4);
        for (before, after) in rotors.iter().zip(&next_rotors) {
            assert!(before.rotation != after.rotation, "Rotor held on frame {frame}");
        }
        rotors = next_rotors;

        let next_velocity = app.flight_state().velocity;
        if next_velocity != velocity {
            ticks.push(frame);
        }
        velocity = next_velocity;
    }

    assert_eq!(ticks, vec![4, 8]);
}
