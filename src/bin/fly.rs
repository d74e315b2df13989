use bevy::{log::LogPlugin, prelude::*};
use bevy_rapier3d::prelude::Collider;
use std::env;

use drone::{
    components::{Drone, DroneConfig, Rotor, VirtualCamera},
    plugins::{spawn_drone, DroneSimPlugins, StartupStage},
    resources::CameraSwitcher,
};

/// Camera orbiting the drone at a fixed distance and height.
#[derive(Component, Debug)]
struct FollowCamera {
    distance: f32,
    height: f32,
    yaw: f32,
}

#[derive(Resource)]
struct DemoSettings {
    drone: DroneConfig,
}

const ORBIT_SPEED: f32 = 1.5;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // DRONE_CONFIG points at a YAML or JSON drone configuration
    let drone = match env::var("DRONE_CONFIG") {
        Ok(path) => DroneConfig::from_file(path)?,
        Err(_) => DroneConfig::default(),
    };
    drone.validate()?;

    App::new()
        .add_plugins(DefaultPlugins.set(LogPlugin {
            filter: "info,drone=debug,wgpu=error".into(),
            ..default()
        }))
        .add_plugins(DroneSimPlugins)
        .insert_resource(DemoSettings { drone })
        .add_systems(
            Startup,
            (
                spawn_world.in_set(StartupStage::BuildWorld),
                spawn_player_drone.in_set(StartupStage::BuildDrones),
                spawn_cameras.in_set(StartupStage::BuildCameras),
            ),
        )
        .add_systems(Update, (orbit_cameras, follow_drone).chain())
        .run();

    Ok(())
}

fn spawn_world(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands
        .spawn((
            Mesh3d(meshes.add(Plane3d::default().mesh().size(200.0, 200.0))),
            MeshMaterial3d(materials.add(Color::srgb(0.35, 0.5, 0.3))),
            Transform::default(),
            Name::new("Ground"),
        ))
        .with_children(|ground| {
            // Slab whose top face is the visible plane
            ground.spawn((
                Collider::cuboid(100.0, 0.5, 100.0),
                Transform::from_xyz(0.0, -0.5, 0.0),
            ));
        });

    let crate_mesh = meshes.add(Cuboid::new(2.0, 2.0, 2.0));
    let crate_material = materials.add(Color::srgb(0.6, 0.45, 0.3));
    for position in [
        Vec3::new(6.0, 1.0, -8.0),
        Vec3::new(-5.0, 1.0, -14.0),
        Vec3::new(2.0, 3.0, -20.0),
    ] {
        commands.spawn((
            Collider::cuboid(1.0, 1.0, 1.0),
            Mesh3d(crate_mesh.clone()),
            MeshMaterial3d(crate_material.clone()),
            Transform::from_translation(position),
        ));
    }

    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 10.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn spawn_player_drone(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<DemoSettings>,
) {
    let body_mesh = meshes.add(Cuboid::new(0.6, 0.15, 0.6));
    let arm_mesh = meshes.add(Cuboid::new(1.2, 0.05, 0.08));
    let blade_mesh = meshes.add(Cuboid::new(0.5, 0.02, 0.06));
    let body_material = materials.add(Color::srgb(0.15, 0.15, 0.18));
    let blade_material = materials.add(Color::srgb(0.85, 0.85, 0.9));

    let mut drone = match spawn_drone(
        &mut commands,
        settings.drone.clone(),
        Transform::from_xyz(0.0, 0.001, 0.0),
    ) {
        Ok(drone) => drone,
        Err(err) => {
            error!("Failed to spawn drone: {}", err);
            return;
        }
    };

    drone.with_children(|parent| {
        parent.spawn((
            Mesh3d(body_mesh),
            MeshMaterial3d(body_material.clone()),
            Transform::from_xyz(0.0, 0.1, 0.0),
        ));
        for yaw in [45f32, -45.0] {
            parent.spawn((
                Mesh3d(arm_mesh.clone()),
                MeshMaterial3d(body_material.clone()),
                Transform::from_xyz(0.0, 0.12, 0.0)
                    .with_rotation(Quat::from_rotation_y(yaw.to_radians())),
            ));
        }
        for (x, z) in [(0.45, 0.45), (-0.45, 0.45), (0.45, -0.45), (-0.45, -0.45)] {
            parent.spawn((
                Rotor::default(),
                Mesh3d(blade_mesh.clone()),
                MeshMaterial3d(blade_material.clone()),
                Transform::from_xyz(x, 0.18, z),
            ));
        }
    });
}

fn spawn_cameras(mut commands: Commands) {
    let chase = commands
        .spawn((
            Camera3d::default(),
            Transform::from_xyz(0.0, 2.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
            VirtualCamera::new(10),
            FollowCamera {
                distance: 6.0,
                height: 2.0,
                yaw: 0.0,
            },
            Name::new("Chase Camera"),
        ))
        .id();

    let high = commands
        .spawn((
            Camera3d::default(),
            Camera {
                is_active: false,
                ..default()
            },
            Transform::from_xyz(0.0, 12.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
            // One above the chase camera so each toggle flips which is live
            VirtualCamera::new(11),
            FollowCamera {
                distance: 10.0,
                height: 12.0,
                yaw: 0.0,
            },
            Name::new("High Camera"),
        ))
        .id();

    commands.insert_resource(CameraSwitcher::new(chase, high));
}

fn orbit_cameras(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut cameras: Query<&mut FollowCamera>,
) {
    let mut direction = 0.0;
    if keyboard.pressed(KeyCode::ArrowLeft) {
        direction -= 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowRight) {
        direction += 1.0;
    }
    if direction == 0.0 {
        return;
    }

    for mut camera in cameras.iter_mut() {
        camera.yaw += direction * ORBIT_SPEED * time.delta_secs();
    }
}

fn follow_drone(
    drones: Query<&Transform, (With<Drone>, Without<FollowCamera>)>,
    mut cameras: Query<(&FollowCamera, &mut Transform), Without<Drone>>,
) {
    let Ok(drone) = drones.get_single() else {
        return;
    };

    for (camera, mut transform) in cameras.iter_mut() {
        let offset =
            Quat::from_rotation_y(camera.yaw) * Vec3::new(0.0, camera.height, camera.distance);
        *transform = Transform::from_translation(drone.translation + offset)
            .looking_at(drone.translation, Vec3::Y);
    }
}
