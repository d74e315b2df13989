use bevy::{prelude::*, time::TimeUpdateStrategy, transform::TransformPlugin};
use bevy_rapier3d::prelude::{Collider, CollisionGroups, DefaultRapierContext, Group, RapierContext};
use drone::{
    components::{DroneConfig, FlightState, Rotor, VirtualCamera},
    physics::{RayCaster, RayHit},
    plugins::{
        drone_bundle, CameraPlugin, DronePlugin, KeyboardPilotPlugin, PhysicsPlugin,
        StartupSequencePlugin,
    },
    resources::{CameraSwitcher, PhysicsConfig},
};
use std::time::Duration;

struct DroneSpec {
    config: DroneConfig,
    transform: Transform,
    rotors: usize,
    /// Rotors hang off an intermediate arm entity instead of the root
    on_arm: bool,
}

struct CameraSpec {
    transform: Transform,
    priority: i32,
}

// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    drones: Vec<DroneSpec>,
    cameras: Vec<CameraSpec>,
    obstacles: Vec<(Collider, Transform, CollisionGroups)>,
    physics_config: Option<PhysicsConfig>,
    frame_duration: Option<Duration>,
    ground: bool,
    camera_switcher: bool,
    keyboard: bool,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            drones: Vec::new(),
            cameras: Vec::new(),
            obstacles: Vec::new(),
            physics_config: None,
            frame_duration: None,
            ground: true,
            camera_switcher: false,
            keyboard: false,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_drone(self, config: DroneConfig, position: Vec3) -> Self {
        self.with_drone_rotors(config, position, 4)
    }

    pub fn with_drone_rotors(mut self, config: DroneConfig, position: Vec3, rotors: usize) -> Self {
        self.drones.push(DroneSpec {
            config,
            transform: Transform::from_translation(position),
            rotors,
            on_arm: false,
        });
        self
    }

    pub fn with_drone_on_arm(mut self, config: DroneConfig, position: Vec3, rotors: usize) -> Self {
        self.drones.push(DroneSpec {
            config,
            transform: Transform::from_translation(position),
            rotors,
            on_arm: true,
        });
        self
    }

    /// Pilots through an injected keyboard state.
    pub fn with_keyboard(mut self) -> Self {
        self.keyboard = true;
        self
    }

    /// Adds a camera at `position` looking along `forward`.
    pub fn with_camera(mut self, position: Vec3, forward: Vec3, priority: i32) -> Self {
        self.cameras.push(CameraSpec {
            transform: Transform::from_translation(position).looking_to(forward, Vec3::Y),
            priority,
        });
        self
    }

    /// Switches between the first two cameras.
    pub fn with_camera_switcher(mut self) -> Self {
        self.camera_switcher = true;
        self
    }

    pub fn with_obstacle(mut self, collider: Collider, position: Vec3, groups: CollisionGroups) -> Self {
        self.obstacles
            .push((collider, Transform::from_translation(position), groups));
        self
    }

    pub fn without_ground(mut self) -> Self {
        self.ground = false;
        self
    }

    pub fn with_physics(mut self, config: PhysicsConfig) -> Self {
        self.physics_config = Some(config);
        self
    }

    /// Length of a rendered frame. Defaults to the fixed timestep, one tick per frame.
    pub fn with_frame_duration(mut self, frame: Duration) -> Self {
        self.frame_duration = Some(frame);
        self
    }

    pub fn build(self) -> TestApp {
        let physics = self.physics_config.unwrap_or_default();
        let frame = self
            .frame_duration
            .unwrap_or_else(|| Duration::from_secs_f64(physics.timestep));
        let mut app = App::new();

        app.add_plugins(MinimalPlugins)
            .add_plugins(TransformPlugin)
            .insert_resource(TimeUpdateStrategy::ManualDuration(frame))
            .add_plugins(StartupSequencePlugin)
            .add_plugins(PhysicsPlugin::with_config(physics))
            .add_plugins(DronePlugin)
            .add_plugins(CameraPlugin);

        if self.keyboard {
            app.init_resource::<ButtonInput<KeyCode>>()
                .add_plugins(KeyboardPilotPlugin);
        }

        let world = app.world_mut();

        if self.ground {
            let transform = Transform::default();
            world.spawn((
                Collider::halfspace(Vec3::Y).expect("valid ground normal"),
                transform,
                GlobalTransform::from(transform),
            ));
        }

        for (collider, transform, groups) in self.obstacles {
            world.spawn((collider, transform, GlobalTransform::from(transform), groups));
        }

        let mut drones = Vec::new();
        for spec in self.drones {
            let bundle = drone_bundle(spec.config, spec.transform).expect("valid test config");
            let mut entity = world.spawn(bundle);
            entity.with_children(|parent| {
                if spec.on_arm {
                    parent
                        .spawn((Transform::default(), Name::new("Arm")))
                        .with_children(|arm| {
                            for _ in 0..spec.rotors {
                                arm.spawn((Rotor::default(), Transform::default()));
                            }
                        });
                } else {
                    for _ in 0..spec.rotors {
                        parent.spawn((Rotor::default(), Transform::default()));
                    }
                }
            });
            drones.push(entity.id());
        }

        let mut cameras = Vec::new();
        for spec in self.cameras {
            let id = world
                .spawn((
                    VirtualCamera::new(spec.priority),
                    spec.transform,
                    GlobalTransform::from(spec.transform),
                ))
                .id();
            cameras.push(id);
        }

        if self.camera_switcher && cameras.len() >= 2 {
            world.insert_resource(CameraSwitcher::new(cameras[0], cameras[1]));
        }

        app.finish();
        app.cleanup();

        // Run an initial update to initialize everything
        app.update();

        TestApp {
            app,
            drones,
            cameras,
        }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
    pub drones: Vec<Entity>,
    pub cameras: Vec<Entity>,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    pub fn drone(&self) -> Entity {
        self.drones[0]
    }

    pub fn send<E: Event>(&mut self, event: E) {
        self.app.world_mut().send_event(event);
    }

    pub fn get_state<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }

    pub fn get<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.app.world().get::<T>(entity)
    }

    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Option<Mut<T>> {
        self.app.world_mut().get_mut::<T>(entity)
    }

    pub fn flight_state(&self) -> &FlightState {
        self.get::<FlightState>(self.drone())
            .expect("drone has a flight state")
    }

    pub fn flight_state_mut(&mut self) -> Mut<FlightState> {
        let drone = self.drone();
        self.get_mut::<FlightState>(drone)
            .expect("drone has a flight state")
    }

    pub fn drone_transform(&self) -> Transform {
        *self
            .get::<Transform>(self.drone())
            .expect("drone has a transform")
    }

    pub fn set_drone_translation(&mut self, translation: Vec3) {
        let drone = self.drone();
        if let Some(mut transform) = self.get_mut::<Transform>(drone) {
            transform.translation = translation;
        }
    }

    pub fn keyboard_mut(&mut self) -> Mut<ButtonInput<KeyCode>> {
        self.app.world_mut().resource_mut::<ButtonInput<KeyCode>>()
    }

    pub fn query_all<T: Component>(&mut self) -> Vec<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.iter(world).collect()
    }

    pub fn rotor_speeds(&mut self) -> Vec<f32> {
        self.query_all::<Rotor>()
            .into_iter()
            .map(|rotor| rotor.speed())
            .collect()
    }

    /// Ray query against the default rapier context, as the flight controller sees it.
    pub fn cast_ray(
        &mut self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        filter: Group,
    ) -> Option<RayHit> {
        let world = self.app.world_mut();
        let mut contexts = world.query_filtered::<&RapierContext, With<DefaultRapierContext>>();
        let context = contexts.get_single(world).ok()?;
        RayCaster::cast_ray(context, origin, direction, max_distance, filter)
    }
}
