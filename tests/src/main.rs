use bevy::prelude::*;
use bevy_rapier3d::prelude::{NoUserData, RapierPhysicsPlugin};
use course_gen::core::generator_plugin::LevelGeneratorPlugin;

mod camera;
mod generation;

fn main() {
    let mut app = App::new();

    // Setup default plugins
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Course Gen Testing".into(),
                    resolution: (1024.0, 768.0).into(),
                    resizable: false,
                    ..default()
                }),
                ..default()
            })
            .build(),
    );

    // Setup world (resources, types)
    app.insert_resource(AmbientLight {
        color: Color::srgba(154.0 / 255.0, 166.0 / 255.0, 254.0 / 255.0, 1.0),
        brightness: 300.0,
    });

    app.add_systems(Startup, (ingame_setup, generation::generate_level).chain());
    app.add_systems(Update, generation::reset_on_space);

    // Setup level generator
    app.add_plugins(LevelGeneratorPlugin);

    // Setup camera
    app.add_plugins(crate::camera::CameraPlugin);

    // Setup physics
    app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default());

    app.run();
}

fn ingame_setup(mut commands: Commands) {
    commands.spawn_empty()
        .insert(DirectionalLight {
            shadows_enabled: true,
            illuminance: 10000.0,
            color: Color::srgba(171.0 / 255.0, 183.0 / 255.0, 255.0 / 255.0, 1.0),
            ..default()
        })
        .insert(Transform::from_rotation(
            Quat::from_euler(EulerRot::XYZ, -0.9, 0.6, 0.0)));
}
