use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;

#[derive(Component)]
struct MainCamera;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_systems(Startup, initialize_camera_system)
            .add_systems(Update, camera_controller_system);
    }
}

fn initialize_camera_system(mut commands: Commands) {
    commands.spawn_empty()
        .insert(Camera3d::default())
        .insert(
            Transform::from_xyz(9.0, 8.0, 6.0)
                .looking_at(Vec3::new(0.0, 0.0, -10.0), Vec3::Y),
        )
        .insert(Name::new("MainCamera"))
        .insert(MainCamera);
}

// Wheel zooms along the view axis, up/down arrows slide along the course.
fn camera_controller_system(
    mut mouse_wheel_events: EventReader<MouseWheel>,
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(mut cam_trans) = camera_query.get_single_mut() else {
        return;
    };

    for event in mouse_wheel_events.read() {
        let forward = cam_trans.forward();
        cam_trans.translation += forward * event.y * 0.5;
    }

    let mut slide = 0.0;
    if keys.pressed(KeyCode::ArrowUp) {
        slide -= 1.0;
    }
    if keys.pressed(KeyCode::ArrowDown) {
        slide += 1.0;
    }
    cam_trans.translation.z += slide * 8.0 * time.delta_secs();
}
