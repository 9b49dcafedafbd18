use bevy::prelude::*;

/// Shared geometry and material handles used by every spawn function. Built
/// once at startup and only ever read afterwards; segments never allocate
/// their own meshes or materials.
#[derive(Resource, Default)]
pub struct LevelResources {
    pub unit_cube: Handle<Mesh>,
    pub unit_cylinder: Handle<Mesh>,
    pub checkpoint_floor: Handle<StandardMaterial>,
    pub hazard_floor: Handle<StandardMaterial>,
    pub obstacle: Handle<StandardMaterial>,
    pub wall: Handle<StandardMaterial>,
    pub goal: Handle<StandardMaterial>,
}

pub fn init_level_resources(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut matte = |base_color: Color| {
        materials.add(StandardMaterial {
            base_color,
            metallic: 0.1,
            perceptual_roughness: 0.9,
            ..Default::default()
        })
    };

    let checkpoint_floor = matte(Color::srgb(0.196, 0.804, 0.196));
    let hazard_floor = matte(Color::srgb(0.294, 0.0, 0.510));
    let obstacle = matte(Color::srgb(0.502, 0.0, 0.502));
    let wall = matte(Color::srgb(0.416, 0.353, 0.804));
    let goal = matte(Color::srgb(0.85, 0.65, 0.13));

    commands.insert_resource(LevelResources {
        unit_cube: meshes.add(Cuboid::new(1.0, 1.0, 1.0)),
        unit_cylinder: meshes.add(Cylinder::new(0.5, 1.0)),
        checkpoint_floor,
        hazard_floor,
        obstacle,
        wall,
        goal,
    });
}
