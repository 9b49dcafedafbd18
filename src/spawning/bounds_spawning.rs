use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use crate::core::components::CourseBounds;
use crate::core::course::SEGMENT_PITCH;
use crate::management::resource_registry::LevelResources;

const WALL_HEIGHT: f32 = 1.5;
const WALL_THICKNESS: f32 = 0.3;

/// Encloses a course of `length` segments (randomized count + start + end)
/// with two side walls, an end cap, and a floor collider spanning the whole
/// run. Everything hangs off one fixed rigid body; bevy_rapier scales each
/// child's half-unit cuboid collider by the entity's transform scale, so the
/// collider always matches the rendered wall exactly.
pub fn spawn_bounds(commands: &mut Commands, resources: &LevelResources, length: u32) -> Entity {
    let len = length as f32;
    let half_pitch = SEGMENT_PITCH / 2.0;

    let root = commands.spawn_empty()
        .insert(Name::new("Bounds"))
        .insert(CourseBounds { length })
        .insert(RigidBody::Fixed)
        .insert(Transform::default())
        .insert(Visibility::default())
        .id();

    // Midpoint of the course along -Z; segment 0 is centered at the origin.
    let mid_z = -(len * half_pitch) + half_pitch;
    let end_z = -(len * SEGMENT_PITCH) + half_pitch;

    let walls = [
        (
            "Wall Right",
            Vec3::new(2.15, WALL_HEIGHT / 2.0, mid_z),
            Vec3::new(WALL_THICKNESS, WALL_HEIGHT, SEGMENT_PITCH * len),
        ),
        (
            "Wall Left",
            Vec3::new(-2.15, WALL_HEIGHT / 2.0, mid_z),
            Vec3::new(WALL_THICKNESS, WALL_HEIGHT, SEGMENT_PITCH * len),
        ),
        (
            "Wall End",
            Vec3::new(0.0, WALL_HEIGHT / 2.0, end_z),
            Vec3::new(SEGMENT_PITCH, WALL_HEIGHT, WALL_THICKNESS),
        ),
    ];

    for (name, position, size) in walls {
        let wall = commands.spawn_empty()
            .insert(Name::new(name))
            .insert(Mesh3d(resources.unit_cube.clone()))
            .insert(MeshMaterial3d(resources.wall.clone()))
            .insert(Transform::from_translation(position).with_scale(size))
            .insert(Collider::cuboid(0.5, 0.5, 0.5))
            .insert(Friction::coefficient(0.0))
            .insert(Restitution::coefficient(0.2))
            .id();
        commands.entity(wall).set_parent(root);
    }

    // Invisible floor collider under every segment; per-segment floors are
    // render-only.
    let floor = commands.spawn_empty()
        .insert(Name::new("Course Floor"))
        .insert(Collider::cuboid(2.0, 0.1, half_pitch * len))
        .insert(Transform::from_translation(Vec3::new(0.0, -0.1, mid_z)))
        .insert(Friction::coefficient(1.0))
        .insert(Restitution::coefficient(0.2))
        .id();
    commands.entity(floor).set_parent(root);

    root
}
