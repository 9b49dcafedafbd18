use bevy::prelude::*;
use bevy_prng::WyRand;
use bevy_rapier3d::prelude::*;
use crate::core::archetype::{ArchetypeId, FloorSpec, FloorStyle, LabelSpec, ObstacleArchetype, ObstacleShape};
use crate::core::catalog::definition;
use crate::core::components::{CourseRoot, CourseSegment, DecorLabel, KinematicObstacle};
use crate::core::course::{segment_position, Course};
use crate::core::motion::MotionProfile;
use crate::management::resource_registry::LevelResources;
use crate::spawning::bounds_spawning::spawn_bounds;

/// Instantiates a generated course as one positioned scene graph under a
/// fresh `CourseRoot`. Obstacle bodies are parented to the root rather than
/// to their segment: the root sits at the identity, so the driver's
/// world-space target pose maps one-to-one onto the body transform and the
/// segment offset is never applied twice.
pub fn spawn_course(
    commands: &mut Commands,
    resources: &LevelResources,
    course: &Course,
    rng: &mut WyRand,
) -> Entity {
    let root = commands.spawn_empty()
        .insert(Name::new("Course"))
        .insert(CourseRoot)
        .insert(Transform::default())
        .insert(Visibility::default())
        .id();

    for (ordinal, id) in course.iter() {
        let def = definition(id);
        let position = segment_position(ordinal);

        let segment = spawn_segment(commands, resources, ordinal, position, def.id, &def.floor, def.label.as_ref());
        commands.entity(segment).set_parent(root);

        if let Some(archetype) = &def.obstacle {
            let obstacle = spawn_obstacle(commands, resources, archetype, position, rng);
            commands.entity(obstacle).set_parent(root);
        }
    }

    let bounds = spawn_bounds(commands, resources, course.bounds_length());
    commands.entity(bounds).set_parent(root);

    root
}

fn spawn_segment(
    commands: &mut Commands,
    resources: &LevelResources,
    ordinal: usize,
    position: Vec3,
    id: ArchetypeId,
    floor: &FloorSpec,
    label: Option<&LabelSpec>,
) -> Entity {
    let segment = commands.spawn_empty()
        .insert(Name::new(format!("Segment {} ({:?})", ordinal, id)))
        .insert(CourseSegment { ordinal, archetype: id })
        .insert(Transform::from_translation(position))
        .insert(Visibility::default())
        .id();

    let floor = spawn_floor(commands, resources, floor);
    commands.entity(floor).set_parent(segment);

    if let Some(label) = label {
        let label = spawn_label(commands, label);
        commands.entity(label).set_parent(segment);
    }

    segment
}

// Segment floors are render-only; collision support comes from the
// full-length floor collider in the bounds.
fn spawn_floor(commands: &mut Commands, resources: &LevelResources, floor: &FloorSpec) -> Entity {
    let material = match floor.style {
        FloorStyle::Checkpoint => resources.checkpoint_floor.clone(),
        FloorStyle::Hazard => resources.hazard_floor.clone(),
    };

    commands.spawn_empty()
        .insert(Name::new("Floor"))
        .insert(Mesh3d(resources.unit_cube.clone()))
        .insert(MeshMaterial3d(material))
        .insert(
            Transform::from_translation(Vec3::new(0.0, -floor.thickness / 2.0, 0.0))
                .with_scale(Vec3::new(floor.width, floor.thickness, floor.depth)),
        )
        .id()
}

fn spawn_label(commands: &mut Commands, label: &LabelSpec) -> Entity {
    commands.spawn_empty()
        .insert(Name::new(format!("Label: {}", label.text)))
        .insert(DecorLabel(label.text.to_string()))
        .insert(
            Transform::from_translation(label.offset).with_scale(Vec3::splat(label.scale)),
        )
        .insert(Visibility::default())
        .id()
}

/// Spawns an obstacle body at its mount pose. A kinematic kind samples its
/// motion profile here, exactly once for the lifetime of the instance; the
/// `None` kind becomes a fixed blocker.
pub(crate) fn spawn_obstacle(
    commands: &mut Commands,
    resources: &LevelResources,
    archetype: &ObstacleArchetype,
    base: Vec3,
    rng: &mut WyRand,
) -> Entity {
    let mount = base + Vec3::new(0.0, archetype.mount_height, 0.0);

    let body = commands.spawn_empty()
        .insert(Name::new("Obstacle"))
        .insert(archetype.shape.to_collider())
        .insert(Friction::coefficient(0.0))
        .insert(Restitution::coefficient(0.2))
        .insert(Transform::from_translation(mount))
        .insert(Visibility::default())
        .id();

    let material = match MotionProfile::sample(&archetype.kind, rng) {
        Some(profile) => {
            commands.entity(body)
                .insert(RigidBody::KinematicPositionBased)
                .insert(KinematicObstacle { profile, base });
            resources.obstacle.clone()
        }
        None => {
            commands.entity(body).insert(RigidBody::Fixed);
            resources.goal.clone()
        }
    };

    let mesh = match archetype.shape {
        ObstacleShape::Cuboid { .. } => resources.unit_cube.clone(),
        ObstacleShape::Cylinder { .. } => resources.unit_cylinder.clone(),
    };

    let visual = commands.spawn_empty()
        .insert(Mesh3d(mesh))
        .insert(MeshMaterial3d(material))
        .insert(Transform::from_scale(archetype.shape.visual_scale()))
        .id();
    commands.entity(visual).set_parent(body);

    body
}
