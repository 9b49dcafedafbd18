use bevy::prelude::*;
use crate::core::archetype::ArchetypeId;
use crate::core::motion::MotionProfile;

/// Root of one generated level; despawning it recursively tears down every
/// segment, obstacle, and the bounds in a single command batch.
#[derive(Component)]
pub struct CourseRoot;

#[derive(Component, Clone, Copy, Debug, Default, Reflect)]
#[reflect(Component)]
pub struct CourseSegment {
    pub ordinal: usize,
    pub archetype: ArchetypeId,
}

#[derive(Component, Clone, Copy, Debug)]
pub struct CourseBounds {
    pub length: u32,
}

/// Instance record of a moving obstacle: its one-time motion profile and the
/// segment position its pose is computed from. The kinematic driver is the
/// only writer of the owning entity's transform.
#[derive(Component, Clone, Copy, Debug)]
pub struct KinematicObstacle {
    pub profile: MotionProfile,
    pub base: Vec3,
}

/// Decorative text payload placed by a segment. The host decides how (and
/// whether) to render it.
#[derive(Component, Clone, Debug, Default, Reflect)]
#[reflect(Component)]
pub struct DecorLabel(pub String);
