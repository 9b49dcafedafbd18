use serde::{Serialize, Deserialize};
use bevy::prelude::*;
use bevy_rapier3d::prelude::Collider;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum ArchetypeId {
    #[default]
    Start,
    Spinner,
    Limbo,
    Axe,
    End,
}

#[derive(Debug, Clone)]
pub enum MotionKind {
    None,
    Rotate {
        speed_range: (f32, f32),
    },
    Oscillate {
        phase_range: f32,
    },
    OscillateX {
        phase_range: f32,
    },
}

#[derive(Debug, Clone)]
pub enum ObstacleShape {
    Cuboid {
        hx: f32,
        hy: f32,
        hz: f32,
    },
    Cylinder {
        half_height: f32,
        radius: f32,
    },
}

impl ObstacleShape {
    pub fn to_collider(&self) -> Collider {
        match self {
            ObstacleShape::Cuboid { hx, hy, hz } => Collider::cuboid(*hx, *hy, *hz),
            ObstacleShape::Cylinder { half_height, radius } => Collider::cylinder(*half_height, *radius),
        }
    }

    // Scale that stretches a unit primitive mesh to the collider's full extents.
    pub fn visual_scale(&self) -> Vec3 {
        match self {
            ObstacleShape::Cuboid { hx, hy, hz } => Vec3::new(hx * 2.0, hy * 2.0, hz * 2.0),
            ObstacleShape::Cylinder { half_height, radius } => {
                Vec3::new(radius * 2.0, half_height * 2.0, radius * 2.0)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorStyle {
    Checkpoint,
    Hazard,
}

#[derive(Debug, Clone)]
pub struct FloorSpec {
    pub width: f32,
    pub depth: f32,
    pub thickness: f32,
    pub style: FloorStyle,
}

#[derive(Debug, Clone)]
pub struct LabelSpec {
    pub text: &'static str,
    pub offset: Vec3,
    pub scale: f32,
}

#[derive(Debug, Clone)]
pub struct ObstacleArchetype {
    pub shape: ObstacleShape,
    pub mount_height: f32,
    pub kind: MotionKind,
}

#[derive(Debug, Clone)]
pub struct SegmentDefinition {
    pub id: ArchetypeId,
    pub floor: FloorSpec,
    pub obstacle: Option<ObstacleArchetype>,
    pub label: Option<LabelSpec>,
}
