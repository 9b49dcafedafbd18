use std::f32::consts::TAU;
use bevy::math::Vec3;
use lazy_static::lazy_static;
use crate::core::archetype::*;

// Crossbar shared by the spinner and limbo segments, a 3.5 x 0.3 x 0.3 beam.
const BAR: ObstacleShape = ObstacleShape::Cuboid { hx: 1.75, hy: 0.15, hz: 0.15 };
// The axe blade is taller and narrower, 1.5 x 1.5 x 0.3.
const BLADE: ObstacleShape = ObstacleShape::Cuboid { hx: 0.75, hy: 0.75, hz: 0.15 };

const fn floor(style: FloorStyle) -> FloorSpec {
    FloorSpec { width: 4.0, depth: 4.0, thickness: 0.2, style }
}

lazy_static! {
    // Indexed by `ArchetypeId as usize`; keep the order in sync with the enum.
    static ref CATALOG: [SegmentDefinition; 5] = [
        SegmentDefinition {
            id: ArchetypeId::Start,
            floor: floor(FloorStyle::Checkpoint),
            obstacle: None,
            label: Some(LabelSpec {
                text: "START",
                offset: Vec3::new(0.75, 0.65, 0.0),
                scale: 0.3,
            }),
        },
        SegmentDefinition {
            id: ArchetypeId::Spinner,
            floor: floor(FloorStyle::Hazard),
            obstacle: Some(ObstacleArchetype {
                shape: BAR,
                mount_height: 0.3,
                kind: MotionKind::Rotate { speed_range: (0.2, 1.2) },
            }),
            label: None,
        },
        SegmentDefinition {
            id: ArchetypeId::Limbo,
            floor: floor(FloorStyle::Hazard),
            obstacle: Some(ObstacleArchetype {
                shape: BAR,
                mount_height: 0.3,
                kind: MotionKind::Oscillate { phase_range: TAU },
            }),
            label: None,
        },
        SegmentDefinition {
            id: ArchetypeId::Axe,
            floor: floor(FloorStyle::Hazard),
            obstacle: Some(ObstacleArchetype {
                shape: BLADE,
                mount_height: 0.3,
                kind: MotionKind::OscillateX { phase_range: TAU },
            }),
            label: None,
        },
        SegmentDefinition {
            id: ArchetypeId::End,
            floor: floor(FloorStyle::Checkpoint),
            obstacle: Some(ObstacleArchetype {
                shape: ObstacleShape::Cylinder { half_height: 0.25, radius: 0.5 },
                mount_height: 0.25,
                kind: MotionKind::None,
            }),
            label: Some(LabelSpec {
                text: "FINISH",
                offset: Vec3::new(0.0, 2.25, 2.0),
                scale: 1.0,
            }),
        },
    ];
}

pub fn definition(id: ArchetypeId) -> &'static SegmentDefinition {
    &CATALOG[id as usize]
}
