use bevy::math::{Quat, Vec3};
use bevy::prelude::Reflect;
use bevy_prng::WyRand;
use rand::Rng;
use crate::core::archetype::MotionKind;

/// Height above the segment floor at which the spinner bar rotates.
pub const SPINNER_MOUNT_HEIGHT: f32 = 0.3;
/// Midpoint of the limbo bar's vertical travel.
pub const LIMBO_REST_HEIGHT: f32 = 1.15;
/// Height of the axe blade's swing pivot.
pub const AXE_PIVOT_HEIGHT: f32 = 0.75;
/// Horizontal amplitude of the axe swing.
pub const AXE_SWING_RADIUS: f32 = 1.25;

/// Per-instance motion parameters, sampled once when the obstacle is spawned
/// and never resampled afterwards. Resampling per tick would make the motion
/// discontinuous and unreproducible within a run.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub enum MotionProfile {
    /// Signed angular speed in radians per second.
    Spin { speed: f32 },
    /// Phase offset of the vertical sine travel, in radians.
    Bob { phase: f32 },
    /// Phase offset of the horizontal sine sweep, in radians.
    Sweep { phase: f32 },
}

impl MotionProfile {
    /// Draws the one-time random parameters for an obstacle of the given kind.
    /// `MotionKind::None` yields no profile; the obstacle spawns as a fixed body.
    pub fn sample(kind: &MotionKind, rng: &mut WyRand) -> Option<Self> {
        match kind {
            MotionKind::None => None,
            MotionKind::Rotate { speed_range } => {
                let magnitude = rng.gen_range(speed_range.0..speed_range.1);
                let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
                Some(MotionProfile::Spin { speed: magnitude * sign })
            }
            MotionKind::Oscillate { phase_range } => Some(MotionProfile::Bob {
                phase: rng.gen_range(0.0..*phase_range),
            }),
            MotionKind::OscillateX { phase_range } => Some(MotionProfile::Sweep {
                phase: rng.gen_range(0.0..*phase_range),
            }),
        }
    }
}

/// Target pose of an obstacle at `elapsed` seconds, in world space.
///
/// Pure in all inputs: re-querying at the same time with the same profile
/// yields the same pose, so the driver can run every tick without accumulating
/// drift. `base` is the owning segment's position on the course axis.
pub fn obstacle_pose(profile: &MotionProfile, base: Vec3, elapsed: f32) -> (Vec3, Quat) {
    match profile {
        MotionProfile::Spin { speed } => (
            base + Vec3::new(0.0, SPINNER_MOUNT_HEIGHT, 0.0),
            Quat::from_rotation_y(elapsed * speed),
        ),
        MotionProfile::Bob { phase } => (
            base + Vec3::new(0.0, LIMBO_REST_HEIGHT + (elapsed + phase).sin(), 0.0),
            Quat::IDENTITY,
        ),
        MotionProfile::Sweep { phase } => (
            base + Vec3::new(AXE_SWING_RADIUS * (elapsed + phase).sin(), AXE_PIVOT_HEIGHT, 0.0),
            Quat::IDENTITY,
        ),
    }
}
