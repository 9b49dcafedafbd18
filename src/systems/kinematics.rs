use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use crate::core::components::KinematicObstacle;
use crate::core::motion::obstacle_pose;

/// Recomputes every live obstacle's target pose from the clock and commits it
/// through the physics boundary. Writing the `Transform` of a
/// `KinematicPositionBased` body is bevy_rapier's next-kinematic-pose
/// interface: `PhysicsSet::SyncBackend` forwards it to the body before the
/// step, and `Writeback` copies the resolved pose back afterwards, so the
/// rendered mesh always follows the collider.
///
/// Runs in `Update`, ahead of the physics sets in `PostUpdate`. Obstacles are
/// mutually independent; iteration order does not matter.
///
/// The `RapierRigidBodyHandle` filter skips instances whose body the physics
/// plugin has not registered yet (the tick right after spawning). Such an
/// instance is picked up automatically on the next tick.
pub fn drive_obstacles(
    time: Res<Time>,
    mut obstacles: Query<(&KinematicObstacle, &mut Transform), With<RapierRigidBodyHandle>>,
) {
    let elapsed = time.elapsed_secs();

    for (obstacle, mut transform) in obstacles.iter_mut() {
        let (translation, rotation) = obstacle_pose(&obstacle.profile, obstacle.base, elapsed);
        transform.translation = translation;
        transform.rotation = rotation;
    }
}
