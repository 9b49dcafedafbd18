use bevy::app::{App, Plugin, Startup, Update};
use bevy::prelude::IntoSystemConfigs;

use crate::core::components::{CourseSegment, DecorLabel};
use crate::core::level_config::LevelConfig;
use crate::management::resource_registry::init_level_resources;
use crate::spawning::helpers::GenRng;
use crate::systems::events::{level_rebuild_listener, LevelRebuildEvent};
use crate::systems::kinematics::drive_obstacles;

/// Level-side wiring for a host app. The host still brings the render,
/// physics (`RapierPhysicsPlugin`), camera, and input plugins, then sends a
/// `LevelRebuildEvent` whenever the course should be (re)built.
pub struct LevelGeneratorPlugin;

impl Plugin for LevelGeneratorPlugin {
    fn build(&self, app: &mut App) {
        app
            .insert_resource(GenRng::new(LevelConfig::default().seed))
            .add_event::<LevelRebuildEvent>()
            .add_systems(Startup, init_level_resources)
            // The driver must see this frame's rebuild before posing, and both
            // run ahead of the physics sets in PostUpdate.
            .add_systems(Update, (level_rebuild_listener, drive_obstacles).chain())
            .register_type::<CourseSegment>()
            .register_type::<DecorLabel>();
    }
}
