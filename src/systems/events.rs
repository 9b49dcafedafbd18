use bevy::prelude::*;
use crate::core::components::CourseRoot;
use crate::core::course::Course;
use crate::core::level_config::LevelConfig;
use crate::management::resource_registry::LevelResources;
use crate::spawning::helpers::GenRng;
use crate::spawning::segment_spawning::spawn_course;

/// Explicit rebuild request, sent by the host whenever count, type pool, or
/// seed changes. Re-sending an identical config reproduces the identical
/// level.
#[derive(Debug, Clone, Event)]
pub struct LevelRebuildEvent {
    pub config: LevelConfig,
}

pub fn level_rebuild_listener(
    mut commands: Commands,
    mut rebuild_reader: EventReader<LevelRebuildEvent>,
    mut gen_rng: ResMut<GenRng>,
    resources: Res<LevelResources>,
    existing: Query<Entity, With<CourseRoot>>,
) {
    // Only the last request in a frame takes effect; course and bounds are
    // rebuilt together or not at all.
    let Some(event) = rebuild_reader.read().last() else {
        return;
    };

    *gen_rng = GenRng::new(event.config.seed);

    let course = match Course::generate(&event.config, gen_rng.rng_mut()) {
        Ok(course) => course,
        Err(e) => {
            error!("Level rebuild rejected: {:?}", e);
            return;
        }
    };

    for root in existing.iter() {
        commands.entity(root).despawn_recursive();
    }

    info!(
        "Rebuilding course: {} segments, seed {}",
        course.segment_count(),
        event.config.seed
    );
    spawn_course(&mut commands, &resources, &course, gen_rng.rng_mut());
}
