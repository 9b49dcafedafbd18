use bevy::prelude::*;
use course_gen::core::level_config::LevelConfig;
use course_gen::spawn;
use course_gen::systems::events::LevelRebuildEvent;
use std::time::{SystemTime, UNIX_EPOCH};

pub(crate) fn generate_level(mut c: Commands) {
    spawn!(c, LevelRebuildEvent {
        config: LevelConfig::default(),
    });
}

pub(crate) fn reset_on_space(mut commands: Commands, keys: Res<ButtonInput<KeyCode>>) {
    if !keys.just_pressed(KeyCode::Space) { return; }

    // Fresh, non-deterministic seed from system time
    let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
    let config = LevelConfig {
        seed: now.as_nanos() as u64,
        ..Default::default()
    };

    spawn!(commands, LevelRebuildEvent { config });
}
