use std::fs::File;
use ron::de::{from_reader, SpannedError};
use crate::core::level_config::LevelConfig;
use crate::core::level_error::LevelError;

/// Reads a `LevelConfig` from a RON file. Missing fields fall back to the
/// defaults, so a file may override just `count` or just `seed`.
pub fn import_level_config(path: &str) -> Result<LevelConfig, LevelError> {
    let file = File::open(path)
        .map_err(|e| LevelError::ConfigImport(format!("Failed to open {}: {}", path, e)))?;

    let deserialized: Result<LevelConfig, SpannedError> = from_reader(file);
    deserialized
        .map_err(|e| LevelError::ConfigImport(format!("Failed to parse {}: {}", path, e)))
}
