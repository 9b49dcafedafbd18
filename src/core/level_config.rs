use serde::{Serialize, Deserialize};
use crate::core::archetype::ArchetypeId;

/// Generation inputs recognized by the rebuild surface. Changing any of them
/// warrants re-sending a `LevelRebuildEvent`; the same config always rebuilds
/// the same level.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LevelConfig {
    /// Number of randomized segments between start and finish.
    pub count: u32,
    /// Candidate archetypes for the randomized segments.
    pub type_pool: Vec<ArchetypeId>,
    pub seed: u64,
}

impl Default for LevelConfig {
    fn default() -> Self {
        LevelConfig {
            count: 5,
            type_pool: vec![ArchetypeId::Spinner, ArchetypeId::Axe, ArchetypeId::Limbo],
            seed: 0,
        }
    }
}
