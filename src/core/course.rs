use bevy::math::Vec3;
use bevy_prng::WyRand;
use rand::Rng;
use crate::core::archetype::ArchetypeId;
use crate::core::level_config::LevelConfig;
use crate::core::level_error::LevelError;

/// Spacing between consecutive segment positions along the course axis.
pub const SEGMENT_PITCH: f32 = 4.0;

/// Placement is purely index-derived: reordering segments reorders positions
/// identically, and no segment stores an independent position.
pub fn segment_position(ordinal: usize) -> Vec3 {
    Vec3::new(0.0, 0.0, -(ordinal as f32) * SEGMENT_PITCH)
}

/// Ordered archetype sequence of one level: start, `count` randomized
/// segments, finish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    segments: Vec<ArchetypeId>,
}

impl Course {
    pub fn generate(config: &LevelConfig, rng: &mut WyRand) -> Result<Self, LevelError> {
        let picked = pick_segments(config.count, &config.type_pool, rng)?;

        let mut segments = Vec::with_capacity(picked.len() + 2);
        segments.push(ArchetypeId::Start);
        segments.extend(picked);
        segments.push(ArchetypeId::End);

        Ok(Course { segments })
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Wall/floor span handed to the bounds builder, in segment pitches.
    /// Equals the randomized count plus the start and finish segments.
    pub fn bounds_length(&self) -> u32 {
        self.segments.len() as u32
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, ArchetypeId)> + '_ {
        self.segments.iter().copied().enumerate()
    }
}

/// Uniform selection with replacement, one independent draw per slot.
pub fn pick_segments(
    count: u32,
    type_pool: &[ArchetypeId],
    rng: &mut WyRand,
) -> Result<Vec<ArchetypeId>, LevelError> {
    if type_pool.is_empty() {
        if count == 0 {
            return Ok(Vec::new());
        }
        return Err(LevelError::InvalidConfiguration(format!(
            "Cannot pick {} segments from an empty type pool",
            count
        )));
    }

    Ok((0..count)
        .map(|_| type_pool[rng.gen_range(0..type_pool.len())])
        .collect())
}
