use bevy::prelude::*;
use bevy_prng::WyRand;
use rand::SeedableRng;

/// Seeded random source for course generation and per-obstacle motion
/// sampling. Re-created from the config seed on every rebuild, so identical
/// inputs reproduce identical levels.
#[derive(Resource)]
pub struct GenRng(WyRand);

impl GenRng {
    pub fn new(seed: u64) -> Self {
        GenRng(WyRand::seed_from_u64(seed))
    }

    pub fn rng_mut(&mut self) -> &mut WyRand {
        &mut self.0
    }
}
