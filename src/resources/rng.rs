//! Seedable random source for spawning.
//!
//! The spawner takes its randomness from this resource rather than an
//! ambient generator, so tests can pin the seed and replay a session.

use bevy_ecs::prelude::Resource;

/// Random source used by the enemy spawner.
#[derive(Resource, Debug, Clone)]
pub struct SpawnRng(pub fastrand::Rng);

impl SpawnRng {
    pub fn with_seed(seed: u64) -> Self {
        Self(fastrand::Rng::with_seed(seed))
    }
}
