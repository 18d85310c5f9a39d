//! Enemy spawn cadence state.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

/// Cadence timer and parameters for enemy spawning.
///
/// The spawner system compares total simulated time against
/// `last_spawn_time + interval` each tick and spawns at most one enemy when
/// the interval has elapsed.
#[derive(Resource, Debug, Clone)]
pub struct EnemySpawner {
    /// Key into the animation store for spawned enemies.
    pub animation_key: String,
    /// Minimum simulated time between spawns, in seconds.
    pub interval: f32,
    /// Total simulated time at the previous spawn.
    pub last_spawn_time: f32,
    /// Velocity given to spawned enemies, in pixels per second.
    pub drift: Vec2,
    /// Number of enemies spawned so far this session.
    pub spawned: u64,
}

impl EnemySpawner {
    pub fn new(animation_key: impl Into<String>, interval: f32, drift: Vec2) -> Self {
        Self {
            animation_key: animation_key.into(),
            interval,
            last_spawn_time: 0.0,
            drift,
            spawned: 0,
        }
    }

    /// Change the minimum time between spawns.
    pub fn configure(&mut self, interval: f32) {
        self.interval = interval;
    }
}
