//! Global signal flags.
//!
//! A small flag store for world-level conditions that several systems may
//! raise or observe. The game loop's exit request travels through here as
//! the `quit_game` flag.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashSet;

/// World-level boolean flags keyed by name.
#[derive(Resource, Debug, Clone, Default)]
pub struct WorldSignals {
    flags: FxHashSet<String>,
}

impl WorldSignals {
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }

    pub fn clear_flag(&mut self, key: &str) {
        self.flags.remove(key);
    }

    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }

    pub fn with_flag(mut self, key: impl Into<String>) -> Self {
        self.set_flag(key);
        self
    }
}
