use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Per-entity playback state for an animation defined in
/// [`AnimationStore`](crate::resources::animationstore::AnimationStore).
///
/// `finished` is only ever set for non-looping animations, once the last
/// frame has been reached; looping animations cycle indefinitely.
#[derive(Debug, Clone, Component, Serialize, Deserialize)]
pub struct Animation {
    pub animation_key: String,
    pub frame_index: usize,
    pub elapsed_time: f32,
    pub finished: bool,
}

impl Animation {
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
            frame_index: 0,
            elapsed_time: 0.0,
            finished: false,
        }
    }

    /// Restart playback from the first frame.
    pub fn reset(&mut self) {
        self.frame_index = 0;
        self.elapsed_time = 0.0;
        self.finished = false;
    }
}
