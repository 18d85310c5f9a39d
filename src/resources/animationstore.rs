//! Animation resource registry.
//!
//! This module provides a minimal store for animation definitions that can be
//! reused by multiple entities. Systems look up an animation by a string key
//! and drive playback from the immutable parameters stored here.

use bevy_ecs::prelude::Resource;
use glam::Vec2;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Central registry of reusable animation definitions keyed by string IDs.
#[derive(Resource, Default)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, AnimationSpec>,
}

impl AnimationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, spec: AnimationSpec) {
        self.animations.insert(key.into(), spec);
    }

    pub fn get(&self, key: &str) -> Option<&AnimationSpec> {
        self.animations.get(key)
    }

    /// Load a full animation set from a JSON object of `key -> spec`.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let animations: FxHashMap<String, AnimationSpec> = serde_json::from_str(json)?;
        Ok(Self { animations })
    }
}

/// Immutable data describing one sprite-sheet animation.
///
/// Frames are laid out as a horizontal strip starting at `origin`; frame `i`
/// sits at `origin.x + i * frame_width`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationSpec {
    /// Texture key resolved by the platform adapter's texture store.
    pub tex_key: String,
    /// Top-left corner of the strip inside the sheet, in pixels.
    pub origin: Vec2,
    /// Width of each frame in pixels.
    pub frame_width: f32,
    /// Height of each frame in pixels.
    pub frame_height: f32,
    /// Number of frames in the animation.
    pub frame_count: usize,
    /// Frames per second playback speed.
    pub fps: f32,
    /// Whether the animation restarts after the last frame.
    pub looped: bool,
}

impl AnimationSpec {
    /// Duration of a single frame in seconds.
    pub fn frame_duration(&self) -> f32 {
        1.0 / self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut store = AnimationStore::new();
        store.insert(
            "ship",
            AnimationSpec {
                tex_key: "ship-sheet".into(),
                origin: Vec2::ZERO,
                frame_width: 115.0,
                frame_height: 69.0,
                frame_count: 8,
                fps: 30.0,
                looped: true,
            },
        );
        let spec = store.get("ship").unwrap();
        assert_eq!(spec.frame_count, 8);
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn test_from_json_matches_code_definition() {
        let json = r#"{
            "mine": {
                "tex_key": "mine-sheet",
                "origin": [0.0, 0.0],
                "frame_width": 47.0,
                "frame_height": 61.0,
                "frame_count": 8,
                "fps": 30.0,
                "looped": true
            }
        }"#;
        let store = AnimationStore::from_json_str(json).unwrap();
        assert_eq!(
            store.get("mine"),
            Some(&AnimationSpec {
                tex_key: "mine-sheet".into(),
                origin: Vec2::ZERO,
                frame_width: 47.0,
                frame_height: 61.0,
                frame_count: 8,
                fps: 30.0,
                looped: true,
            })
        );
    }

    #[test]
    fn test_frame_duration() {
        let spec = AnimationSpec {
            tex_key: "x".into(),
            origin: Vec2::ZERO,
            frame_width: 1.0,
            frame_height: 1.0,
            frame_count: 4,
            fps: 30.0,
            looped: false,
        };
        assert!((spec.frame_duration() - 1.0 / 30.0).abs() < 1e-6);
    }
}
