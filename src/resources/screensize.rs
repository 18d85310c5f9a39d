//! Screen size resource.
//!
//! Stores the current viewport dimensions in pixels. Bounds clamping and
//! spawn placement read this to adapt to the configured viewport.

use bevy_ecs::prelude::Resource;

/// Current viewport size in pixels.
#[derive(Resource, Clone, Copy)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
