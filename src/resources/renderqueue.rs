//! Draw command queue.
//!
//! The core has no rendering backend; each tick the render system fills the
//! [`RenderQueue`] with ordered [`DrawCommand`]s and the platform adapter
//! turns them into actual draw calls.

use bevy_ecs::prelude::Resource;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::tint::Color;

/// Axis-aligned rectangle in pixels, used as the source region in a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// One sprite draw request: source region of a sheet, destination position,
/// tint, scale and layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub tex_key: String,
    pub source: Rect,
    pub dest: Vec2,
    pub tint: Color,
    pub scale: Vec2,
    pub z: i32,
}

/// Per-tick list of draw commands, in draw order.
#[derive(Resource, Debug, Default)]
pub struct RenderQueue {
    pub commands: Vec<DrawCommand>,
}
