use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Sprite is identified by a texture key, its frame size in pixels and an
/// offset into the sheet. The offset is used to select the correct frame
/// from the spritesheet and is rewritten by the animation system each tick.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub offset: Vec2,
}
