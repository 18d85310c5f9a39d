//! Viewport bounds clamping.
//!
//! Keeps [`ScreenBound`](crate::components::screenbound::ScreenBound)
//! entities fully inside the viewport: after input has moved them, their
//! position is clamped to `[0, w - width] x [0, h - height]` where the size
//! is the sprite frame size times the entity scale.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::scale::Scale;
use crate::components::screenbound::ScreenBound;
use crate::components::sprite::Sprite;
use crate::resources::screensize::ScreenSize;

/// Clamp every screen-bound entity inside the viewport.
pub fn clamp_to_screen(
    mut query: Query<(&mut MapPosition, &Sprite, Option<&Scale>), With<ScreenBound>>,
    screen: Res<ScreenSize>,
) {
    for (mut position, sprite, scale) in query.iter_mut() {
        let scale = scale.copied().unwrap_or_default().scale;
        let width = sprite.width * scale.x;
        let height = sprite.height * scale.y;

        // Degenerate viewports clamp to the origin rather than panicking.
        let max_x = (screen.w as f32 - width).max(0.0);
        let max_y = (screen.h as f32 - height).max(0.0);

        position.pos.x = position.pos.x.clamp(0.0, max_x);
        position.pos.y = position.pos.y.clamp(0.0, max_y);
    }
}
