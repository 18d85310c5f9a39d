//! Render pass.
//!
//! The core does not own a graphics device; this system turns the visible
//! sprites into an ordered list of [`DrawCommand`]s in the
//! [`RenderQueue`](crate::resources::renderqueue::RenderQueue) resource.
//! The platform adapter replays the list against its real backend.
//!
//! Commands are stably sorted by [`ZIndex`], so the player layer (0) always
//! precedes the enemy layer (1).

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::components::zindex::ZIndex;
use crate::resources::renderqueue::{DrawCommand, Rect, RenderQueue};

/// Rebuild the draw-command list for this tick.
pub fn render(
    query: Query<(&Sprite, &MapPosition, &ZIndex, Option<&Tint>, Option<&Scale>)>,
    mut queue: ResMut<RenderQueue>,
) {
    queue.commands.clear();

    let mut to_draw: Vec<(&Sprite, &MapPosition, ZIndex, Tint, Scale)> = query
        .iter()
        .map(|(sprite, position, z, tint, scale)| {
            (
                sprite,
                position,
                *z,
                tint.copied().unwrap_or_default(),
                scale.copied().unwrap_or_default(),
            )
        })
        .collect();

    to_draw.sort_by_key(|(_, _, z, _, _)| *z);

    for (sprite, position, z, tint, scale) in to_draw {
        // Source rect selects a frame from the spritesheet
        let source = Rect {
            x: sprite.offset.x,
            y: sprite.offset.y,
            width: sprite.width,
            height: sprite.height,
        };

        queue.commands.push(DrawCommand {
            tex_key: sprite.tex_key.clone(),
            source,
            dest: position.pos,
            tint: tint.color,
            scale: scale.scale,
            z: z.0,
        });
    }
}
