//! Off-screen culling system.
//!
//! Entities marked [`DespawnOffscreen`](crate::components::offscreen::DespawnOffscreen)
//! leave play in one of two ways:
//!
//! 1. Their position crosses the left viewport edge entirely
//!    (`x < -frame width`)
//! 2. Their non-looping animation reaches its final frame
//!
//! Despawns are deferred through [`Commands`] and applied before the render
//! pass of the same tick, so a culled entity is never drawn.

use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::mapposition::MapPosition;
use crate::components::offscreen::DespawnOffscreen;
use crate::components::sprite::Sprite;

/// Despawn marked entities that have left play.
pub fn offscreen_cull(
    query: Query<(Entity, &MapPosition, &Sprite, Option<&Animation>), With<DespawnOffscreen>>,
    mut commands: Commands,
) {
    for (entity, position, sprite, animation) in query.iter() {
        let past_left_edge = position.pos.x < -sprite.width;
        let animation_done = animation.is_some_and(|a| a.finished);

        if past_left_edge || animation_done {
            log::debug!("culling entity {entity} at x={}", position.pos.x);
            commands.entity(entity).try_despawn();
        }
    }
}
