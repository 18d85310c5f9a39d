use bevy_ecs::prelude::Component;

/// Marker: the entity's position is clamped inside the viewport each tick,
/// accounting for its sprite size.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct ScreenBound;
