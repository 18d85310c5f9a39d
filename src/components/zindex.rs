use bevy_ecs::prelude::Component;

/// Rendering order hint: lower values are drawn first.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);
