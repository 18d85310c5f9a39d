use bevy_ecs::prelude::Component;

/// Marker: the entity is removed once it leaves play.
///
/// The cull system despawns the entity when its position has fully crossed
/// the left viewport edge (`x < -frame width`) or when its non-looping
/// animation has finished.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct DespawnOffscreen;
