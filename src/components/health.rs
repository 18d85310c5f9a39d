use bevy_ecs::prelude::Component;

/// Hit points for the player ship.
///
/// Tracked from session start; nothing in the current simulation decrements
/// it (damage resolution lives outside this core).
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Health {
    pub current: i32,
}

impl Health {
    pub fn new(current: i32) -> Self {
        Self { current }
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100)
    }
}
