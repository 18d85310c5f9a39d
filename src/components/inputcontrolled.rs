//! Input-controlled movement component.
//!
//! [`InputControlled`] describes how an entity responds to directional input.
//! The system in [`crate::systems::inputcontroller`] reads the shared input
//! state and applies the matching step vectors to the entity's position.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Movement intent derived from player directional input.
///
/// Each field stores the position step to apply, per tick, while the
/// corresponding directional input is active. The analog stick applies the
/// right/up steps scaled by its axis values, so all contributions share one
/// speed setting.
#[derive(Component, Clone, Copy, Debug)]
pub struct InputControlled {
    /// Step when moving up.
    pub up_step: Vec2,
    /// Step when moving down.
    pub down_step: Vec2,
    /// Step when moving left.
    pub left_step: Vec2,
    /// Step when moving right.
    pub right_step: Vec2,
}

impl InputControlled {
    /// Create an InputControlled component with explicit step vectors.
    pub fn new(up: Vec2, down: Vec2, left: Vec2, right: Vec2) -> Self {
        Self {
            up_step: up,
            down_step: down,
            left_step: left,
            right_step: right,
        }
    }

    /// Axis-aligned steps of `speed` pixels per tick in each direction.
    /// Screen space puts +Y downward, so "up" is negative Y.
    pub fn from_speed(speed: f32) -> Self {
        Self::new(
            Vec2::new(0.0, -speed),
            Vec2::new(0.0, speed),
            Vec2::new(-speed, 0.0),
            Vec2::new(speed, 0.0),
        )
    }
}
