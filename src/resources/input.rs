//! Per-tick directional input resource.
//!
//! The platform adapter polls its devices and hands the core one
//! [`InputSample`] per tick; [`InputState::apply_sample`] folds it in,
//! tracking press/release edges. Systems read the resulting [`InputState`].
//! Key and button bindings live on the platform side — by the time a sample
//! reaches the core, keyboard and d-pad have already been merged into the
//! four directional booleans.

use bevy_ecs::prelude::*;
use glam::Vec2;

/// Boolean input state with per-tick edge tracking.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolState {
    /// Whether the input is currently active this tick.
    pub active: bool,
    /// Whether the input became active this tick.
    pub just_pressed: bool,
    /// Whether the input was released this tick.
    pub just_released: bool,
}

impl BoolState {
    fn update(&mut self, now: bool) {
        self.just_pressed = now && !self.active;
        self.just_released = !now && self.active;
        self.active = now;
    }
}

/// Raw input snapshot for one tick, as delivered by the platform adapter.
///
/// `stick` components are expected in `[-1, 1]`, +X right and +Y up (pushing
/// the stick up moves the ship up).
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSample {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub back: bool,
    pub stick: Vec2,
}

/// Resource capturing the per-tick input state relevant to gameplay.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    pub direction_up: BoolState,
    pub direction_down: BoolState,
    pub direction_left: BoolState,
    pub direction_right: BoolState,
    /// Exit request (escape key / back button on the platform side).
    pub action_back: BoolState,
    /// Analog stick, components in `[-1, 1]`.
    pub stick: Vec2,
}

impl InputState {
    /// Fold one platform sample into the state, updating edge flags.
    pub fn apply_sample(&mut self, sample: &InputSample) {
        self.direction_up.update(sample.up);
        self.direction_down.update(sample.down);
        self.direction_left.update(sample.left);
        self.direction_right.update(sample.right);
        self.action_back.update(sample.back);
        self.stick = sample.stick;
    }
}
