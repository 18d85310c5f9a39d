//! Input-to-position controller.
//!
//! Reads the shared [`InputState`](crate::resources::input::InputState) and
//! applies directional position steps to entities with an
//! [`InputControlled`](crate::components::inputcontrolled::InputControlled)
//! component. Digital directions and the analog stick are additive within
//! the same tick, so a held key and a deflected stick stack.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::resources::input::InputState;

/// Move each controlled entity by the sum of its active input steps.
pub fn input_controller(
    mut query: Query<(&InputControlled, &mut MapPosition)>,
    input_state: Res<InputState>,
) {
    for (controlled, mut position) in query.iter_mut() {
        let mut step = Vec2::ZERO;

        if input_state.direction_up.active {
            step += controlled.up_step;
        }
        if input_state.direction_down.active {
            step += controlled.down_step;
        }
        if input_state.direction_left.active {
            step += controlled.left_step;
        }
        if input_state.direction_right.active {
            step += controlled.right_step;
        }

        // Analog contribution shares the digital step vectors: full right
        // deflection equals the right step, stick up equals the up step.
        step += controlled.right_step * input_state.stick.x;
        step += controlled.up_step * input_state.stick.y;

        position.pos += step;
    }
}
