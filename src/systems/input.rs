//! Input observation systems.
//!
//! The platform adapter feeds samples into
//! [`InputState`](crate::resources::input::InputState) before the schedule
//! runs; [`check_exit`] turns an active back input into the `quit_game`
//! world flag that [`GameLoop::should_exit`](crate::game::GameLoop::should_exit)
//! reports.

use bevy_ecs::prelude::*;

use crate::resources::input::InputState;
use crate::resources::worldsignals::WorldSignals;

/// Raise the `quit_game` flag while the back input is active.
pub fn check_exit(input: Res<InputState>, mut signals: ResMut<WorldSignals>) {
    if input.action_back.active {
        signals.set_flag("quit_game");
    }
}
