//! Starmine simulation library.
//!
//! A minimal 2D arcade-shooter core: one player-controlled ship, a cadence
//! of drifting enemy mines and frame-timed sprite animation, built as an ECS
//! on `bevy_ecs`. The crate owns the simulation only — windowing, textures
//! and input devices live in a platform adapter that feeds
//! [`GameLoop::tick`](crate::game::GameLoop::tick) elapsed time and input
//! samples and replays the returned draw-command list.
//!
//! - [`components`] – ECS components (position, sprite, animation, input
//!   control, lifecycle markers)
//! - [`game`] – the explicit [`GameLoop`](crate::game::GameLoop) object
//! - [`resources`] – shared state (time, input, spawner cadence, RNG,
//!   render queue, config)
//! - [`systems`] – per-tick systems (input, clamping, spawning, movement,
//!   animation, culling, render)

pub mod components;
pub mod game;
pub mod resources;
pub mod systems;
