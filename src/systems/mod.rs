//! Simulation systems.
//!
//! This module groups all ECS systems that advance one tick of the game.
//!
//! Submodules overview
//! - [`animation`] – advance sprite animations and update the visible frame
//! - [`bounds`] – clamp screen-bound entities inside the viewport
//! - [`input`] – observe the exit request in the input state
//! - [`inputcontroller`] – translate input state into player position steps
//! - [`movement`] – integrate positions from rigid body velocities and time
//! - [`offscreen`] – despawn entities past the left edge of play
//! - [`render`] – emit the ordered draw-command list for the tick
//! - [`spawner`] – spawn enemies on a fixed cadence
//! - [`time`] – update simulation time and delta

pub mod animation;
pub mod bounds;
pub mod input;
pub mod inputcontroller;
pub mod movement;
pub mod offscreen;
pub mod render;
pub mod spawner;
pub mod time;
