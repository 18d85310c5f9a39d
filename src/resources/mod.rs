//! ECS resources shared by the simulation systems.
//!
//! Submodules overview:
//! - [`animationstore`] – reusable animation definitions keyed by string IDs
//! - [`gameconfig`] – INI-backed game settings with safe defaults
//! - [`input`] – per-tick directional input state fed by the platform adapter
//! - [`renderqueue`] – draw commands produced by the render pass
//! - [`rng`] – seedable random source for enemy spawning
//! - [`screensize`] – viewport dimensions in pixels
//! - [`spawner`] – enemy spawn cadence state
//! - [`worldsignals`] – global flag store (exit request and friends)
//! - [`worldtime`] – elapsed/delta simulation time

pub mod animationstore;
pub mod gameconfig;
pub mod input;
pub mod renderqueue;
pub mod rng;
pub mod screensize;
pub mod spawner;
pub mod worldsignals;
pub mod worldtime;
