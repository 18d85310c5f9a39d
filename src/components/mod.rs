//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world.
//!
//! Submodules overview:
//! - [`animation`] – playback state for sprite-sheet animations
//! - [`group`] – tag component for grouping entities by name
//! - [`health`] – hit points for the player ship
//! - [`inputcontrolled`] – input-driven movement intent
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`offscreen`] – marker for entities culled past the left viewport edge
//! - [`rigidbody`] – simple kinematic body storing velocity
//! - [`scale`] – 2D scale factor for sprites
//! - [`screenbound`] – marker for entities clamped inside the viewport
//! - [`sprite`] – 2D sprite rendering component
//! - [`tint`] – color modulation for rendering
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animation;
pub mod group;
pub mod health;
pub mod inputcontrolled;
pub mod mapposition;
pub mod offscreen;
pub mod rigidbody;
pub mod scale;
pub mod screenbound;
pub mod sprite;
pub mod tint;
pub mod zindex;
