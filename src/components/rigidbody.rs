//! Kinematic body component.
//!
//! [`RigidBody`] stores the velocity the movement system integrates into
//! [`MapPosition`](super::mapposition::MapPosition) each tick. The `frozen`
//! flag temporarily disables movement for an entity whose position is being
//! driven externally.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Kinematic body storing velocity in pixels per second.
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    /// Current velocity in pixels per second.
    pub velocity: Vec2,
    /// When true, the movement system skips this entity.
    pub frozen: bool,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody with zero velocity.
    pub fn new() -> Self {
        Self {
            velocity: Vec2::ZERO,
            frozen: false,
        }
    }

    /// Create a RigidBody with an initial velocity.
    pub fn with_velocity(velocity: Vec2) -> Self {
        Self {
            velocity,
            frozen: false,
        }
    }

    /// Set the velocity of the RigidBody.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Get the current velocity.
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Translate the RigidBody velocity by a delta vector.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.velocity.x += dx;
        self.velocity.y += dy;
    }

    /// Freeze the rigid body, preventing the movement system from updating it.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Unfreeze the rigid body, allowing the movement system to update it.
    pub fn unfreeze(&mut self) {
        self.frozen = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_rigidbody_new() {
        let rb = RigidBody::new();
        assert!(approx_eq(rb.velocity.x, 0.0));
        assert!(approx_eq(rb.velocity.y, 0.0));
        assert!(!rb.frozen);
    }

    #[test]
    fn test_with_velocity() {
        let rb = RigidBody::with_velocity(Vec2::new(-360.0, 0.0));
        assert!(approx_eq(rb.velocity.x, -360.0));
        assert!(approx_eq(rb.velocity.y, 0.0));
    }

    #[test]
    fn test_set_velocity() {
        let mut rb = RigidBody::new();
        rb.set_velocity(Vec2::new(100.0, 200.0));
        assert!(approx_eq(rb.velocity().x, 100.0));
        assert!(approx_eq(rb.velocity().y, 200.0));
    }

    #[test]
    fn test_translate() {
        let mut rb = RigidBody::with_velocity(Vec2::new(10.0, 20.0));
        rb.translate(5.0, -3.0);
        assert!(approx_eq(rb.velocity.x, 15.0));
        assert!(approx_eq(rb.velocity.y, 17.0));
    }

    #[test]
    fn test_freeze_unfreeze() {
        let mut rb = RigidBody::new();
        rb.freeze();
        assert!(rb.frozen);
        rb.unfreeze();
        assert!(!rb.frozen);
    }
}
