//! Color tint component for rendering sprites.
//!
//! The [`Tint`] component applies color modulation to entities during the
//! render pass: it replaces [`Color::WHITE`] in the emitted draw commands.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// RGBA color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Color tint component for rendering modulation.
///
/// When attached to an entity with a [`Sprite`](crate::components::sprite::Sprite),
/// the tint color replaces [`Color::WHITE`] in draw commands.
#[derive(Component, Clone, Debug, Copy)]
pub struct Tint {
    pub color: Color,
}

impl Tint {
    /// Create a new Tint with the specified RGBA values.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            color: Color::new(r, g, b, a),
        }
    }

    /// Multiply this tint with another color (component-wise).
    pub fn multiply(&self, other: Color) -> Color {
        Color::new(
            ((self.color.r as u16 * other.r as u16) / 255) as u8,
            ((self.color.g as u16 * other.g as u16) / 255) as u8,
            ((self.color.b as u16 * other.b as u16) / 255) as u8,
            ((self.color.a as u16 * other.a as u16) / 255) as u8,
        )
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let t = Tint::new(100, 150, 200, 255);
        assert_eq!(t.color.r, 100);
        assert_eq!(t.color.g, 150);
        assert_eq!(t.color.b, 200);
        assert_eq!(t.color.a, 255);
    }

    #[test]
    fn test_default_is_white() {
        let t = Tint::default();
        assert_eq!(t.color, Color::WHITE);
    }

    #[test]
    fn test_multiply_with_white_is_identity() {
        let t = Tint::new(100, 150, 200, 255);
        let result = t.multiply(Color::WHITE);
        assert_eq!(result, Color::new(100, 150, 200, 255));
    }

    #[test]
    fn test_multiply_with_black_zeroes_out() {
        let t = Tint::new(100, 150, 200, 255);
        let result = t.multiply(Color::new(0, 0, 0, 0));
        assert_eq!(result, Color::new(0, 0, 0, 0));
    }

    #[test]
    fn test_multiply_partial_values() {
        let t = Tint::new(255, 255, 255, 255);
        let result = t.multiply(Color::new(128, 64, 32, 255));
        assert_eq!(result, Color::new(128, 64, 32, 255));
    }
}
