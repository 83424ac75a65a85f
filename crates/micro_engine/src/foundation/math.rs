//! Math utilities and types
//!
//! Provides the fundamental math types for 2D games.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Transform representing position, size, and draw depth
///
/// `size` defines an axis-aligned rectangle anchored at `position`, with
/// y growing downward to match the screen convention of the renderer.
/// `depth` is a render-order hint only; collision detection never reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Top-left corner of the rectangle in world space
    pub position: Vec2,

    /// Rectangle extent along each axis
    pub size: Vec2,

    /// Draw-order hint; larger depths draw on top
    pub depth: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            size: Vec2::new(20.0, 20.0),
            depth: 0.0,
        }
    }
}

impl Transform {
    /// Create a transform with only position
    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform from position and size
    pub fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            depth: 0.0,
        }
    }

    /// Whether the rectangle has positive area on both axes
    ///
    /// Zero or negative sizes describe a degenerate rectangle, which the
    /// collision engine treats as never colliding.
    pub fn has_area(&self) -> bool {
        self.size.x > 0.0 && self.size.y > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vec2_arithmetic() {
        let v = Vec2::new(3.0, 4.0) + Vec2::new(1.0, -2.0) * 0.5;

        assert_relative_eq!(v.x, 3.5);
        assert_relative_eq!(v.y, 3.0);
        assert_relative_eq!(Vec2::new(3.0, 4.0).norm(), 5.0);
    }

    #[test]
    fn test_transform_default() {
        let transform = Transform::default();

        assert_eq!(transform.position, Vec2::zeros());
        assert_eq!(transform.size, Vec2::new(20.0, 20.0));
        assert_eq!(transform.depth, 0.0);
    }

    #[test]
    fn test_transform_from_position() {
        let position = Vec2::new(3.0, 4.0);
        let transform = Transform::from_position(position);

        assert_eq!(transform.position, position);
        assert_eq!(transform.size, Vec2::new(20.0, 20.0));
    }

    #[test]
    fn test_has_area() {
        assert!(Transform::default().has_area());
        assert!(!Transform::from_position_size(Vec2::zeros(), Vec2::new(0.0, 20.0)).has_area());
        assert!(!Transform::from_position_size(Vec2::zeros(), Vec2::new(20.0, -1.0)).has_area());
    }
}
