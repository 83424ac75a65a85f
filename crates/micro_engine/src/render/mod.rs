//! Rendering facade
//!
//! The engine draws every visible game object as a filled, axis-aligned
//! rectangle. Backends implement [`Renderer`]; the engine hands them a
//! depth-sorted draw list once per frame and otherwise knows nothing about
//! how pixels reach the screen.

pub mod pixels_backend;

pub use pixels_backend::PixelsRenderer;

use crate::foundation::math::{Transform, Vec2};
use crate::input::EventQueue;
use thiserror::Error;

/// An RGBA color with 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl Color {
    /// Opaque red
    pub const RED: Self = Self::rgb(220, 40, 40);
    /// Opaque green
    pub const GREEN: Self = Self::rgb(40, 200, 80);
    /// Opaque blue
    pub const BLUE: Self = Self::rgb(50, 90, 220);
    /// Opaque orange
    pub const ORANGE: Self = Self::rgb(240, 150, 30);
    /// Opaque white
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Create an opaque color from RGB channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Visual appearance of a game object
///
/// Cosmetic only; the collision engine never reads it. Invisible objects
/// still collide but are skipped when the draw list is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Material {
    /// Fill color for the object's rectangle
    pub color: Color,
    /// Whether the object is drawn at all
    pub visible: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::RED,
            visible: true,
        }
    }
}

impl Material {
    /// Create a visible material with the given color
    pub fn from_color(color: Color) -> Self {
        Self {
            color,
            visible: true,
        }
    }
}

/// One entry of the per-frame draw list
#[derive(Debug, Clone, Copy)]
pub struct RenderRect {
    /// Top-left corner in world space
    pub position: Vec2,
    /// Rectangle extent
    pub size: Vec2,
    /// Draw-order hint; the engine sorts the list by this before rendering
    pub depth: f32,
    /// Fill color
    pub color: Color,
}

impl RenderRect {
    /// Build a draw-list entry from a transform and material
    pub fn new(transform: &Transform, material: &Material) -> Self {
        Self {
            position: transform.position,
            size: transform.size,
            depth: transform.depth,
            color: material.color,
        }
    }
}

/// Outcome of pumping backend events at the top of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// Keep running
    Continue,
    /// The user asked to close the window; the main loop should return
    CloseRequested,
}

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// Window or surface creation failed
    #[error("Failed to create render surface: {0}")]
    SurfaceCreation(String),

    /// Presenting a frame failed
    #[error("Failed to present frame: {0}")]
    Present(String),
}

/// A rendering backend
///
/// Called exactly once per frame, in order: [`Renderer::begin_frame`] before
/// object updates (to pump native events into the input queue), then
/// [`Renderer::render_scene`] after collision checking.
pub trait Renderer {
    /// Pump native window events, forwarding key transitions into `events`
    ///
    /// Headless backends simply return [`FrameStatus::Continue`].
    fn begin_frame(&mut self, events: &EventQueue) -> FrameStatus {
        let _ = events;
        FrameStatus::Continue
    }

    /// Draw one frame from the given depth-sorted draw list
    ///
    /// `view_centre` is the world-space point mapped to the window origin.
    fn render_scene(&mut self, rects: &[RenderRect], view_centre: Vec2) -> Result<(), RenderError>;
}

/// Renderer that draws nothing
///
/// Useful for tests and for running game logic headless.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render_scene(&mut self, _rects: &[RenderRect], _view_centre: Vec2) -> Result<(), RenderError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_defaults_to_visible_red() {
        let material = Material::default();
        assert_eq!(material.color, Color::RED);
        assert!(material.visible);
    }

    #[test]
    fn test_render_rect_copies_transform_fields() {
        let transform = Transform {
            position: Vec2::new(5.0, 6.0),
            size: Vec2::new(7.0, 8.0),
            depth: 2.0,
        };
        let rect = RenderRect::new(&transform, &Material::from_color(Color::BLUE));

        assert_eq!(rect.position, transform.position);
        assert_eq!(rect.size, transform.size);
        assert_eq!(rect.depth, 2.0);
        assert_eq!(rect.color, Color::BLUE);
    }

    #[test]
    fn test_null_renderer_accepts_empty_scene() {
        let mut renderer = NullRenderer;
        assert!(renderer.render_scene(&[], Vec2::zeros()).is_ok());
        assert_eq!(
            renderer.begin_frame(&crate::input::EventQueue::new()),
            FrameStatus::Continue
        );
    }
}
