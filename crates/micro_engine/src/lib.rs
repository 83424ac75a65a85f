//! # Micro Engine
//!
//! A minimal 2D game engine for small, single-process games: a frame
//! scheduler with a fixed minimum inter-frame interval, axis-aligned
//! bounding-box collision detection with enter/exit event semantics, and
//! thin facades over rendering, keyboard input, and one-shot audio.
//!
//! Game objects are registered once and live for the lifetime of the scene.
//! Each object pairs a [`foundation::math::Transform`] and a
//! [`render::Material`] with a [`scene::Behaviour`] implementation that
//! overrides whichever lifecycle hooks it needs.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use micro_engine::prelude::*;
//!
//! struct Block;
//!
//! impl Behaviour for Block {
//!     fn start(&mut self, ctx: &mut ObjectContext<'_>) {
//!         ctx.transform.position = Vec2::new(100.0, 100.0);
//!         ctx.transform.size = Vec2::new(40.0, 40.0);
//!     }
//!
//!     fn update(&mut self, ctx: &mut ObjectContext<'_>, elapsed: f32) {
//!         ctx.transform.position.x += 50.0 * elapsed;
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     micro_engine::foundation::logging::init();
//!     let config = EngineConfig::default();
//!     let renderer = PixelsRenderer::new(&config.window)?;
//!     let mut engine = Engine::new(config, Box::new(renderer));
//!     engine.add_object("block", Block);
//!     engine.run()?;
//!     Ok(())
//! }
//! ```

pub mod foundation;
pub mod scene;
pub mod physics;
pub mod input;
pub mod audio;
pub mod render;
pub mod config;

mod engine;

pub use engine::{Engine, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Engine, EngineError,
        audio::AudioEngine,
        config::{Config, EngineConfig, TimingConfig, WindowConfig},
        foundation::math::{Transform, Vec2},
        input::{InputEngine, KeyCode},
        render::{Color, FrameStatus, Material, NullRenderer, PixelsRenderer, RenderRect, Renderer},
        scene::{Behaviour, GameObjectId, ObjectContext, ObjectSnapshot, Scene},
    };
}
