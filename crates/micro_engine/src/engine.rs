//! Core engine implementation
//!
//! The engine owns every subsystem and drives the frame loop: wait for the
//! minimum frame interval, pump backend events, snapshot input, update
//! every object in registration order, reconcile collisions, render. The
//! sequence repeats until the backend reports a close request.

use crate::audio::AudioEngine;
use crate::config::EngineConfig;
use crate::foundation::math::Vec2;
use crate::foundation::time::FrameClock;
use crate::input::InputEngine;
use crate::physics::CollisionEngine;
use crate::render::{FrameStatus, RenderError, Renderer};
use crate::scene::{Behaviour, GameObjectId, Scene, Services};
use std::time::Duration;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Rendering error
    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Main engine struct
///
/// Coordinates the scene, input, audio, collision, and rendering
/// subsystems and owns the frame clock.
pub struct Engine {
    scene: Scene,
    input: InputEngine,
    audio: AudioEngine,
    physics: CollisionEngine,
    renderer: Box<dyn Renderer>,
    clock: FrameClock,
    view_centre: Vec2,
    running: bool,
}

impl Engine {
    /// Create a new engine instance with the given renderer backend
    pub fn new(config: EngineConfig, renderer: Box<dyn Renderer>) -> Self {
        log::info!(
            "Initializing engine ({}x{}, min frame interval {} ms)",
            config.window.width,
            config.window.height,
            config.timing.min_frame_interval_ms
        );

        let audio = if config.audio.enabled {
            AudioEngine::new()
        } else {
            AudioEngine::disabled()
        };
        let clock = FrameClock::new(
            Duration::from_millis(config.timing.min_frame_interval_ms),
            config.timing.max_frame_delta_ms.map(Duration::from_millis),
        );

        Self {
            scene: Scene::new(),
            input: InputEngine::new(),
            audio,
            physics: CollisionEngine::new(),
            renderer,
            clock,
            view_centre: Vec2::zeros(),
            running: false,
        }
    }

    /// Register a game object
    ///
    /// Objects must be registered before [`Engine::run`]; their `start`
    /// hooks run during the start phase, in registration order.
    pub fn add_object(&mut self, name: impl Into<String>, behaviour: impl Behaviour) -> GameObjectId {
        self.scene.add_object(name, behaviour)
    }

    /// Get the scene
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Get mutable access to the scene
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Get the input engine
    pub fn input(&self) -> &InputEngine {
        &self.input
    }

    /// Get mutable access to the audio engine
    pub fn audio_mut(&mut self) -> &mut AudioEngine {
        &mut self.audio
    }

    /// Get the collision engine
    pub fn physics(&self) -> &CollisionEngine {
        &self.physics
    }

    /// Set the world-space point mapped to the window origin
    pub fn set_view_centre(&mut self, centre: Vec2) {
        self.view_centre = centre;
    }

    /// Request that the loop stop after the current frame
    pub fn quit(&mut self) {
        log::info!("Engine shutdown requested");
        self.running = false;
    }

    /// Run the start phase and then the frame loop
    ///
    /// Returns when the renderer backend reports a close request or
    /// [`Engine::quit`] was called from within a frame.
    pub fn run(&mut self) -> Result<(), EngineError> {
        self.start_phase();

        log::info!("Starting main loop...");
        self.running = true;
        while self.running {
            if self.step_frame()? == FrameStatus::CloseRequested {
                self.running = false;
            }
        }

        log::info!(
            "Main loop finished after {} frames ({:.1} fps average)",
            self.clock.frame_count(),
            self.clock.average_fps()
        );
        Ok(())
    }

    /// Run every object's `start` hook, in registration order
    ///
    /// Called once by [`Engine::run`] before the first frame; exposed so
    /// embedders driving [`Engine::step_frame`] themselves can do the same.
    pub fn start_phase(&mut self) {
        log::debug!("Start phase: {} objects", self.scene.len());
        let mut services = Services {
            input: &self.input,
            audio: &mut self.audio,
        };
        self.scene.run_starts(&mut services);
    }

    /// Advance exactly one frame
    ///
    /// Blocks until the minimum frame interval has elapsed, then runs the
    /// frame sequence: event pump, input snapshot, object updates,
    /// collision reconciliation, render.
    pub fn step_frame(&mut self) -> Result<FrameStatus, EngineError> {
        let elapsed = self.clock.wait_for_frame();

        let queue = self.input.queue();
        let status = self.renderer.begin_frame(&queue);

        self.input.start_frame();

        let mut services = Services {
            input: &self.input,
            audio: &mut self.audio,
        };
        self.scene.run_updates(elapsed, &mut services);
        self.physics.check_collisions(&mut self.scene, &mut services);

        let rects = self.scene.render_rects();
        self.renderer.render_scene(&rects, self.view_centre)?;

        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AudioConfig, TimingConfig, WindowConfig};
    use crate::render::NullRenderer;

    fn quick_config() -> EngineConfig {
        EngineConfig {
            window: WindowConfig::default(),
            timing: TimingConfig {
                min_frame_interval_ms: 1,
                max_frame_delta_ms: Some(250),
            },
            audio: AudioConfig { enabled: false },
        }
    }

    #[test]
    fn test_empty_scene_steps_without_error() {
        let mut engine = Engine::new(quick_config(), Box::new(NullRenderer));
        engine.start_phase();
        for _ in 0..3 {
            assert_eq!(engine.step_frame().unwrap(), FrameStatus::Continue);
        }
        assert!(engine.scene().is_empty());
    }

    #[test]
    fn test_elapsed_time_has_floor() {
        use std::sync::{Arc, Mutex};

        struct Probe(Arc<Mutex<Vec<f32>>>);
        impl Behaviour for Probe {
            fn update(&mut self, _ctx: &mut crate::scene::ObjectContext<'_>, elapsed: f32) {
                self.0.lock().unwrap().push(elapsed);
            }
        }

        let observed = Arc::new(Mutex::new(Vec::new()));
        let mut config = quick_config();
        config.timing.min_frame_interval_ms = 10;
        let mut engine = Engine::new(config, Box::new(NullRenderer));
        engine.add_object("probe", Probe(Arc::clone(&observed)));
        engine.start_phase();
        for _ in 0..5 {
            engine.step_frame().unwrap();
        }

        let observed = observed.lock().unwrap();
        assert_eq!(observed.len(), 5);
        for &elapsed in observed.iter() {
            assert!(elapsed >= 0.010);
        }
    }
}
