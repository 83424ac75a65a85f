//! Behaviours for the movement demo

use micro_engine::prelude::*;

const MOVE_SPEED: f32 = 100.0;

/// A stationary obstacle in the middle of the window
pub struct Block;

impl Behaviour for Block {
    fn start(&mut self, ctx: &mut ObjectContext<'_>) {
        ctx.transform.position = Vec2::new(400.0, 300.0);
        ctx.transform.size = Vec2::new(60.0, 60.0);
        ctx.material.color = Color::GREEN;
    }
}

/// An arrow-key-controlled square
///
/// Plays a boing whenever it runs into the block. Movement is not blocked
/// by contact; the demo only exercises input and enter events.
pub struct Mover;

impl Mover {
    /// Create a mover
    pub fn new() -> Self {
        Self
    }
}

impl Default for Mover {
    fn default() -> Self {
        Self::new()
    }
}

impl Behaviour for Mover {
    fn start(&mut self, ctx: &mut ObjectContext<'_>) {
        ctx.transform.position = Vec2::new(100.0, 100.0);
        ctx.transform.size = Vec2::new(40.0, 40.0);
        ctx.material.color = Color::BLUE;

        if let Err(e) = ctx.audio.add_clip("boing", "media/boing2.wav") {
            log::warn!("Mover sound unavailable: {e}");
        }
    }

    fn update(&mut self, ctx: &mut ObjectContext<'_>, elapsed: f32) {
        let mut direction = Vec2::zeros();
        if ctx.input.get_key(KeyCode::Left) {
            direction.x -= 1.0;
        }
        if ctx.input.get_key(KeyCode::Right) {
            direction.x += 1.0;
        }
        if ctx.input.get_key(KeyCode::Up) {
            direction.y -= 1.0;
        }
        if ctx.input.get_key(KeyCode::Down) {
            direction.y += 1.0;
        }
        ctx.transform.position += direction * MOVE_SPEED * elapsed;
    }

    fn on_collision_enter(&mut self, ctx: &mut ObjectContext<'_>, other: &ObjectSnapshot) {
        log::info!("Bumped into {}", other.name);
        ctx.audio.play_one_shot("boing");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use micro_engine::audio::AudioEngine;
    use micro_engine::foundation::math::Transform;
    use micro_engine::input::{InputEngine, KeyEvent};
    use micro_engine::scene::GameObjectId;

    fn update_with_keys(codes: &[KeyCode]) -> Transform {
        let mut input = InputEngine::new();
        for &code in codes {
            input.queue().push(KeyEvent { code, pressed: true });
        }
        input.start_frame();

        let mut transform = Transform::default();
        let mut material = Material::default();
        let mut audio = AudioEngine::disabled();
        let mut ctx = ObjectContext {
            id: GameObjectId::default(),
            name: "mover",
            transform: &mut transform,
            material: &mut material,
            input: &input,
            audio: &mut audio,
        };
        Mover::new().update(&mut ctx, 0.5);
        transform
    }

    #[test]
    fn test_arrow_keys_steer_the_mover() {
        let t = update_with_keys(&[KeyCode::Right]);
        assert_eq!(t.position, Vec2::new(50.0, 0.0));

        let t = update_with_keys(&[KeyCode::Up]);
        assert_eq!(t.position, Vec2::new(0.0, -50.0));

        let t = update_with_keys(&[KeyCode::Left, KeyCode::Down]);
        assert_eq!(t.position, Vec2::new(-50.0, 50.0));
    }

    #[test]
    fn test_opposing_keys_cancel_out() {
        let t = update_with_keys(&[KeyCode::Left, KeyCode::Right]);
        assert_eq!(t.position, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_no_keys_no_motion() {
        let t = update_with_keys(&[]);
        assert_eq!(t.position, Vec2::new(0.0, 0.0));
    }
}
