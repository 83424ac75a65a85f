//! The ball: constant-speed diagonal movement, bounces off whatever it hits

use micro_engine::prelude::*;

const BALL_SIZE: f32 = 40.0;
const BALL_SPEED: f32 = 120.0;

/// Ball behaviour
///
/// Reverses its y-velocity on the top and bottom walls and its x-velocity
/// on everything else (side walls and the paddle), playing a blip on every
/// hit. The bounce policy is the ball's, not the engine's.
pub struct Ball {
    velocity: Vec2,
}

impl Ball {
    /// Create a ball heading up-left
    pub fn new() -> Self {
        let root_2 = 2.0_f32.sqrt();
        Self {
            velocity: Vec2::new(-root_2, -root_2),
        }
    }

    #[cfg(test)]
    fn velocity(&self) -> Vec2 {
        self.velocity
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

impl Behaviour for Ball {
    fn start(&mut self, ctx: &mut ObjectContext<'_>) {
        ctx.transform.position = Vec2::new(crate::FIELD_WIDTH / 2.0, crate::FIELD_HEIGHT / 2.0);
        ctx.transform.size = Vec2::new(BALL_SIZE, BALL_SIZE);
        ctx.material.color = Color::RED;

        if let Err(e) = ctx.audio.add_clip("blip", "media/blip.wav") {
            log::warn!("Ball sound unavailable: {e}");
        }
    }

    fn update(&mut self, ctx: &mut ObjectContext<'_>, elapsed: f32) {
        ctx.transform.position += self.velocity * BALL_SPEED * elapsed;
    }

    fn on_collision_enter(&mut self, ctx: &mut ObjectContext<'_>, other: &ObjectSnapshot) {
        ctx.audio.play_one_shot("blip");

        if other.name == "top" || other.name == "bottom" {
            self.velocity.y = -self.velocity.y;
        } else {
            self.velocity.x = -self.velocity.x;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use micro_engine::audio::AudioEngine;
    use micro_engine::foundation::math::Transform;
    use micro_engine::input::InputEngine;
    use micro_engine::scene::GameObjectId;

    fn snapshot(name: &str) -> ObjectSnapshot {
        ObjectSnapshot {
            id: GameObjectId::default(),
            name: name.to_string(),
            transform: Transform::default(),
        }
    }

    fn with_ctx(f: impl FnOnce(&mut ObjectContext<'_>)) {
        let mut transform = Transform::default();
        let mut material = Material::default();
        let input = InputEngine::new();
        let mut audio = AudioEngine::disabled();
        let mut ctx = ObjectContext {
            id: GameObjectId::default(),
            name: "ball",
            transform: &mut transform,
            material: &mut material,
            input: &input,
            audio: &mut audio,
        };
        f(&mut ctx);
    }

    #[test]
    fn test_top_and_bottom_walls_flip_y() {
        let mut ball = Ball::new();
        let before = ball.velocity();

        with_ctx(|ctx| {
            ball.on_collision_enter(ctx, &snapshot("top"));
        });
        assert_eq!(ball.velocity().x, before.x);
        assert_eq!(ball.velocity().y, -before.y);

        with_ctx(|ctx| {
            ball.on_collision_enter(ctx, &snapshot("bottom"));
        });
        assert_eq!(ball.velocity().y, before.y);
    }

    #[test]
    fn test_side_walls_and_paddle_flip_x() {
        let mut ball = Ball::new();
        let before = ball.velocity();

        with_ctx(|ctx| {
            ball.on_collision_enter(ctx, &snapshot("left"));
        });
        assert_eq!(ball.velocity().x, -before.x);
        assert_eq!(ball.velocity().y, before.y);

        with_ctx(|ctx| {
            ball.on_collision_enter(ctx, &snapshot("paddle"));
        });
        assert_eq!(ball.velocity().x, before.x);
    }

    #[test]
    fn test_update_moves_along_velocity() {
        let mut ball = Ball::new();
        let mut transform = Transform::default();
        let mut material = Material::default();
        let input = InputEngine::new();
        let mut audio = AudioEngine::disabled();
        let mut ctx = ObjectContext {
            id: GameObjectId::default(),
            name: "ball",
            transform: &mut transform,
            material: &mut material,
            input: &input,
            audio: &mut audio,
        };

        let start = ctx.transform.position;
        ball.update(&mut ctx, 0.1);
        assert!(ctx.transform.position.x < start.x);
        assert!(ctx.transform.position.y < start.y);
    }
}
