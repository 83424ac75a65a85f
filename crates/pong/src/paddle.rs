//! Arrow-key paddle clamped by the top and bottom walls

use micro_engine::prelude::*;

const PADDLE_SPEED: f32 = 170.0;

/// Player paddle behaviour
///
/// Moves with the up/down arrow keys. Rather than clamping against
/// coordinates, it listens to its own collision enter/exit events against
/// the walls named "top" and "bottom" and refuses to push further in the
/// blocked direction while the contact lasts.
#[derive(Default)]
pub struct Paddle {
    at_top: bool,
    at_bottom: bool,
}

impl Paddle {
    /// Create a paddle
    pub fn new() -> Self {
        Self::default()
    }
}

impl Behaviour for Paddle {
    fn start(&mut self, ctx: &mut ObjectContext<'_>) {
        ctx.transform.position = Vec2::new(700.0, 300.0);
        ctx.transform.size = Vec2::new(20.0, 130.0);
        ctx.material.color = Color::BLUE;
    }

    fn update(&mut self, ctx: &mut ObjectContext<'_>, elapsed: f32) {
        if ctx.input.get_key(KeyCode::Down) && !self.at_bottom {
            ctx.transform.position.y += elapsed * PADDLE_SPEED;
        } else if ctx.input.get_key(KeyCode::Up) && !self.at_top {
            ctx.transform.position.y -= elapsed * PADDLE_SPEED;
        }
    }

    fn on_collision_enter(&mut self, _ctx: &mut ObjectContext<'_>, other: &ObjectSnapshot) {
        match other.name.as_str() {
            "top" => self.at_top = true,
            "bottom" => self.at_bottom = true,
            _ => {}
        }
    }

    fn on_collision_exit(&mut self, _ctx: &mut ObjectContext<'_>, other: &ObjectSnapshot) {
        match other.name.as_str() {
            "top" => self.at_top = false,
            "bottom" => self.at_bottom = false,
            _ => {}
        }
    }
}
