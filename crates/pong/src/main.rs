//! Pong: four walls, a ball, and an arrow-key paddle

mod ball;
mod paddle;
mod wall;

use ball::Ball;
use micro_engine::prelude::*;
use paddle::Paddle;
use wall::Wall;

/// Playfield width in world units (matches the default window)
pub const FIELD_WIDTH: f32 = 800.0;
/// Playfield height in world units
pub const FIELD_HEIGHT: f32 = 600.0;
/// Thickness of the boundary walls
pub const WALL_WIDTH: f32 = 20.0;

fn main() {
    micro_engine::foundation::logging::init();

    if let Err(e) = run() {
        log::error!("Pong exited with error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = EngineConfig::load_or_default("pong.toml")?;
    config.window.title = "Pong".to_string();

    let renderer = PixelsRenderer::new(&config.window)?;
    let mut engine = Engine::new(config, Box::new(renderer));

    engine.add_object(
        "left",
        Wall::new(Vec2::new(0.0, 0.0), Vec2::new(WALL_WIDTH, FIELD_HEIGHT)),
    );
    engine.add_object(
        "right",
        Wall::new(
            Vec2::new(FIELD_WIDTH - WALL_WIDTH, 0.0),
            Vec2::new(WALL_WIDTH, FIELD_HEIGHT),
        ),
    );
    engine.add_object(
        "top",
        Wall::new(Vec2::new(0.0, 0.0), Vec2::new(FIELD_WIDTH, WALL_WIDTH)),
    );
    engine.add_object(
        "bottom",
        Wall::new(
            Vec2::new(0.0, FIELD_HEIGHT - WALL_WIDTH),
            Vec2::new(FIELD_WIDTH, WALL_WIDTH),
        ),
    );

    engine.add_object("ball", Ball::new());
    engine.add_object("paddle", Paddle::new());

    engine.run()?;
    Ok(())
}
