//! Movement demo: steer a square with the arrow keys past a static block

mod mover;

use micro_engine::prelude::*;
use mover::{Block, Mover};

fn main() {
    micro_engine::foundation::logging::init();

    if let Err(e) = run() {
        log::error!("Move demo exited with error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = EngineConfig::load_or_default("move_demo.toml")?;
    config.window.title = "Move Demo".to_string();

    let renderer = PixelsRenderer::new(&config.window)?;
    let mut engine = Engine::new(config, Box::new(renderer));

    engine.add_object("block", Block);
    engine.add_object("mover", Mover::new());

    engine.run()?;
    Ok(())
}
