//! Static boundary wall

use micro_engine::prelude::*;

/// An immobile wall segment
pub struct Wall {
    position: Vec2,
    size: Vec2,
}

impl Wall {
    /// Create a wall covering the given rectangle
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }
}

impl Behaviour for Wall {
    fn start(&mut self, ctx: &mut ObjectContext<'_>) {
        ctx.transform.position = self.position;
        ctx.transform.size = self.size;
        ctx.material.color = Color::ORANGE;
    }
}
