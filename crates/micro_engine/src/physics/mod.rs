//! Collision detection
//!
//! Axis-aligned bounding-box overlap testing with persistent contact
//! tracking, so enter/exit events fire exactly at state transitions.

pub mod collision;

pub use collision::{colliding, point_in_rect, CollisionEngine};
