//! AABB overlap testing and enter/exit event dispatch
//!
//! The overlap test samples rectangle corners with a 1-unit inward inset on
//! the far edges, so rectangles that merely share an edge do not count as
//! overlapping. Corners are sampled from both rectangles, which makes the
//! test symmetric even when one rectangle strictly contains the other.
//!
//! The engine scans every *ordered* pair of objects each frame. A fresh
//! contact between A and B therefore fires `on_collision_enter` on both
//! sides (each sees the other as the argument) and records two ordered
//! pairs in the contact set; each side later gets its own
//! `on_collision_exit` the same way. The scan is O(n²), which is fine for
//! the handful of objects this engine targets.

use crate::foundation::math::{Transform, Vec2};
use crate::scene::{GameObjectId, Scene, Services};
use std::collections::HashSet;

/// Whether a point lies within a rectangle's half-open interval
/// `[position, position + size)` on both axes
pub fn point_in_rect(p: Vec2, rect: &Transform) -> bool {
    p.x >= rect.position.x
        && p.x < rect.position.x + rect.size.x
        && p.y >= rect.position.y
        && p.y < rect.position.y + rect.size.y
}

/// The four corners of `rect`, inset 1 unit on the far edges
fn inset_corners(rect: &Transform) -> [Vec2; 4] {
    let near = rect.position;
    let far = rect.position + rect.size - Vec2::new(1.0, 1.0);
    [
        Vec2::new(near.x, near.y),
        Vec2::new(far.x, near.y),
        Vec2::new(near.x, far.y),
        Vec2::new(far.x, far.y),
    ]
}

fn corners_within(a: &Transform, b: &Transform) -> bool {
    inset_corners(a).iter().any(|&corner| point_in_rect(corner, b))
}

/// Whether two rectangles overlap
///
/// Degenerate rectangles (zero or negative size on either axis) never
/// collide. Adjacency is not overlap: the 1-unit inset means rectangles
/// that only touch along an edge stay separate.
pub fn colliding(a: &Transform, b: &Transform) -> bool {
    if !a.has_area() || !b.has_area() {
        return false;
    }
    corners_within(a, b) || corners_within(b, a)
}

/// Contact-tracking collision engine
///
/// Holds the set of ordered object pairs currently overlapping and
/// dispatches the enter/exit lifecycle hooks when pairs join or leave the
/// set. Invoked once per frame, after all object updates.
#[derive(Default)]
pub struct CollisionEngine {
    contacts: HashSet<(GameObjectId, GameObjectId)>,
}

impl CollisionEngine {
    /// Create an engine with an empty contact set
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ordered pairs currently in contact
    ///
    /// Each live collision between two objects contributes two entries,
    /// one per ordering.
    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the ordered pair `(a, b)` is currently recorded as touching
    pub fn in_contact(&self, a: GameObjectId, b: GameObjectId) -> bool {
        self.contacts.contains(&(a, b))
    }

    /// Reconcile contacts against the scene's current transforms
    ///
    /// Entry detection first: every ordered pair that now overlaps and is
    /// not yet recorded is added, firing `on_collision_enter` on the pair's
    /// first element. Then exit detection over a snapshot of the recorded
    /// pairs: every pair that no longer overlaps is removed, firing
    /// `on_collision_exit` on its first element.
    pub fn check_collisions(&mut self, scene: &mut Scene, services: &mut Services<'_>) {
        self.check_entries(scene, services);
        self.check_exits(scene, services);
    }

    fn check_entries(&mut self, scene: &mut Scene, services: &mut Services<'_>) {
        let ids = scene.order().to_vec();
        for &g1 in &ids {
            for &g2 in &ids {
                if g1 == g2 || self.contacts.contains(&(g1, g2)) {
                    continue;
                }
                let Some(t1) = scene.get(g1).map(|o| o.transform) else {
                    continue;
                };
                let Some(t2) = scene.get(g2).map(|o| o.transform) else {
                    continue;
                };
                if colliding(&t1, &t2) {
                    self.contacts.insert((g1, g2));
                    if let Some(other) = scene.snapshot(g2) {
                        log::trace!("Collision enter: {g1:?} vs '{}'", other.name);
                        scene.dispatch_collision_enter(g1, &other, services);
                    }
                }
            }
        }
    }

    fn check_exits(&mut self, scene: &mut Scene, services: &mut Services<'_>) {
        // Snapshot so hook side effects cannot invalidate the iteration
        let recorded: Vec<(GameObjectId, GameObjectId)> = self.contacts.iter().copied().collect();
        for (g1, g2) in recorded {
            let still_colliding = match (scene.get(g1), scene.get(g2)) {
                (Some(a), Some(b)) => colliding(&a.transform, &b.transform),
                _ => false,
            };
            if !still_colliding {
                self.contacts.remove(&(g1, g2));
                if let Some(other) = scene.snapshot(g2) {
                    log::trace!("Collision exit: {g1:?} vs '{}'", other.name);
                    scene.dispatch_collision_exit(g1, &other, services);
                }
            }
        }
    }
}
