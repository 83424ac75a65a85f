//! Scene and game object layer
//!
//! A [`Scene`] owns every game object in an arena with stable keys. Objects
//! are registered once and live as long as the scene; registration order is
//! the only guaranteed iteration order, and the engine uses it for both the
//! start phase and per-frame updates.
//!
//! Each object pairs a [`Transform`] and a [`Material`] with a boxed
//! [`Behaviour`]. The behaviour customizes a fixed set of lifecycle hooks
//! and receives an [`ObjectContext`] giving it mutable access to its *own*
//! transform and material plus the shared input and audio services; one
//! object can never mutate another.

use crate::audio::AudioEngine;
use crate::foundation::math::Transform;
use crate::input::InputEngine;
use crate::render::{Material, RenderRect};
use slotmap::SlotMap;
use std::panic::{catch_unwind, AssertUnwindSafe};

slotmap::new_key_type! {
    /// Stable identity of a game object within its scene
    pub struct GameObjectId;
}

/// Shared engine services handed to behaviour hooks
pub struct Services<'a> {
    /// Per-frame keyboard state (read-only for behaviours)
    pub input: &'a InputEngine,
    /// One-shot audio playback and clip registration
    pub audio: &'a mut AudioEngine,
}

/// Per-hook view of a game object and the engine services
///
/// Borrowed for the duration of a single hook invocation.
pub struct ObjectContext<'a> {
    /// The receiving object's identity
    pub id: GameObjectId,
    /// The receiving object's name
    pub name: &'a str,
    /// The receiving object's transform (mutable)
    pub transform: &'a mut Transform,
    /// The receiving object's material (mutable)
    pub material: &'a mut Material,
    /// Keyboard state for the current frame
    pub input: &'a InputEngine,
    /// Audio service for clip registration and one-shot playback
    pub audio: &'a mut AudioEngine,
}

/// Copied view of the other side of a collision
///
/// Taken at dispatch time; the live object may change immediately after the
/// hook returns, so hooks must not assume this stays in sync.
#[derive(Debug, Clone)]
pub struct ObjectSnapshot {
    /// Identity of the other object
    pub id: GameObjectId,
    /// Name of the other object
    pub name: String,
    /// Transform of the other object at dispatch time
    pub transform: Transform,
}

/// Lifecycle hooks of a game object
///
/// Implementations override whichever hooks they need; every hook defaults
/// to a no-op.
pub trait Behaviour: 'static {
    /// Called exactly once, after all objects are registered and before the
    /// first update
    ///
    /// Must not depend on any other object's `start` having run.
    fn start(&mut self, ctx: &mut ObjectContext<'_>) {
        let _ = ctx;
    }

    /// Called once per frame, in registration order, before collision
    /// checking
    ///
    /// `elapsed` is the frame's elapsed time in seconds; it is strictly
    /// positive and bounded below by the engine's minimum frame interval.
    fn update(&mut self, ctx: &mut ObjectContext<'_>, elapsed: f32) {
        let _ = (ctx, elapsed);
    }

    /// Called by the collision engine when this object starts overlapping
    /// `other`
    fn on_collision_enter(&mut self, ctx: &mut ObjectContext<'_>, other: &ObjectSnapshot) {
        let _ = (ctx, other);
    }

    /// Called by the collision engine when this object stops overlapping
    /// `other`
    fn on_collision_exit(&mut self, ctx: &mut ObjectContext<'_>, other: &ObjectSnapshot) {
        let _ = (ctx, other);
    }
}

/// A registered game object
///
/// Owns exactly one transform and one material, created at registration
/// and never shared.
pub struct GameObject {
    /// Display name; also what collision hooks see on the other side
    pub name: String,
    /// Position, size, and draw depth
    pub transform: Transform,
    /// Visual appearance
    pub material: Material,
    /// `None` only while a hook is running on this object
    behaviour: Option<Box<dyn Behaviour>>,
}

/// The collection owning every game object
///
/// There is no removal: objects live until the scene is dropped, which
/// keeps registration order and collision-pair bookkeeping trivially
/// consistent.
#[derive(Default)]
pub struct Scene {
    objects: SlotMap<GameObjectId, GameObject>,
    order: Vec<GameObjectId>,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a game object with a default transform and material
    ///
    /// Returns the object's stable id. The behaviour's `start` hook runs
    /// later, during the engine's start phase.
    pub fn add_object(&mut self, name: impl Into<String>, behaviour: impl Behaviour) -> GameObjectId {
        let name = name.into();
        log::debug!("Registering game object '{name}'");
        let id = self.objects.insert(GameObject {
            name,
            transform: Transform::default(),
            material: Material::default(),
            behaviour: Some(Box::new(behaviour)),
        });
        self.order.push(id);
        id
    }

    /// Number of registered objects
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the scene has no objects
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Object ids in registration order
    pub fn order(&self) -> &[GameObjectId] {
        &self.order
    }

    /// Look up an object by id
    pub fn get(&self, id: GameObjectId) -> Option<&GameObject> {
        self.objects.get(id)
    }

    /// Look up an object by id, mutably
    pub fn get_mut(&mut self, id: GameObjectId) -> Option<&mut GameObject> {
        self.objects.get_mut(id)
    }

    /// Find the first object with the given name, in registration order
    pub fn find_by_name(&self, name: &str) -> Option<GameObjectId> {
        self.order
            .iter()
            .copied()
            .find(|&id| self.objects.get(id).is_some_and(|o| o.name == name))
    }

    /// Copy an object's identity, name, and transform
    pub fn snapshot(&self, id: GameObjectId) -> Option<ObjectSnapshot> {
        self.objects.get(id).map(|object| ObjectSnapshot {
            id,
            name: object.name.clone(),
            transform: object.transform,
        })
    }

    /// Build the draw list for the current frame
    ///
    /// Invisible materials are skipped. The list is depth-sorted with a
    /// stable sort, so equal depths keep registration order.
    pub fn render_rects(&self) -> Vec<RenderRect> {
        let mut rects: Vec<RenderRect> = self
            .order
            .iter()
            .filter_map(|&id| self.objects.get(id))
            .filter(|object| object.material.visible)
            .map(|object| RenderRect::new(&object.transform, &object.material))
            .collect();
        rects.sort_by(|a, b| a.depth.total_cmp(&b.depth));
        rects
    }

    /// Run the `start` hook on every object, in registration order
    pub fn run_starts(&mut self, services: &mut Services<'_>) {
        for id in self.order.clone() {
            self.dispatch(id, services, "start", |behaviour, ctx| behaviour.start(ctx));
        }
    }

    /// Run the `update` hook on every object, in registration order
    pub fn run_updates(&mut self, elapsed: f32, services: &mut Services<'_>) {
        for id in self.order.clone() {
            self.dispatch(id, services, "update", |behaviour, ctx| {
                behaviour.update(ctx, elapsed);
            });
        }
    }

    pub(crate) fn dispatch_collision_enter(
        &mut self,
        id: GameObjectId,
        other: &ObjectSnapshot,
        services: &mut Services<'_>,
    ) {
        self.dispatch(id, services, "on_collision_enter", |behaviour, ctx| {
            behaviour.on_collision_enter(ctx, other);
        });
    }

    pub(crate) fn dispatch_collision_exit(
        &mut self,
        id: GameObjectId,
        other: &ObjectSnapshot,
        services: &mut Services<'_>,
    ) {
        self.dispatch(id, services, "on_collision_exit", |behaviour, ctx| {
            behaviour.on_collision_exit(ctx, other);
        });
    }

    /// Invoke one hook on one object
    ///
    /// The behaviour is taken out of the object for the duration of the
    /// call, which is what lets the context hand out `&mut` to the object's
    /// own fields. A panicking hook is contained here: it is logged and the
    /// frame continues for the remaining objects.
    fn dispatch<F>(&mut self, id: GameObjectId, services: &mut Services<'_>, hook: &str, f: F)
    where
        F: FnOnce(&mut dyn Behaviour, &mut ObjectContext<'_>),
    {
        let Some(object) = self.objects.get_mut(id) else {
            return;
        };
        let Some(mut behaviour) = object.behaviour.take() else {
            return;
        };

        let outcome = {
            let mut ctx = ObjectContext {
                id,
                name: &object.name,
                transform: &mut object.transform,
                material: &mut object.material,
                input: services.input,
                audio: &mut *services.audio,
            };
            catch_unwind(AssertUnwindSafe(|| f(behaviour.as_mut(), &mut ctx)))
        };

        if outcome.is_err() {
            log::error!("Game object '{}' panicked in {hook}", object.name);
        }
        object.behaviour = Some(behaviour);
    }
}
