//! Keyboard input facade
//!
//! Raw key events arrive on whatever thread the windowing backend delivers
//! them on and are appended to a shared [`EventQueue`]. Once per frame,
//! before any object updates, [`InputEngine::start_frame`] drains the queue
//! and rolls the per-key state forward so that game objects see a stable
//! snapshot for the whole frame:
//!
//! - [`InputEngine::get_key`] reports whether a key is currently held.
//! - [`InputEngine::get_key_down`] / [`InputEngine::get_key_up`] report
//!   transitions that happened in the current frame only, and reset as soon
//!   as the frame advances without a new raw event for that key.
//!
//! Hardware auto-repeat delivers extra pressed events for a key that is
//! already down; those are coalesced so `get_key_down` fires once per
//! physical press.

use std::collections::HashMap;
use std::mem;
use std::sync::{Arc, Mutex, PoisonError};

/// Key codes understood by the engine
///
/// Backends map their native key identifiers onto this enum; anything
/// without a mapping is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)] // variant names are self-describing
pub enum KeyCode {
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

/// A raw key transition reported by a backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Which key changed
    pub code: KeyCode,
    /// `true` for press, `false` for release
    pub pressed: bool,
}

/// Shared buffer of raw key events awaiting the next frame
///
/// The one concurrently written resource in the engine: backends append
/// from the event-delivery thread, the main loop drains once per frame.
/// Both sides hold the lock only for the append or the swap.
#[derive(Clone, Default)]
pub struct EventQueue {
    events: Arc<Mutex<Vec<KeyEvent>>>,
}

impl EventQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw event
    pub fn push(&self, event: KeyEvent) {
        let mut events = self.events.lock().unwrap_or_else(PoisonError::into_inner);
        events.push(event);
    }

    /// Take all buffered events, leaving the queue empty
    pub fn drain(&self) -> Vec<KeyEvent> {
        let mut events = self.events.lock().unwrap_or_else(PoisonError::into_inner);
        mem::take(&mut *events)
    }

    /// Number of buffered events
    pub fn len(&self) -> usize {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyState {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy)]
struct KeyChange {
    state: KeyState,
    /// Whether this state was entered in the current frame
    current_frame: bool,
}

/// Per-frame keyboard state
///
/// Constructed once and shared with game objects through their update
/// context; there is exactly one input source per engine.
#[derive(Default)]
pub struct InputEngine {
    keys: HashMap<KeyCode, KeyChange>,
    queue: EventQueue,
}

impl InputEngine {
    /// Create a new input engine with an empty event queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a handle to the raw event queue for a windowing backend
    pub fn queue(&self) -> EventQueue {
        self.queue.clone()
    }

    /// Roll key state forward for a new frame
    ///
    /// Must be called exactly once per frame, before any object updates.
    /// Retained key records are demoted to not-current-frame, then the
    /// buffered raw events are merged in. Repeated pressed events for a key
    /// that is already down are auto-repeat noise and are discarded.
    pub fn start_frame(&mut self) {
        for change in self.keys.values_mut() {
            change.current_frame = false;
        }

        for event in self.queue.drain() {
            if event.pressed {
                if let Some(change) = self.keys.get(&event.code) {
                    if change.state == KeyState::Down {
                        // auto-repeat for a held key
                        continue;
                    }
                }
            }

            let state = if event.pressed { KeyState::Down } else { KeyState::Up };
            self.keys.insert(
                event.code,
                KeyChange {
                    state,
                    current_frame: true,
                },
            );
        }
    }

    /// Whether the key is currently held down
    ///
    /// A key with no recorded events is treated as not pressed.
    pub fn get_key(&self, code: KeyCode) -> bool {
        matches!(
            self.keys.get(&code),
            Some(KeyChange {
                state: KeyState::Down,
                ..
            })
        )
    }

    /// Whether the key was pressed in the current frame
    pub fn get_key_down(&self, code: KeyCode) -> bool {
        matches!(
            self.keys.get(&code),
            Some(KeyChange {
                state: KeyState::Down,
                current_frame: true,
            })
        )
    }

    /// Whether the key was released in the current frame
    pub fn get_key_up(&self, code: KeyCode) -> bool {
        matches!(
            self.keys.get(&code),
            Some(KeyChange {
                state: KeyState::Up,
                current_frame: true,
            })
        )
    }
}
