//! Pointer events and the surface that listeners attach to.
//!
//! A drag starts on the track but continues wherever the pointer goes, so
//! move and release listeners live on a wider surface than the control
//! itself (a window, a canvas, a terminal). [`PointerTarget`] abstracts
//! that surface so the control can attach and detach listeners without
//! knowing what hosts it, and so tests can count what is attached.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

/// One pointer interaction, with positions in track coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed on the track at `x`.
    Down { x: f64 },
    /// Pointer moved to `x`, anywhere on the surface.
    Move { x: f64 },
    /// Pointer released.
    Up,
    /// The host abandoned the interaction (focus loss, touch cancel).
    Cancel,
}

impl PointerEvent {
    pub fn kind(&self) -> PointerEventKind {
        match self {
            PointerEvent::Down { .. } => PointerEventKind::Down,
            PointerEvent::Move { .. } => PointerEventKind::Move,
            PointerEvent::Up => PointerEventKind::Up,
            PointerEvent::Cancel => PointerEventKind::Cancel,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Handle returned by [`PointerTarget::attach`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// A surface that pointer listeners can be attached to.
pub trait PointerTarget: Send + Sync {
    /// Starts listening for `kind` events.
    fn attach(&self, kind: PointerEventKind) -> ListenerId;

    /// Stops the listener. Detaching an unknown id does nothing.
    fn detach(&self, id: ListenerId);
}

/// In-process bookkeeping of attached listeners.
///
/// Serves as the pointer surface for hosts that feed events to a slider
/// directly, and lets tests assert that no listener outlives its drag.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    next_id: AtomicU64,
    listeners: Mutex<BTreeMap<ListenerId, PointerEventKind>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of listeners currently attached.
    pub fn active(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.active() == 0
    }

    /// Returns `true` if any listener for `kind` is attached.
    pub fn is_listening(&self, kind: PointerEventKind) -> bool {
        self.lock().values().any(|attached| *attached == kind)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<ListenerId, PointerEventKind>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PointerTarget for ListenerRegistry {
    fn attach(&self, kind: PointerEventKind) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock().insert(id, kind);
        id
    }

    fn detach(&self, id: ListenerId) {
        self.lock().remove(&id);
    }
}
