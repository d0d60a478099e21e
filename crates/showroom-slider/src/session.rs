//! Scoped ownership of the listeners a drag needs.

use std::fmt;
use std::sync::Arc;

use crate::pointer::{ListenerId, PointerEventKind, PointerTarget};

/// Events a drag listens for after the initial press.
const SESSION_EVENTS: [PointerEventKind; 3] = [
    PointerEventKind::Move,
    PointerEventKind::Up,
    PointerEventKind::Cancel,
];

/// Listeners attached for the lifetime of one drag.
///
/// Acquiring a session attaches move, release and cancel listeners to the
/// target; dropping it detaches them. The slider holds the session inside
/// its dragging state, so every way a drag can end (release, cancel, the
/// slider itself being dropped) releases the listeners.
pub struct DragSession {
    target: Arc<dyn PointerTarget>,
    listeners: [ListenerId; SESSION_EVENTS.len()],
}

impl DragSession {
    pub fn acquire(target: Arc<dyn PointerTarget>) -> Self {
        let listeners = SESSION_EVENTS.map(|kind| target.attach(kind));
        tracing::trace!(?listeners, "drag session acquired");
        DragSession { target, listeners }
    }

    pub fn listeners(&self) -> &[ListenerId] {
        &self.listeners
    }
}

impl Drop for DragSession {
    fn drop(&mut self) {
        for id in self.listeners {
            self.target.detach(id);
        }
        tracing::trace!(listeners = ?self.listeners, "drag session released");
    }
}

impl fmt::Debug for DragSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragSession")
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}
