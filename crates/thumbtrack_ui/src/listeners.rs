//! Listener subscriptions with scoped release
//!
//! The host owns event dispatch. The controller only declares which events it
//! needs through an [`EventRegistry`], and keeps the returned ids in a
//! [`ListenerSet`] that unsubscribes all of them when dropped.

use crate::event::{EventKind, ListenTarget, Phase};
use std::fmt;
use std::rc::Rc;

/// Identifier handed out by a registry for one subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// What a listener wants to receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerSpec {
    pub target: ListenTarget,
    pub kind: EventKind,
    pub phase: Phase,
}

impl ListenerSpec {
    pub fn new(target: ListenTarget, kind: EventKind, phase: Phase) -> Self {
        Self {
            target,
            kind,
            phase,
        }
    }

    /// Bubble-phase listener on the document.
    pub fn document(kind: EventKind) -> Self {
        Self::new(ListenTarget::Document, kind, Phase::Bubble)
    }

    /// Bubble-phase listener on the container.
    pub fn container(kind: EventKind) -> Self {
        Self::new(ListenTarget::Container, kind, Phase::Bubble)
    }

    /// Switch this listener to the capture phase.
    pub fn capture(mut self) -> Self {
        self.phase = Phase::Capture;
        self
    }
}

/// Host-side event subscription primitive.
///
/// Methods take `&self`; implementations keep their bookkeeping behind
/// interior mutability so a listener set can be released from inside a
/// dispatch.
pub trait EventRegistry {
    /// Register a listener and return its id.
    fn subscribe(&self, spec: ListenerSpec) -> ListenerId;

    /// Remove a listener. Unknown ids are ignored.
    fn unsubscribe(&self, id: ListenerId);
}

/// Subscriptions owned by one controller, released on drop.
pub struct ListenerSet {
    registry: Rc<dyn EventRegistry>,
    ids: Vec<(ListenerId, ListenerSpec)>,
}

impl ListenerSet {
    /// Subscribe every spec on the given registry.
    pub fn subscribe_all(registry: Rc<dyn EventRegistry>, specs: &[ListenerSpec]) -> Self {
        let ids = specs
            .iter()
            .map(|spec| (registry.subscribe(*spec), *spec))
            .collect();
        Self { registry, ids }
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Check whether a subscription matching `spec` is held.
    pub fn contains(&self, spec: &ListenerSpec) -> bool {
        self.ids.iter().any(|(_, s)| s == spec)
    }

    /// Release all subscriptions now.
    pub fn release(&mut self) {
        for (id, spec) in self.ids.drain(..) {
            log::trace!("Unsubscribing listener {:?} ({:?})", id, spec);
            self.registry.unsubscribe(id);
        }
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for ListenerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerSet").field("ids", &self.ids).finish()
    }
}
