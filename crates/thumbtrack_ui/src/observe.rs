//! Layout observation contract
//!
//! The engine does not watch the container itself. Whatever the host uses to
//! notice size changes (a resize observer, a mutation observer, its own
//! layout pass) gets a [`LayoutTrigger`] and raises it; the controller
//! re-extracts metrics on its next tick.

use std::cell::Cell;
use std::rc::Rc;

/// Shared "metrics may have changed" flag.
#[derive(Debug, Clone, Default)]
pub struct LayoutTrigger {
    dirty: Rc<Cell<bool>>,
}

impl LayoutTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal that the container's box metrics may have changed.
    pub fn notify(&self) {
        self.dirty.set(true);
    }

    pub fn is_raised(&self) -> bool {
        self.dirty.get()
    }

    /// Clear the flag, returning whether it was raised.
    pub fn take(&self) -> bool {
        self.dirty.replace(false)
    }
}

/// Something that watches a container and raises a trigger on size changes.
pub trait ObservationBridge {
    /// Start observing; raise `trigger` whenever layout may have changed.
    fn observe(&mut self, trigger: LayoutTrigger);

    /// Stop observing. Called when the controller is torn down.
    fn disconnect(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_clones_share_state() {
        let trigger = LayoutTrigger::new();
        let observer_side = trigger.clone();
        assert!(!trigger.is_raised());

        observer_side.notify();
        assert!(trigger.is_raised());
        assert!(trigger.take());
        assert!(!observer_side.is_raised());
        assert!(!trigger.take());
    }
}
