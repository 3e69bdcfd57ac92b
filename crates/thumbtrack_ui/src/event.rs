use crate::layout::Point;

/// Pointer events the controller responds to.
///
/// Positions are in the container's padding-box coordinate space. A moving
/// pointer outside the container still reports positions in that space
/// (possibly negative or past the far edge).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer button pressed inside the container.
    Pressed {
        button: MouseButton,
        position: Point,
    },
    /// Pointer moved anywhere in the document.
    Moved { position: Point },
    /// Pointer button released anywhere in the document.
    Released {
        button: MouseButton,
        position: Point,
    },
    /// Pointer entered the container.
    Entered,
    /// Pointer left the container.
    Left,
}

impl PointerEvent {
    /// The kind used to match this event against listener subscriptions.
    pub fn kind(&self) -> EventKind {
        match self {
            PointerEvent::Pressed { .. } => EventKind::Press,
            PointerEvent::Moved { .. } => EventKind::Move,
            PointerEvent::Released { .. } => EventKind::Release,
            PointerEvent::Entered => EventKind::Enter,
            PointerEvent::Left => EventKind::Leave,
        }
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Event kinds a listener can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Press,
    Move,
    Release,
    Enter,
    Leave,
}

/// Where a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenTarget {
    /// The whole document, regardless of which element the pointer is over.
    Document,
    /// The scroll container and its overlay.
    Container,
}

/// Dispatch phase of a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Runs before any bubbling listener and cannot be skipped by them.
    Capture,
    #[default]
    Bubble,
}

/// Result of handing an event to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    /// The controller consumed the event; the host should not act on it.
    Captured,
    /// The event is not relevant to the scrollbar.
    Ignored,
}

impl EventStatus {
    pub fn is_captured(self) -> bool {
        matches!(self, EventStatus::Captured)
    }
}
