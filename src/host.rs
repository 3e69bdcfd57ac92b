//! Headless host
//!
//! Stand-ins for what a browser provides to the engine: a scrollable
//! container with real clamping, an event registry that routes events
//! through capture and bubble phases, track surfaces that record paints, and
//! an observer the host raises by hand after resizing content.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use thumbtrack_ui::{
    Axis, EventKind, EventRegistry, LayoutTrigger, ListenTarget, ListenerId, ListenerSpec,
    ObservationBridge, Padding, Phase, ScrollContainer, ScrollPosition, ScrollRequest, Size,
    ThumbSurface,
};

/// A scrollable box with fixed client size and resizable content.
#[derive(Debug)]
pub struct SimContainer {
    client: Size,
    content: Cell<Size>,
    padding: Padding,
    mounted: Cell<bool>,
    position: Cell<ScrollPosition>,
}

impl SimContainer {
    pub fn new(client: Size, content: Size, padding: Padding) -> Rc<Self> {
        Rc::new(Self {
            client,
            content: Cell::new(content),
            padding,
            mounted: Cell::new(true),
            position: Cell::new(ScrollPosition::default()),
        })
    }

    pub fn position(&self) -> ScrollPosition {
        self.position.get()
    }

    fn max_scroll(&self) -> (f32, f32) {
        let scroll = self.scroll_size();
        (
            (scroll.width - self.client.width).max(0.0),
            (scroll.height - self.client.height).max(0.0),
        )
    }

    /// Scroll to the given offsets, clamped to the scrollable range.
    pub fn scroll_to(&self, left: f32, top: f32) -> ScrollPosition {
        let (max_left, max_top) = self.max_scroll();
        let position = ScrollPosition::new(left.clamp(0.0, max_left), top.clamp(0.0, max_top));
        self.position.set(position);
        position
    }

    /// Apply a scroll request from the scrollbar.
    pub fn apply(&self, request: ScrollRequest) -> ScrollPosition {
        let current = self.position();
        match request.axis() {
            Axis::Horizontal => self.scroll_to(request.offset, current.scroll_top),
            Axis::Vertical => self.scroll_to(current.scroll_left, request.offset),
        }
    }

    /// Replace the content size, re-clamping the scroll position.
    pub fn resize_content(&self, content: Size) -> ScrollPosition {
        self.content.set(content);
        let current = self.position();
        self.scroll_to(current.scroll_left, current.scroll_top)
    }

    pub fn set_mounted(&self, mounted: bool) {
        self.mounted.set(mounted);
    }
}

impl ScrollContainer for SimContainer {
    fn client_size(&self) -> Size {
        self.client
    }

    /// Never smaller than the client area, like `scrollWidth`/`scrollHeight`.
    fn scroll_size(&self) -> Size {
        let content = self.content.get();
        Size::new(
            content.width.max(self.client.width),
            content.height.max(self.client.height),
        )
    }

    fn padding(&self) -> Padding {
        self.padding
    }

    fn is_mounted(&self) -> bool {
        self.mounted.get()
    }
}

/// Event registry for a document containing one scroll container.
///
/// Events originate on content inside the container, so the propagation
/// path is document, container, target, container, document.
#[derive(Debug, Default)]
pub struct SimRegistry {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(ListenerId, ListenerSpec)>>,
}

impl SimRegistry {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Number of live subscriptions.
    pub fn active(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_subscribed(&self, spec: &ListenerSpec) -> bool {
        self.listeners.borrow().iter().any(|(_, s)| s == spec)
    }

    /// Listeners reached by an event of `kind`, in dispatch order.
    ///
    /// When the target stops propagation only capture-phase listeners run.
    pub fn route(&self, kind: EventKind, stop_propagation: bool) -> Vec<ListenerSpec> {
        let mut path = vec![
            ListenerSpec::new(ListenTarget::Document, kind, Phase::Capture),
            ListenerSpec::new(ListenTarget::Container, kind, Phase::Capture),
        ];
        if !stop_propagation {
            path.push(ListenerSpec::new(ListenTarget::Container, kind, Phase::Bubble));
            path.push(ListenerSpec::new(ListenTarget::Document, kind, Phase::Bubble));
        }

        path.into_iter()
            .filter(|spec| self.is_subscribed(spec))
            .collect()
    }
}

impl EventRegistry for SimRegistry {
    fn subscribe(&self, spec: ListenerSpec) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, spec));
        log::trace!("Subscribed {:?} as {:?}", spec, id);
        id
    }

    fn unsubscribe(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(active, _)| *active != id);
    }
}

/// One thumb write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub axis: Axis,
    pub offset: f32,
}

/// Track surface that records every thumb write. Clones share the log.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    paints: Rc<RefCell<Vec<Paint>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paints(&self) -> Vec<Paint> {
        self.paints.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.paints.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.paints.borrow().is_empty()
    }

    /// Latest offset written for `axis`.
    pub fn last(&self, axis: Axis) -> Option<f32> {
        self.paints
            .borrow()
            .iter()
            .rev()
            .find(|paint| paint.axis == axis)
            .map(|paint| paint.offset)
    }
}

impl ThumbSurface for RecordingSurface {
    fn set_thumb_offset(&mut self, axis: Axis, offset: f32) {
        log::debug!("Paint {:?} thumb at {:.2}", axis, offset);
        self.paints.borrow_mut().push(Paint { axis, offset });
    }
}

/// Observer raised by the host after it changes the container's content.
/// Clones share the connection.
#[derive(Debug, Clone, Default)]
pub struct ManualObserver {
    trigger: Rc<RefCell<Option<LayoutTrigger>>>,
}

impl ManualObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_connected(&self) -> bool {
        self.trigger.borrow().is_some()
    }

    /// Report a size change. Returns `false` if nothing is observing.
    pub fn notify(&self) -> bool {
        match self.trigger.borrow().as_ref() {
            Some(trigger) => {
                trigger.notify();
                true
            }
            None => false,
        }
    }
}

impl ObservationBridge for ManualObserver {
    fn observe(&mut self, trigger: LayoutTrigger) {
        *self.trigger.borrow_mut() = Some(trigger);
    }

    fn disconnect(&mut self) {
        self.trigger.borrow_mut().take();
    }
}
