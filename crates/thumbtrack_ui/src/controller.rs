//! Scrollbar controller
//!
//! One [`ScrollbarController`] drives the overlay scrollbar of one container.
//! The host feeds it scroll notifications ([`ScrollbarController::move_to`]),
//! pointer events ([`ScrollbarController::handle_event`]) and clock ticks
//! ([`ScrollbarController::tick`]); the controller answers with direct thumb
//! paints, scroll requests through its callback, and an [`Overlay`] node to
//! render.

use std::rc::Rc;

use crate::callback::Callback;
use crate::config::ScrollbarConfig;
use crate::constants::MOVE_THROTTLE_MAX_WAIT;
use crate::drag::{ActionPosition, DragController, DragState, ScrollPosition, ScrollRequest};
use crate::event::{EventKind, EventStatus, MouseButton, PointerEvent};
use crate::layout::{Axis, Point};
use crate::listeners::{EventRegistry, ListenerSet, ListenerSpec};
use crate::metrics::{extract_size, BoxSize, ScrollContainer};
use crate::observe::{LayoutTrigger, ObservationBridge};
use crate::overlay::{Overlay, OverlayHit};
use crate::projector::{update_scroll_element_style, ThumbOffsets, ThumbSurface};
use crate::ratio::{get_gap_size, TrackGaps};
use crate::timing::Throttle;
use crate::visibility::VisibilityController;
use web_time::Instant;

/// Listeners every controller keeps while alive.
///
/// The document move and release listeners run in the capture phase so inner
/// handlers that stop propagation can neither starve a drag nor pin it.
pub fn listener_specs() -> [ListenerSpec; 5] {
    [
        ListenerSpec::document(EventKind::Move).capture(),
        ListenerSpec::document(EventKind::Release).capture(),
        ListenerSpec::container(EventKind::Press),
        ListenerSpec::container(EventKind::Enter),
        ListenerSpec::container(EventKind::Leave),
    ]
}

/// Overlay scrollbar state for a single container.
pub struct ScrollbarController {
    container: Box<dyn ScrollContainer>,
    on_scroll: Callback<ScrollRequest>,
    config: ScrollbarConfig,
    box_size: BoxSize,
    position: ScrollPosition,
    drag: DragController,
    visibility: VisibilityController,
    move_throttle: Throttle<ScrollPosition>,
    horizontal_track: Option<Box<dyn ThumbSurface>>,
    vertical_track: Option<Box<dyn ThumbSurface>>,
    layout_trigger: LayoutTrigger,
    observer: Option<Box<dyn ObservationBridge>>,
    listeners: ListenerSet,
}

impl ScrollbarController {
    /// Subscribe the controller's listeners and take the first metrics
    /// snapshot.
    pub fn new(
        container: impl ScrollContainer + 'static,
        registry: Rc<dyn EventRegistry>,
        on_scroll: Callback<ScrollRequest>,
        config: ScrollbarConfig,
    ) -> Self {
        let listeners = ListenerSet::subscribe_all(registry, &listener_specs());
        let visibility = VisibilityController::new(config.suppress_auto_hide);

        let mut controller = Self {
            container: Box::new(container),
            on_scroll,
            config,
            box_size: BoxSize::default(),
            position: ScrollPosition::default(),
            drag: DragController::new(),
            visibility,
            move_throttle: Throttle::new(MOVE_THROTTLE_MAX_WAIT),
            horizontal_track: None,
            vertical_track: None,
            layout_trigger: LayoutTrigger::new(),
            observer: None,
            listeners,
        };
        controller.layout();
        controller
    }

    /// Hand the layout trigger to `bridge` and keep it until teardown.
    /// A previously attached bridge is disconnected.
    pub fn attach_observer(&mut self, mut bridge: Box<dyn ObservationBridge>) {
        bridge.observe(self.layout_trigger.clone());
        if let Some(mut previous) = self.observer.replace(bridge) {
            previous.disconnect();
        }
    }

    /// Trigger a host can raise when the container's metrics may change.
    pub fn layout_trigger(&self) -> LayoutTrigger {
        self.layout_trigger.clone()
    }

    /// Attach the direct-paint surface of one track.
    pub fn mount_track(&mut self, axis: Axis, surface: Box<dyn ThumbSurface>) {
        log::debug!("Mounted {:?} track", axis);
        *self.track_slot(axis) = Some(surface);
    }

    /// Detach one track. Later paints skip it.
    pub fn unmount_track(&mut self, axis: Axis) -> Option<Box<dyn ThumbSurface>> {
        log::debug!("Unmounted {:?} track", axis);
        self.track_slot(axis).take()
    }

    fn track_slot(&mut self, axis: Axis) -> &mut Option<Box<dyn ThumbSurface>> {
        match axis {
            Axis::Horizontal => &mut self.horizontal_track,
            Axis::Vertical => &mut self.vertical_track,
        }
    }

    /// Re-read the container's metrics and repaint at the current position.
    ///
    /// Skipped while the container is not mounted.
    pub fn layout(&mut self) {
        if !self.container.is_mounted() {
            log::trace!("Layout skipped, container not mounted");
            return;
        }
        let box_size = extract_size(self.container.as_ref());
        if box_size != self.box_size {
            log::debug!(
                "Container metrics: client {}x{}, scroll {}x{}",
                box_size.cw,
                box_size.ch,
                box_size.sw,
                box_size.sh
            );
        }
        self.box_size = box_size;
        self.paint();
    }

    /// Host scroll notification. Throttled; a value held back is applied by
    /// [`tick`](Self::tick) once the window closes.
    pub fn move_to(&mut self, position: ScrollPosition, now: Instant) {
        if let Some(position) = self.move_throttle.call(now, position) {
            self.apply_move(position, now);
        }
    }

    fn apply_move(&mut self, position: ScrollPosition, now: Instant) {
        if position.scroll_left != self.position.scroll_left {
            self.visibility.on_scroll_activity(Axis::Horizontal, now);
        }
        if position.scroll_top != self.position.scroll_top {
            self.visibility.on_scroll_activity(Axis::Vertical, now);
        }
        self.position = position;
        self.paint();
    }

    fn gaps(&self) -> TrackGaps {
        get_gap_size(
            self.config.track_gap,
            self.box_size.show_bar_x(),
            self.box_size.show_bar_y(),
        )
    }

    fn paint(&mut self) -> ThumbOffsets {
        let gaps = self.gaps();
        update_scroll_element_style(
            &self.box_size,
            self.position,
            mounted(&mut self.horizontal_track, !self.config.suppress_scroll_x),
            mounted(&mut self.vertical_track, !self.config.suppress_scroll_y),
            gaps.x.gap,
            gaps.y.gap,
            self.config.min_thumb_size,
        )
    }

    /// Advance timers to `now`. Returns `true` when the overlay should be
    /// rendered again.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if self.layout_trigger.take() {
            self.layout();
            changed = true;
        }
        if let Some(position) = self.move_throttle.poll(now) {
            log::trace!("Applying throttled position {:?}", position);
            self.apply_move(position, now);
            changed = true;
        }
        if self.visibility.poll(now) {
            changed = true;
        }

        changed
    }

    /// Earliest instant at which [`tick`](Self::tick) has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        [self.move_throttle.deadline(), self.visibility.next_deadline()]
            .into_iter()
            .flatten()
            .min()
    }

    /// Dispatch a pointer event.
    ///
    /// Returns [`EventStatus::Captured`] when the event started, drove or
    /// ended a drag, or jumped the scroll position from a track click.
    pub fn handle_event(&mut self, event: &PointerEvent, now: Instant) -> EventStatus {
        match *event {
            PointerEvent::Pressed {
                button: MouseButton::Left,
                position,
            } => self.on_press(position),
            PointerEvent::Pressed { .. } => EventStatus::Ignored,
            PointerEvent::Moved { position } => self.on_move(position),
            PointerEvent::Released { .. } => {
                if self.drag.release() {
                    EventStatus::Captured
                } else {
                    EventStatus::Ignored
                }
            }
            PointerEvent::Entered => {
                self.layout_trigger.take();
                self.layout();
                EventStatus::Ignored
            }
            PointerEvent::Left => {
                self.visibility.on_pointer_leave(now);
                EventStatus::Ignored
            }
        }
    }

    /// A thumb press bases the drag on the last applied position, which trails
    /// a value still held by the move throttle.
    fn on_press(&mut self, pointer: Point) -> EventStatus {
        let overlay = self.overlay();
        match overlay.hit_test(pointer) {
            Some(OverlayHit::Thumb(axis)) => {
                self.drag.press(axis, pointer, self.position);
                EventStatus::Captured
            }
            Some(OverlayHit::Track(axis)) => {
                let max_scroll = match axis {
                    Axis::Horizontal => self.box_size.max_scroll_left(),
                    Axis::Vertical => self.box_size.max_scroll_top(),
                };
                if let Some(node) = overlay.track(axis) {
                    let request = node.jump_request(pointer, max_scroll);
                    log::debug!("Track click on {:?}, jumping to {}", axis, request.offset);
                    self.on_scroll.call(request);
                }
                EventStatus::Captured
            }
            None => EventStatus::Ignored,
        }
    }

    fn on_move(&mut self, pointer: Point) -> EventStatus {
        if !self.drag.is_dragging() {
            return EventStatus::Ignored;
        }
        let gaps = self.gaps();
        let requests =
            self.drag
                .drag_to(pointer, &self.box_size, &gaps, self.config.min_thumb_size);
        for request in requests.into_iter().flatten() {
            self.on_scroll.call(request);
        }
        EventStatus::Captured
    }

    /// The node to render for the current state.
    pub fn overlay(&self) -> Overlay {
        Overlay::build(
            &self.config,
            &self.box_size,
            self.position,
            &self.visibility,
            &self.drag,
        )
    }

    pub fn config(&self) -> &ScrollbarConfig {
        &self.config
    }

    pub fn box_size(&self) -> &BoxSize {
        &self.box_size
    }

    pub fn position(&self) -> ScrollPosition {
        self.position
    }

    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    pub fn action(&self) -> &ActionPosition {
        self.drag.action()
    }

    pub fn is_visible(&self, axis: Axis) -> bool {
        self.visibility.is_visible(axis)
    }

    pub fn listeners(&self) -> &ListenerSet {
        &self.listeners
    }
}

impl Drop for ScrollbarController {
    fn drop(&mut self) {
        self.visibility.clear_timers();
        self.move_throttle.cancel();
        if let Some(mut observer) = self.observer.take() {
            observer.disconnect();
        }
        self.listeners.release();
        log::debug!("Scrollbar controller torn down");
    }
}

fn mounted(
    track: &mut Option<Box<dyn ThumbSurface>>,
    enabled: bool,
) -> Option<&mut dyn ThumbSurface> {
    match track {
        Some(surface) if enabled => Some(surface.as_mut()),
        _ => None,
    }
}
