//! Thumb drag state machine
//!
//! A press on a thumb pins its axis and records the pointer coordinate and
//! the scroll offset at that moment. Every later document-wide pointer move
//! turns the pointer delta into an absolute scroll offset for the host. Any
//! release resets the whole session.

use crate::layout::{Axis, Point};
use crate::metrics::BoxSize;
use crate::ratio::{compute_ratio, TrackGaps};

/// Latest known scroll offsets of the container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollPosition {
    pub scroll_left: f32,
    pub scroll_top: f32,
}

impl ScrollPosition {
    pub fn new(scroll_left: f32, scroll_top: f32) -> Self {
        Self {
            scroll_left,
            scroll_top,
        }
    }

    /// Offset along an axis.
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.scroll_left,
            Axis::Vertical => self.scroll_top,
        }
    }
}

/// A scroll offset the controller asks the host to apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub offset: f32,
    pub horizontal: bool,
}

impl ScrollRequest {
    pub fn axis(&self) -> Axis {
        if self.horizontal {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }
}

/// Drag session fields.
///
/// `pin_x`/`pin_y` mark a drag-locked axis, `start_*` the pointer coordinate
/// at press, `last_*` the scroll offset at press.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActionPosition {
    pub pin_x: bool,
    pub pin_y: bool,
    pub last_scroll_top: f32,
    pub last_scroll_left: f32,
    pub start_x: f32,
    pub start_y: f32,
}

/// Drag state derived from the session fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    DraggingX,
    DraggingY,
}

/// Converts pointer drag into scroll requests.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    action: ActionPosition,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn action(&self) -> &ActionPosition {
        &self.action
    }

    pub fn state(&self) -> DragState {
        if self.action.pin_x {
            DragState::DraggingX
        } else if self.action.pin_y {
            DragState::DraggingY
        } else {
            DragState::Idle
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.state() != DragState::Idle
    }

    /// Whether the given axis is pinned by the pointer.
    pub fn is_pinned(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.action.pin_x,
            Axis::Vertical => self.action.pin_y,
        }
    }

    /// Start a drag on `axis`. Only that axis's fields change.
    pub fn press(&mut self, axis: Axis, pointer: Point, position: ScrollPosition) {
        match axis {
            Axis::Horizontal => {
                self.action.pin_x = true;
                self.action.start_x = pointer.x;
                self.action.last_scroll_left = position.scroll_left;
            }
            Axis::Vertical => {
                self.action.pin_y = true;
                self.action.start_y = pointer.y;
                self.action.last_scroll_top = position.scroll_top;
            }
        }
        log::debug!("Drag started on {:?} at {:?}", axis, pointer);
    }

    /// Translate a pointer move into scroll requests, horizontal first.
    ///
    /// Pinned axes whose bar is not shown produce nothing.
    pub fn drag_to(
        &self,
        pointer: Point,
        box_size: &BoxSize,
        gaps: &TrackGaps,
        min_thumb_size: f32,
    ) -> [Option<ScrollRequest>; 2] {
        let a = &self.action;

        let horizontal = (a.pin_x && box_size.show_bar_x()).then(|| {
            let ratio = compute_ratio(box_size.sw, box_size.cw, gaps.x.gap, min_thumb_size).ratio;
            ScrollRequest {
                offset: ((pointer.x - a.start_x) * (1.0 / ratio) + a.last_scroll_left).floor(),
                horizontal: true,
            }
        });

        let vertical = (a.pin_y && box_size.show_bar_y()).then(|| {
            let ratio = compute_ratio(box_size.sh, box_size.ch, gaps.y.gap, min_thumb_size).ratio;
            ScrollRequest {
                offset: ((pointer.y - a.start_y) * (1.0 / ratio) + a.last_scroll_top).floor(),
                horizontal: false,
            }
        });

        [horizontal, vertical]
    }

    /// End the session. Resets both axes. Returns whether a drag was active.
    pub fn release(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.action = ActionPosition::default();
        if was_dragging {
            log::debug!("Drag released");
        }
        was_dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ratio::GapMetrics;

    fn wide_box() -> BoxSize {
        BoxSize {
            cw: 200.0,
            sw: 1000.0,
            ch: 200.0,
            sh: 200.0,
            ..BoxSize::default()
        }
    }

    #[test]
    fn test_initial_state_is_idle() {
        let drag = DragController::new();
        assert_eq!(drag.state(), DragState::Idle);
        assert_eq!(*drag.action(), ActionPosition::default());
    }

    #[test]
    fn test_press_horizontal_captures_start() {
        let mut drag = DragController::new();
        drag.press(
            Axis::Horizontal,
            Point::new(30.0, 195.0),
            ScrollPosition::new(120.0, 40.0),
        );
        assert_eq!(drag.state(), DragState::DraggingX);
        let a = drag.action();
        assert!(a.pin_x);
        assert!(!a.pin_y);
        assert_eq!(a.start_x, 30.0);
        assert_eq!(a.last_scroll_left, 120.0);
        assert_eq!(a.start_y, 0.0);
        assert_eq!(a.last_scroll_top, 0.0);
    }

    #[test]
    fn test_drag_delta_uses_inverse_ratio() {
        let mut drag = DragController::new();
        drag.press(
            Axis::Horizontal,
            Point::new(10.0, 195.0),
            ScrollPosition::new(50.0, 0.0),
        );

        let [h, v] = drag.drag_to(
            Point::new(110.0, 0.0),
            &wide_box(),
            &TrackGaps::default(),
            20.0,
        );

        assert_eq!(
            h,
            Some(ScrollRequest {
                offset: 550.0,
                horizontal: true
            })
        );
        assert_eq!(v, None);
    }

    #[test]
    fn test_drag_floors_fractional_offsets() {
        let mut drag = DragController::new();
        drag.press(Axis::Horizontal, Point::zero(), ScrollPosition::default());
        let [h, _] = drag.drag_to(
            Point::new(0.3, 0.0),
            &wide_box(),
            &TrackGaps::default(),
            20.0,
        );
        // 0.3 / 0.2 = 1.5
        assert_eq!(h.map(|r| r.offset), Some(1.0));
    }

    #[test]
    fn test_vertical_drag_uses_vertical_gap() {
        let box_size = BoxSize {
            cw: 200.0,
            sw: 1000.0,
            ch: 200.0,
            sh: 1000.0,
            ..BoxSize::default()
        };
        let gaps = TrackGaps {
            x: GapMetrics { start: 0.0, gap: 16.0 },
            y: GapMetrics { start: 0.0, gap: 16.0 },
        };
        let mut drag = DragController::new();
        drag.press(Axis::Vertical, Point::new(195.0, 0.0), ScrollPosition::default());

        let [h, v] = drag.drag_to(Point::new(0.0, 10.0), &box_size, &gaps, 20.0);

        assert_eq!(h, None);
        let v = v.unwrap();
        assert!(!v.horizontal);
        // ratio = (184 - 36.8) / 800 = 0.184
        assert_eq!(v.offset, 54.0);
    }

    #[test]
    fn test_release_without_move_resets_everything() {
        let mut drag = DragController::new();
        drag.press(
            Axis::Vertical,
            Point::new(4.0, 9.0),
            ScrollPosition::new(3.0, 77.0),
        );
        assert!(drag.release());
        assert_eq!(drag.state(), DragState::Idle);
        assert_eq!(*drag.action(), ActionPosition::default());
        assert!(!drag.release());
    }

    #[test]
    fn test_release_clears_both_pinned_axes() {
        let mut drag = DragController::new();
        drag.press(Axis::Horizontal, Point::new(1.0, 1.0), ScrollPosition::new(5.0, 6.0));
        drag.press(Axis::Vertical, Point::new(1.0, 1.0), ScrollPosition::new(5.0, 6.0));
        assert!(drag.is_pinned(Axis::Horizontal));
        assert!(drag.is_pinned(Axis::Vertical));

        drag.release();
        assert!(!drag.is_pinned(Axis::Horizontal));
        assert!(!drag.is_pinned(Axis::Vertical));
    }

    #[test]
    fn test_idle_move_requests_nothing() {
        let drag = DragController::new();
        let requests = drag.drag_to(
            Point::new(100.0, 100.0),
            &wide_box(),
            &TrackGaps::default(),
            20.0,
        );
        assert_eq!(requests, [None, None]);
    }
}
