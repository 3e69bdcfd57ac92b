//! Auto-hide timers for the two bars
//!
//! Scroll activity on an axis shows that axis's bar at once and schedules a
//! hide after [`AUTO_HIDE_DELAY`]; more activity pushes the hide back. The
//! pointer leaving the container schedules a zero-delay collapse of both
//! bars. With auto-hide suppressed nothing is ever scheduled.

use crate::constants::{AUTO_HIDE_DELAY, LEAVE_HIDE_DELAY};
use crate::layout::Axis;
use crate::timing::Debounce;
use web_time::Instant;

/// Visibility of one bar plus its pending hide.
#[derive(Debug, Clone)]
struct AxisVisibility {
    visible: bool,
    hide: Debounce,
}

impl AxisVisibility {
    fn new() -> Self {
        Self {
            visible: false,
            hide: Debounce::new(AUTO_HIDE_DELAY),
        }
    }
}

/// Debounced per-axis show/hide state.
#[derive(Debug, Clone)]
pub struct VisibilityController {
    x: AxisVisibility,
    y: AxisVisibility,
    leave_hide: Debounce,
    suppress_auto_hide: bool,
}

impl VisibilityController {
    pub fn new(suppress_auto_hide: bool) -> Self {
        Self {
            x: AxisVisibility::new(),
            y: AxisVisibility::new(),
            leave_hide: Debounce::new(LEAVE_HIDE_DELAY),
            suppress_auto_hide,
        }
    }

    fn axis(&self, axis: Axis) -> &AxisVisibility {
        match axis {
            Axis::Horizontal => &self.x,
            Axis::Vertical => &self.y,
        }
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut AxisVisibility {
        match axis {
            Axis::Horizontal => &mut self.x,
            Axis::Vertical => &mut self.y,
        }
    }

    pub fn is_visible(&self, axis: Axis) -> bool {
        self.axis(axis).visible
    }

    /// Whether a hide is pending for `axis`.
    pub fn hide_pending(&self, axis: Axis) -> bool {
        self.axis(axis).hide.is_pending()
    }

    /// Show `axis` now and restart its hide timer.
    pub fn on_scroll_activity(&mut self, axis: Axis, now: Instant) {
        let suppress = self.suppress_auto_hide;
        let state = self.axis_mut(axis);
        state.visible = true;
        if !suppress {
            state.hide.schedule(now);
        }
    }

    /// Collapse both bars at the next poll.
    pub fn on_pointer_leave(&mut self, now: Instant) {
        if !self.suppress_auto_hide {
            self.leave_hide.schedule(now);
        }
    }

    /// Fire every due timer. Returns `true` if any visibility changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut changed = false;

        for (axis, state) in [(Axis::Horizontal, &mut self.x), (Axis::Vertical, &mut self.y)] {
            if state.hide.poll(now) && state.visible {
                log::trace!("Auto-hiding {:?} bar", axis);
                state.visible = false;
                changed = true;
            }
        }

        if self.leave_hide.poll(now) && (self.x.visible || self.y.visible) {
            log::trace!("Pointer left container, hiding both bars");
            self.x.visible = false;
            self.y.visible = false;
            changed = true;
        }

        changed
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.x.hide.deadline(),
            self.y.hide.deadline(),
            self.leave_hide.deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Cancel all pending timers, leaving visibility as it is.
    pub fn clear_timers(&mut self) {
        self.x.hide.cancel();
        self.y.hide.cancel();
        self.leave_hide.cancel();
    }
}
