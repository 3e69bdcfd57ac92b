//! Deadline-based debounce and throttle.
//!
//! Timers never run on their own. The owner records events with the current
//! time and polls with the current time; a timer fires from `poll` once its
//! deadline has passed. `deadline()` tells the host when to wake up next.

use std::time::Duration;
use web_time::Instant;

/// Trailing-edge debounce: fires once `wait` has elapsed since the last
/// `schedule` call.
#[derive(Debug, Clone)]
pub struct Debounce {
    wait: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            deadline: None,
        }
    }

    /// (Re)start the timer, replacing any pending deadline.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.wait);
    }

    /// Drop the pending deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fire if the deadline has passed. Returns `true` exactly once per
    /// schedule.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Leading-edge throttle with a bounded trailing call.
///
/// The first call of a burst passes through immediately and opens a window
/// of `max_wait`. Calls inside the window only replace the pending value.
/// When the window closes the pending value fires, unless it equals the last
/// value that fired.
#[derive(Debug, Clone)]
pub struct Throttle<T> {
    max_wait: Duration,
    window_start: Option<Instant>,
    pending: Option<T>,
    last_fired: Option<T>,
}

impl<T: Clone + PartialEq> Throttle<T> {
    pub fn new(max_wait: Duration) -> Self {
        Self {
            max_wait,
            window_start: None,
            pending: None,
            last_fired: None,
        }
    }

    fn window_open(&self, now: Instant) -> bool {
        self.window_start
            .is_some_and(|start| now < start + self.max_wait)
    }

    /// Record a call. Returns the value if it should be applied right away.
    pub fn call(&mut self, now: Instant, value: T) -> Option<T> {
        if self.window_open(now) {
            self.pending = Some(value);
            return None;
        }
        // A late call supersedes whatever was still pending from the last window.
        self.window_start = Some(now);
        self.pending = None;
        self.last_fired = Some(value.clone());
        Some(value)
    }

    /// Close an elapsed window. Returns the coalesced value if it should be
    /// applied.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.window_start.is_none() || self.window_open(now) {
            return None;
        }
        self.window_start = None;
        let value = self.pending.take()?;
        if self.last_fired.as_ref() == Some(&value) {
            return None;
        }
        self.window_start = Some(now);
        self.last_fired = Some(value.clone());
        Some(value)
    }

    /// When the open window closes, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.window_start.map(|start| start + self.max_wait)
    }

    /// Forget the window and any pending value.
    pub fn cancel(&mut self) {
        self.window_start = None;
        self.pending = None;
    }
}
