//! Callback abstraction for host notifications
//!
//! The controller asks the host to apply scroll offsets through a callback
//! instead of mutating the container itself. `Callback<T, M>` wraps the
//! optional boxed closure so the controller does not repeat
//! `Option<Box<dyn FnMut(T) -> M>>` everywhere.
//!
//! # Examples
//!
//! ```
//! use thumbtrack_ui::{Callback, ScrollRequest};
//!
//! let mut on_scroll: Callback<ScrollRequest> = Callback::new(|request: ScrollRequest| {
//!     assert!(request.horizontal);
//! });
//! on_scroll.call(ScrollRequest { offset: 120.0, horizontal: true });
//! ```

use std::fmt;

/// A callback wrapper that encapsulates an optional handler.
///
/// # Type Parameters
///
/// - `T`: The input type for the callback (e.g. a scroll request)
/// - `M`: The value returned by the callback
pub struct Callback<T, M = ()> {
    f: Option<Box<dyn FnMut(T) -> M>>,
}

impl<T, M> Callback<T, M> {
    /// Create a new callback from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: FnMut(T) -> M + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty callback (no handler).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Call the callback with a value, if it exists.
    ///
    /// Returns `Some(result)` if the callback is set, or `None` if no handler is registered.
    pub fn call(&mut self, value: T) -> Option<M> {
        self.f.as_mut().map(|f| f(value))
    }

    /// Check if the callback is set.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }

    /// Check if the callback is not set.
    pub fn is_none(&self) -> bool {
        self.f.is_none()
    }
}

impl<T, M> Default for Callback<T, M> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T, M> fmt::Debug for Callback<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("set", &self.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_callback_none_returns_none() {
        let mut callback: Callback<i32, i32> = Callback::none();
        assert!(callback.is_none());
        assert_eq!(callback.call(1), None);
    }

    #[test]
    fn test_callback_can_mutate_captured_state() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut callback: Callback<i32> = Callback::new(move |v| sink.borrow_mut().push(v));

        callback.call(3);
        callback.call(5);

        assert_eq!(*seen.borrow(), vec![3, 5]);
    }

    #[test]
    fn test_debug_reports_presence() {
        let callback: Callback<(), ()> = Callback::new(|_| ());
        assert_eq!(format!("{callback:?}"), "Callback { set: true }");
    }
}
