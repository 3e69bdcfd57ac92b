//! Container box metrics.
//!
//! [`extract_size`] is the only place the engine reads geometry from the
//! container. It is comparatively expensive on real hosts (DOM layout
//! queries), so the controller calls it on mount, pointer-enter and layout
//! triggers only, never while scrolling or dragging.

use crate::layout::{Padding, Size};
use std::rc::Rc;

/// Snapshot of a container's box metrics.
///
/// `cw`/`ch` are the client (visible) width and height, `sw`/`sh` the full
/// scrollable width and height, and `pt`/`pr`/`pb`/`pl` the padding insets.
/// Client sizes include the padding, so geometry built in padding-box
/// coordinates does not read the insets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxSize {
    pub cw: f32,
    pub sw: f32,
    pub ch: f32,
    pub sh: f32,
    pub pt: f32,
    pub pr: f32,
    pub pb: f32,
    pub pl: f32,
}

impl BoxSize {
    /// Build a snapshot from client size, scroll size and padding.
    pub fn new(client: Size, scroll: Size, padding: Padding) -> Self {
        Self {
            cw: client.width,
            sw: scroll.width,
            ch: client.height,
            sh: scroll.height,
            pt: padding.top,
            pr: padding.right,
            pb: padding.bottom,
            pl: padding.left,
        }
    }

    /// Horizontal content overflows the container.
    pub fn show_bar_x(&self) -> bool {
        self.sw - self.cw > 0.0
    }

    /// Vertical content overflows the container.
    pub fn show_bar_y(&self) -> bool {
        self.sh - self.ch > 0.0
    }

    pub fn padding(&self) -> Padding {
        Padding::new(self.pt, self.pr, self.pb, self.pl)
    }

    /// Largest valid horizontal scroll offset.
    pub fn max_scroll_left(&self) -> f32 {
        (self.sw - self.cw).max(0.0)
    }

    /// Largest valid vertical scroll offset.
    pub fn max_scroll_top(&self) -> f32 {
        (self.sh - self.ch).max(0.0)
    }
}

/// Read access to a scrollable container's geometry.
pub trait ScrollContainer {
    /// Visible size of the container, padding included.
    fn client_size(&self) -> Size;

    /// Full size of the scrollable content.
    fn scroll_size(&self) -> Size;

    /// Computed padding of the container.
    fn padding(&self) -> Padding;

    /// Whether the container is currently attached to the host.
    fn is_mounted(&self) -> bool {
        true
    }
}

impl<T: ScrollContainer + ?Sized> ScrollContainer for Rc<T> {
    fn client_size(&self) -> Size {
        (**self).client_size()
    }

    fn scroll_size(&self) -> Size {
        (**self).scroll_size()
    }

    fn padding(&self) -> Padding {
        (**self).padding()
    }

    fn is_mounted(&self) -> bool {
        (**self).is_mounted()
    }
}

/// Take a metrics snapshot of `container`.
pub fn extract_size(container: &dyn ScrollContainer) -> BoxSize {
    BoxSize::new(
        container.client_size(),
        container.scroll_size(),
        container.padding(),
    )
}

/// Integer pixel value of a computed CSS length such as `"12.5px"`.
///
/// Only the leading integer part counts; anything unparsable reads as 0.
pub fn parse_css_px(value: &str) -> f32 {
    let value = value.trim();
    let end = value
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map_or(value.len(), |(i, _)| i);
    value[..end].parse::<i32>().map_or(0.0, |px| px as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl ScrollContainer for Fixed {
        fn client_size(&self) -> Size {
            Size::new(200.0, 100.0)
        }

        fn scroll_size(&self) -> Size {
            Size::new(200.0, 400.0)
        }

        fn padding(&self) -> Padding {
            Padding::new(1.0, 2.0, 3.0, 4.0)
        }
    }

    #[test]
    fn test_extract_size_copies_metrics() {
        let size = extract_size(&Fixed);
        assert_eq!(size.cw, 200.0);
        assert_eq!(size.sw, 200.0);
        assert_eq!(size.ch, 100.0);
        assert_eq!(size.sh, 400.0);
        assert_eq!(size.padding(), Padding::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_bar_shown_only_on_overflow() {
        let size = extract_size(&Fixed);
        assert!(!size.show_bar_x());
        assert!(size.show_bar_y());
        assert_eq!(size.max_scroll_left(), 0.0);
        assert_eq!(size.max_scroll_top(), 300.0);
    }

    #[test]
    fn test_default_snapshot_shows_nothing() {
        let size = BoxSize::default();
        assert!(!size.show_bar_x());
        assert!(!size.show_bar_y());
    }

    #[test]
    fn test_parse_css_px() {
        assert_eq!(parse_css_px("12px"), 12.0);
        assert_eq!(parse_css_px("12.75px"), 12.0);
        assert_eq!(parse_css_px(" 0px "), 0.0);
        assert_eq!(parse_css_px("-3px"), -3.0);
        assert_eq!(parse_css_px(""), 0.0);
        assert_eq!(parse_css_px("auto"), 0.0);
    }

    #[test]
    fn test_rc_container_delegates() {
        let shared = Rc::new(Fixed);
        assert_eq!(extract_size(&shared), extract_size(&Fixed));
    }
}
