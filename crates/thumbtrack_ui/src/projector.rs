//! Direct thumb painting
//!
//! Scroll sync is the hottest path of the engine, so thumb positions are
//! written straight onto the mounted track surfaces instead of rebuilding the
//! overlay node. [`ThumbSurface`] is that escape hatch; the overlay node only
//! carries the position for the initial render.

use crate::drag::ScrollPosition;
use crate::layout::Axis;
use crate::metrics::BoxSize;
use crate::ratio::compute_ratio;

/// A mounted track whose thumb can be translated without a re-render.
pub trait ThumbSurface {
    /// Translate the thumb along `axis` by `offset` pixels from the track start.
    fn set_thumb_offset(&mut self, axis: Axis, offset: f32);
}

/// Thumb offsets written by one projection. `None` for skipped axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThumbOffsets {
    pub x: Option<f32>,
    pub y: Option<f32>,
}

/// Thumb offset for a scroll offset on a shown bar.
pub fn thumb_offset(
    scroll_offset: f32,
    scroll_size: f32,
    client_size: f32,
    gap: f32,
    min_thumb_size: f32,
) -> f32 {
    scroll_offset * compute_ratio(scroll_size, client_size, gap, min_thumb_size).ratio
}

/// Project `position` onto the mounted track surfaces.
///
/// The ratio is recomputed from `box_size` on every call, so repeated calls
/// with the same inputs write the same values. Unmounted surfaces and axes
/// without overflow are skipped.
pub fn update_scroll_element_style(
    box_size: &BoxSize,
    position: ScrollPosition,
    horizontal_track: Option<&mut dyn ThumbSurface>,
    vertical_track: Option<&mut dyn ThumbSurface>,
    gap_x: f32,
    gap_y: f32,
    min_thumb_size: f32,
) -> ThumbOffsets {
    let mut offsets = ThumbOffsets::default();

    if let Some(track) = horizontal_track {
        if box_size.show_bar_x() {
            let offset = thumb_offset(
                position.scroll_left,
                box_size.sw,
                box_size.cw,
                gap_x,
                min_thumb_size,
            );
            track.set_thumb_offset(Axis::Horizontal, offset);
            offsets.x = Some(offset);
        }
    }

    if let Some(track) = vertical_track {
        if box_size.show_bar_y() {
            let offset = thumb_offset(
                position.scroll_top,
                box_size.sh,
                box_size.ch,
                gap_y,
                min_thumb_size,
            );
            track.set_thumb_offset(Axis::Vertical, offset);
            offsets.y = Some(offset);
        }
    }

    log::trace!("Projected {:?} to thumb offsets {:?}", position, offsets);
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        writes: Vec<(Axis, f32)>,
    }

    impl ThumbSurface for Recorder {
        fn set_thumb_offset(&mut self, axis: Axis, offset: f32) {
            self.writes.push((axis, offset));
        }
    }

    fn both_box() -> BoxSize {
        BoxSize {
            cw: 200.0,
            sw: 1000.0,
            ch: 100.0,
            sh: 100.0,
            ..BoxSize::default()
        }
    }

    #[test]
    fn test_offset_is_scroll_times_ratio() {
        let mut track = Recorder::default();
        let offsets = update_scroll_element_style(
            &both_box(),
            ScrollPosition::new(400.0, 0.0),
            Some(&mut track),
            None,
            0.0,
            0.0,
            20.0,
        );
        assert_eq!(track.writes.len(), 1);
        assert_eq!(track.writes[0].0, Axis::Horizontal);
        assert!((track.writes[0].1 - 80.0).abs() < 1e-3);
        assert_eq!(offsets.y, None);
    }

    #[test]
    fn test_repeated_projection_is_stable() {
        let mut track = Recorder::default();
        for _ in 0..5 {
            update_scroll_element_style(
                &both_box(),
                ScrollPosition::new(123.0, 0.0),
                Some(&mut track),
                None,
                0.0,
                0.0,
                20.0,
            );
        }
        let first = track.writes[0];
        assert!(track.writes.iter().all(|w| *w == first));
    }

    #[test]
    fn test_unmounted_tracks_are_skipped() {
        let offsets = update_scroll_element_style(
            &both_box(),
            ScrollPosition::new(10.0, 10.0),
            None,
            None,
            0.0,
            0.0,
            20.0,
        );
        assert_eq!(offsets, ThumbOffsets::default());
    }

    #[test]
    fn test_axis_without_overflow_is_not_painted() {
        let mut track = Recorder::default();
        let offsets = update_scroll_element_style(
            &both_box(),
            ScrollPosition::new(0.0, 10.0),
            None,
            Some(&mut track),
            0.0,
            0.0,
            20.0,
        );
        assert!(track.writes.is_empty());
        assert_eq!(offsets.y, None);
    }
}
