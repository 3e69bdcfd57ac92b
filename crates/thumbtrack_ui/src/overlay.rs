//! Renderable overlay node
//!
//! [`Overlay`] describes what the host should render on top of the
//! container: at most one track per axis, each with its thumb. It is rebuilt
//! from controller state on demand and holds no state of its own. Thumb
//! offsets in the node reflect the position at build time; between renders
//! the projector moves thumbs directly through their surfaces.
//!
//! All bounds are in the container's padding-box coordinate space. The
//! client size already spans the padding and an absolutely positioned
//! overlay is laid out against the padding box, so tracks sit flush with the
//! client edges and the padding insets never enter the geometry. A host that
//! renders in content-box coordinates offsets by [`BoxSize::padding`].

use crate::config::ScrollbarConfig;
use crate::constants::THUMB_RADIUS;
use crate::drag::{DragController, ScrollPosition, ScrollRequest};
use crate::layout::{Axis, Point, Rectangle};
use crate::metrics::BoxSize;
use crate::projector::thumb_offset;
use crate::ratio::{compute_ratio, get_gap_size, GapMetrics};
use crate::theme::{Color, Skin};
use crate::visibility::VisibilityController;

/// One axis's track and thumb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackNode {
    pub axis: Axis,
    /// Shown by scroll activity or pinned by a drag
    pub visible: bool,
    /// Drag-locked by the pointer
    pub pinned: bool,
    /// Track rectangle
    pub track: Rectangle,
    /// Thumb length along the track
    pub thumb_size: f32,
    /// Thumb offset from the track start
    pub thumb_offset: f32,
    /// Thumb pixels per content pixel
    pub ratio: f32,
    pub track_color: Color,
    pub thumb_color: Color,
    pub track_radius: f32,
    pub thumb_radius: f32,
}

impl TrackNode {
    /// Rectangle currently covered by the thumb.
    pub fn thumb_bounds(&self) -> Rectangle {
        match self.axis {
            Axis::Horizontal => Rectangle::new(
                self.track.x + self.thumb_offset,
                self.track.y,
                self.thumb_size,
                self.track.height,
            ),
            Axis::Vertical => Rectangle::new(
                self.track.x,
                self.track.y + self.thumb_offset,
                self.track.width,
                self.thumb_size,
            ),
        }
    }

    /// Request that centers the thumb on `pointer`, clamped to
    /// `[0, max_scroll]`.
    pub fn jump_request(&self, pointer: Point, max_scroll: f32) -> ScrollRequest {
        let along = self.axis.along(pointer) - self.track.start(self.axis);
        let offset = ((along - self.thumb_size / 2.0) / self.ratio)
            .floor()
            .clamp(0.0, max_scroll);
        ScrollRequest {
            offset,
            horizontal: self.axis.is_horizontal(),
        }
    }
}

/// What a point on the overlay hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayHit {
    Thumb(Axis),
    Track(Axis),
}

/// The overlay node: skin plus optional horizontal and vertical tracks.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub skin: Skin,
    pub horizontal: Option<TrackNode>,
    pub vertical: Option<TrackNode>,
}

impl Overlay {
    /// Build the overlay for the given state.
    pub fn build(
        config: &ScrollbarConfig,
        box_size: &BoxSize,
        position: ScrollPosition,
        visibility: &VisibilityController,
        drag: &DragController,
    ) -> Self {
        let show_x = box_size.show_bar_x();
        let show_y = box_size.show_bar_y();
        let gaps = get_gap_size(config.track_gap, show_x, show_y);

        let horizontal = (show_x && !config.suppress_scroll_x).then(|| {
            track_node(
                Axis::Horizontal,
                config,
                box_size,
                position,
                gaps.x,
                visibility,
                drag,
            )
        });
        let vertical = (show_y && !config.suppress_scroll_y).then(|| {
            track_node(
                Axis::Vertical,
                config,
                box_size,
                position,
                gaps.y,
                visibility,
                drag,
            )
        });

        Self {
            skin: config.skin,
            horizontal,
            vertical,
        }
    }

    pub fn track(&self, axis: Axis) -> Option<&TrackNode> {
        match axis {
            Axis::Horizontal => self.horizontal.as_ref(),
            Axis::Vertical => self.vertical.as_ref(),
        }
    }

    /// Find the thumb or track under `point`. Thumbs win over tracks.
    pub fn hit_test(&self, point: Point) -> Option<OverlayHit> {
        let nodes = [self.horizontal.as_ref(), self.vertical.as_ref()];

        for node in nodes.iter().flatten() {
            if node.thumb_bounds().contains(point) {
                return Some(OverlayHit::Thumb(node.axis));
            }
        }
        nodes
            .iter()
            .flatten()
            .find(|node| node.track.contains(point))
            .map(|node| OverlayHit::Track(node.axis))
    }
}

fn track_node(
    axis: Axis,
    config: &ScrollbarConfig,
    box_size: &BoxSize,
    position: ScrollPosition,
    gap: GapMetrics,
    visibility: &VisibilityController,
    drag: &DragController,
) -> TrackNode {
    let bar = config.bar_size;
    let (scroll_size, client_size, scroll_offset, track) = match axis {
        Axis::Horizontal => (
            box_size.sw,
            box_size.cw,
            position.scroll_left,
            Rectangle::new(gap.start, box_size.ch - bar, box_size.cw - gap.gap, bar),
        ),
        Axis::Vertical => (
            box_size.sh,
            box_size.ch,
            position.scroll_top,
            Rectangle::new(box_size.cw - bar, gap.start, bar, box_size.ch - gap.gap),
        ),
    };

    let ratio = compute_ratio(scroll_size, client_size, gap.gap, config.min_thumb_size);
    let pinned = drag.is_pinned(axis);
    let palette = config.skin.palette();
    let default_thumb = if pinned {
        palette.thumb_active
    } else {
        palette.thumb
    };

    TrackNode {
        axis,
        visible: visibility.is_visible(axis) || pinned,
        pinned,
        track,
        thumb_size: ratio.thumb_size,
        thumb_offset: thumb_offset(
            scroll_offset,
            scroll_size,
            client_size,
            gap.gap,
            config.min_thumb_size,
        ),
        ratio: ratio.ratio,
        track_color: config.track_style.color.unwrap_or(palette.track),
        thumb_color: config.thumb_style.color.unwrap_or(default_thumb),
        track_radius: config.track_style.radius.unwrap_or(0.0),
        thumb_radius: config.thumb_style.radius.unwrap_or(THUMB_RADIUS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StyleOverride;
    use crate::theme::ScrollbarPalette;
    use web_time::Instant;

    fn both_box() -> BoxSize {
        BoxSize {
            cw: 200.0,
            sw: 1000.0,
            ch: 200.0,
            sh: 1000.0,
            ..BoxSize::default()
        }
    }

    fn build(config: &ScrollbarConfig, box_size: &BoxSize, position: ScrollPosition) -> Overlay {
        Overlay::build(
            config,
            box_size,
            position,
            &VisibilityController::new(false),
            &DragController::new(),
        )
    }

    #[test]
    fn test_padding_does_not_move_tracks() {
        let padded = BoxSize {
            pt: 10.0,
            pr: 20.0,
            pb: 30.0,
            pl: 40.0,
            ..both_box()
        };
        let config = ScrollbarConfig::default();
        let position = ScrollPosition::new(100.0, 50.0);
        let plain = build(&config, &both_box(), position);
        let overlay = build(&config, &padded, position);

        assert_eq!(overlay.horizontal, plain.horizontal);
        assert_eq!(overlay.vertical, plain.vertical);
        let vertical = overlay.vertical.unwrap();
        assert_eq!(vertical.track.x, 200.0 - config.bar_size);
    }

    #[test]
    fn test_no_overflow_no_tracks() {
        let box_size = BoxSize {
            cw: 200.0,
            sw: 200.0,
            ch: 200.0,
            sh: 150.0,
            ..BoxSize::default()
        };
        let overlay = build(&ScrollbarConfig::default(), &box_size, ScrollPosition::default());
        assert!(overlay.horizontal.is_none());
        assert!(overlay.vertical.is_none());
        assert_eq!(overlay.skin, Skin::Light);
    }

    #[test]
    fn test_both_tracks_reserve_corner() {
        let overlay = build(&ScrollbarConfig::default(), &both_box(), ScrollPosition::default());
        let h = overlay.horizontal.unwrap();
        let v = overlay.vertical.unwrap();
        assert_eq!(h.track, Rectangle::new(0.0, 184.0, 184.0, 16.0));
        assert_eq!(v.track, Rectangle::new(184.0, 0.0, 16.0, 184.0));
    }

    #[test]
    fn test_single_track_uses_full_length() {
        let box_size = BoxSize {
            sh: 200.0,
            ..both_box()
        };
        let overlay = build(&ScrollbarConfig::default(), &box_size, ScrollPosition::default());
        let h = overlay.horizontal.unwrap();
        assert_eq!(h.track.width, 200.0);
        assert!((h.thumb_size - 40.0).abs() < 1e-4);
        assert!(overlay.vertical.is_none());
    }

    #[test]
    fn test_suppressed_axis_is_not_rendered() {
        let config = ScrollbarConfig::default().suppress_scroll_y(true);
        let overlay = build(&config, &both_box(), ScrollPosition::default());
        assert!(overlay.horizontal.is_some());
        assert!(overlay.vertical.is_none());
    }

    #[test]
    fn test_thumb_offset_follows_position() {
        let box_size = BoxSize {
            sh: 200.0,
            ..both_box()
        };
        let overlay = build(
            &ScrollbarConfig::default(),
            &box_size,
            ScrollPosition::new(500.0, 0.0),
        );
        let h = overlay.horizontal.unwrap();
        assert!((h.thumb_offset - 100.0).abs() < 1e-3);
        let thumb = h.thumb_bounds();
        assert!((thumb.x - 100.0).abs() < 1e-3);
        assert!((thumb.width - 40.0).abs() < 1e-3);
    }

    #[test]
    fn test_hit_test_prefers_thumb() {
        let box_size = BoxSize {
            sh: 200.0,
            ..both_box()
        };
        let overlay = build(&ScrollbarConfig::default(), &box_size, ScrollPosition::default());
        assert_eq!(
            overlay.hit_test(Point::new(10.0, 190.0)),
            Some(OverlayHit::Thumb(Axis::Horizontal))
        );
        assert_eq!(
            overlay.hit_test(Point::new(150.0, 190.0)),
            Some(OverlayHit::Track(Axis::Horizontal))
        );
        assert_eq!(overlay.hit_test(Point::new(150.0, 50.0)), None);
    }

    #[test]
    fn test_jump_request_centers_thumb() {
        let box_size = BoxSize {
            sh: 200.0,
            ..both_box()
        };
        let overlay = build(&ScrollbarConfig::default(), &box_size, ScrollPosition::default());
        let h = overlay.horizontal.unwrap();

        // (120 - 20) / 0.2
        let request = h.jump_request(Point::new(120.0, 190.0), box_size.max_scroll_left());
        assert_eq!(
            request,
            ScrollRequest {
                offset: 500.0,
                horizontal: true
            }
        );

        let request = h.jump_request(Point::new(5.0, 190.0), box_size.max_scroll_left());
        assert_eq!(request.offset, 0.0);
        let request = h.jump_request(Point::new(199.0, 190.0), box_size.max_scroll_left());
        assert_eq!(request.offset, 800.0);
    }

    #[test]
    fn test_visibility_and_pin_flow_into_nodes() {
        let mut visibility = VisibilityController::new(false);
        visibility.on_scroll_activity(Axis::Vertical, Instant::now());
        let mut drag = DragController::new();
        drag.press(Axis::Horizontal, Point::new(5.0, 190.0), ScrollPosition::default());

        let overlay = Overlay::build(
            &ScrollbarConfig::default(),
            &both_box(),
            ScrollPosition::default(),
            &visibility,
            &drag,
        );
        let h = overlay.horizontal.unwrap();
        let v = overlay.vertical.unwrap();
        assert!(h.visible && h.pinned);
        assert!(v.visible && !v.pinned);
        assert_eq!(h.thumb_color, ScrollbarPalette::light().thumb_active);
        assert_eq!(v.thumb_color, ScrollbarPalette::light().thumb);
    }

    #[test]
    fn test_style_overrides_win_over_skin() {
        let red = Color::rgb(1.0, 0.0, 0.0);
        let config = ScrollbarConfig::default()
            .skin(Skin::Dark)
            .thumb_style(StyleOverride::new().color(red).radius(1.0));
        let overlay = build(&config, &both_box(), ScrollPosition::default());
        let v = overlay.vertical.unwrap();
        assert_eq!(overlay.skin, Skin::Dark);
        assert_eq!(v.thumb_color, red);
        assert_eq!(v.thumb_radius, 1.0);
        assert_eq!(v.track_color, ScrollbarPalette::dark().track);
    }
}
