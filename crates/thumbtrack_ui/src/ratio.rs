//! Thumb sizing and scroll-to-pixel ratio
//!
//! This module turns box metrics into track geometry: how much of a track is
//! usable once the corner is reserved, how long the thumb is, and how many
//! thumb pixels one content pixel of scrolling is worth.

use crate::constants::DEFAULT_TRACK_GAP;
use serde::{Deserialize, Serialize};

/// Track inset configuration.
///
/// Deserializes from either a number (`16`) or a four-element array
/// (`[start_x, gap_x, start_y, gap_y]`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrackGap {
    /// Corner reservation applied to the far end of both tracks
    Uniform(f32),
    /// Explicit `[start_x, gap_x, start_y, gap_y]` insets
    Explicit([f32; 4]),
}

impl Default for TrackGap {
    fn default() -> Self {
        TrackGap::Uniform(DEFAULT_TRACK_GAP)
    }
}

impl From<f32> for TrackGap {
    fn from(gap: f32) -> Self {
        TrackGap::Uniform(gap)
    }
}

/// Track inset and reserved length for one axis.
///
/// `start` is where the track begins along its axis; `gap` is the total
/// length removed from the client size (start inset plus far-end
/// reservation), so the usable track length is `client_size - gap`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GapMetrics {
    pub start: f32,
    pub gap: f32,
}

/// Gap metrics of both axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackGaps {
    pub x: GapMetrics,
    pub y: GapMetrics,
}

/// Compute track insets for the current bar visibility.
///
/// The far-end corner is reserved only when both bars are shown.
pub fn get_gap_size(track_gap: TrackGap, show_bar_x: bool, show_bar_y: bool) -> TrackGaps {
    let both = show_bar_x && show_bar_y;
    match track_gap {
        TrackGap::Uniform(gap) => {
            let end = if both { gap } else { 0.0 };
            TrackGaps {
                x: GapMetrics { start: 0.0, gap: end },
                y: GapMetrics { start: 0.0, gap: end },
            }
        }
        TrackGap::Explicit([start_x, gap_x, start_y, gap_y]) => {
            let (end_x, end_y) = if both { (gap_x, gap_y) } else { (0.0, 0.0) };
            TrackGaps {
                x: GapMetrics {
                    start: start_x,
                    gap: start_x + end_x,
                },
                y: GapMetrics {
                    start: start_y,
                    gap: start_y + end_y,
                },
            }
        }
    }
}

/// Thumb length and scroll-to-thumb conversion factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbRatio {
    /// Thumb pixels per content pixel
    pub ratio: f32,
    /// Thumb length along the track
    pub thumb_size: f32,
}

/// Compute thumb size and ratio for one axis.
///
/// Only call this for a shown bar (`scroll_size > client_size`); the ratio is
/// undefined at `scroll_size == client_size` and is not clamped here.
pub fn compute_ratio(
    scroll_size: f32,
    client_size: f32,
    gap: f32,
    min_thumb_size: f32,
) -> ThumbRatio {
    let track = client_size - gap;
    let thumb_size = min_thumb_size.max(track * client_size / scroll_size);
    let ratio = (track - thumb_size) / (scroll_size - client_size);
    ThumbRatio { ratio, thumb_size }
}
