//! Scrollbar configuration.
//!
//! Every field has a default, so a configuration file only needs to name the
//! values it changes. Values are taken as given; a negative gap or minimum
//! thumb size is not corrected.

use crate::constants::{DEFAULT_BAR_SIZE, SCROLLBAR_MIN_THUMB};
use crate::ratio::TrackGap;
use crate::theme::{Color, Skin};
use serde::{Deserialize, Serialize};

/// Style overrides for a track or thumb. Unset fields fall back to the skin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOverride {
    /// Fill color
    pub color: Option<Color>,
    /// Corner radius
    pub radius: Option<f32>,
}

impl StyleOverride {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fill color.
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the corner radius.
    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }
}

/// Configuration for the overlay scrollbar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollbarConfig {
    /// Theme id of the overlay
    pub skin: Skin,
    /// Track insets and corner reservation
    pub track_gap: TrackGap,
    /// Track style overrides
    pub track_style: StyleOverride,
    /// Thumb style overrides
    pub thumb_style: StyleOverride,
    /// Minimum thumb length
    pub min_thumb_size: f32,
    /// Track thickness
    pub bar_size: f32,
    /// Keep bars visible once shown
    pub suppress_auto_hide: bool,
    /// Never render the horizontal bar
    pub suppress_scroll_x: bool,
    /// Never render the vertical bar
    pub suppress_scroll_y: bool,
}

impl Default for ScrollbarConfig {
    fn default() -> Self {
        Self {
            skin: Skin::default(),
            track_gap: TrackGap::default(),
            track_style: StyleOverride::default(),
            thumb_style: StyleOverride::default(),
            min_thumb_size: SCROLLBAR_MIN_THUMB,
            bar_size: DEFAULT_BAR_SIZE,
            suppress_auto_hide: false,
            suppress_scroll_x: false,
            suppress_scroll_y: false,
        }
    }
}

impl ScrollbarConfig {
    /// Create a new scrollbar configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the skin.
    pub fn skin(mut self, skin: Skin) -> Self {
        self.skin = skin;
        self
    }

    /// Set the track gap.
    pub fn track_gap(mut self, gap: impl Into<TrackGap>) -> Self {
        self.track_gap = gap.into();
        self
    }

    /// Set the track style overrides.
    pub fn track_style(mut self, style: StyleOverride) -> Self {
        self.track_style = style;
        self
    }

    /// Set the thumb style overrides.
    pub fn thumb_style(mut self, style: StyleOverride) -> Self {
        self.thumb_style = style;
        self
    }

    /// Set the minimum thumb length.
    pub fn min_thumb_size(mut self, size: f32) -> Self {
        self.min_thumb_size = size;
        self
    }

    /// Set the track thickness.
    pub fn bar_size(mut self, size: f32) -> Self {
        self.bar_size = size;
        self
    }

    /// Keep bars visible once shown.
    pub fn suppress_auto_hide(mut self, suppress: bool) -> Self {
        self.suppress_auto_hide = suppress;
        self
    }

    /// Never render the horizontal bar.
    pub fn suppress_scroll_x(mut self, suppress: bool) -> Self {
        self.suppress_scroll_x = suppress;
        self
    }

    /// Never render the vertical bar.
    pub fn suppress_scroll_y(mut self, suppress: bool) -> Self {
        self.suppress_scroll_y = suppress;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScrollbarConfig::default();
        assert_eq!(config.skin, Skin::Light);
        assert_eq!(config.track_gap, TrackGap::Uniform(16.0));
        assert_eq!(config.min_thumb_size, 20.0);
        assert!(!config.suppress_auto_hide);
        assert!(!config.suppress_scroll_x);
        assert!(!config.suppress_scroll_y);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: ScrollbarConfig = serde_json::from_str(
            r#"{ "skin": "dark", "track_gap": [2, 14, 2, 14], "suppress_auto_hide": true }"#,
        )
        .unwrap();
        assert_eq!(config.skin, Skin::Dark);
        assert_eq!(config.track_gap, TrackGap::Explicit([2.0, 14.0, 2.0, 14.0]));
        assert!(config.suppress_auto_hide);
        assert_eq!(config.min_thumb_size, 20.0);
        assert_eq!(config.thumb_style, StyleOverride::default());
    }

    #[test]
    fn test_builder() {
        let config = ScrollbarConfig::new()
            .track_gap(8.0_f32)
            .min_thumb_size(30.0)
            .thumb_style(StyleOverride::new().radius(2.0))
            .suppress_scroll_x(true);
        assert_eq!(config.track_gap, TrackGap::Uniform(8.0));
        assert_eq!(config.min_thumb_size, 30.0);
        assert_eq!(config.thumb_style.radius, Some(2.0));
        assert!(config.suppress_scroll_x);
    }
}
