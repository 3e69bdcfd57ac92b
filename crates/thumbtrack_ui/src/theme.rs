//! Skins for the overlay scrollbar
//!
//! Provides light and dark palettes. Track and thumb colors resolve against
//! the active skin unless a style override replaces them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Theme id of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Skin {
    #[default]
    Light,
    Dark,
}

impl Skin {
    /// Theme id as used in configuration files.
    pub fn id(&self) -> &'static str {
        match self {
            Skin::Light => "light",
            Skin::Dark => "dark",
        }
    }

    /// Colors of this skin.
    pub fn palette(&self) -> ScrollbarPalette {
        match self {
            Skin::Light => ScrollbarPalette::light(),
            Skin::Dark => ScrollbarPalette::dark(),
        }
    }
}

impl fmt::Display for Skin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Unknown theme id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown skin '{0}', expected 'light' or 'dark'")]
pub struct ParseSkinError(pub String);

impl FromStr for Skin {
    type Err = ParseSkinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Skin::Light),
            "dark" => Ok(Skin::Dark),
            other => Err(ParseSkinError(other.to_string())),
        }
    }
}

/// Colors for scrollbar rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollbarPalette {
    /// Track background
    pub track: Color,
    /// Thumb when idle
    pub thumb: Color,
    /// Thumb while pinned by a drag
    pub thumb_active: Color,
}

impl ScrollbarPalette {
    /// Subtle dark thumb on a near-transparent track
    pub fn light() -> Self {
        Self {
            track: Color::rgba(0.88, 0.88, 0.90, 0.3),
            thumb: Color::rgba(0.0, 0.0, 0.0, 0.45),
            thumb_active: Color::rgba(0.0, 0.0, 0.0, 0.6),
        }
    }

    /// Light thumb for dark backgrounds
    pub fn dark() -> Self {
        Self {
            track: Color::rgba(0.12, 0.12, 0.15, 0.3),
            thumb: Color::rgba(1.0, 1.0, 1.0, 0.4),
            thumb_active: Color::rgba(1.0, 1.0, 1.0, 0.6),
        }
    }
}

impl Default for ScrollbarPalette {
    fn default() -> Self {
        Skin::default().palette()
    }
}
