//! thumbtrack_ui - auto-hiding overlay scrollbars for scrollable containers
//!
//! The crate computes thumb geometry from container metrics, paints thumb
//! positions directly onto mounted track surfaces, turns thumb drags into
//! scroll requests and hides idle bars after a delay. Hosts plug in through
//! small traits: [`ScrollContainer`], [`ThumbSurface`], [`EventRegistry`] and
//! [`ObservationBridge`].

mod callback;
mod config;
pub mod constants;
mod controller;
mod drag;
mod event;
mod layout;
mod listeners;
mod metrics;
mod observe;
mod overlay;
mod projector;
mod ratio;
mod theme;
mod timing;
mod visibility;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use callback::Callback;
pub use config::{ScrollbarConfig, StyleOverride};
pub use controller::{listener_specs, ScrollbarController};
pub use drag::{ActionPosition, DragController, DragState, ScrollPosition, ScrollRequest};
pub use event::{EventKind, EventStatus, ListenTarget, MouseButton, Phase, PointerEvent};
pub use layout::{Axis, Padding, Point, Rectangle, Size};
pub use listeners::{EventRegistry, ListenerId, ListenerSet, ListenerSpec};
pub use metrics::{extract_size, parse_css_px, BoxSize, ScrollContainer};
pub use observe::{LayoutTrigger, ObservationBridge};
pub use overlay::{Overlay, OverlayHit, TrackNode};
pub use projector::{thumb_offset, update_scroll_element_style, ThumbOffsets, ThumbSurface};
pub use ratio::{compute_ratio, get_gap_size, GapMetrics, ThumbRatio, TrackGap, TrackGaps};
pub use theme::{Color, ParseSkinError, ScrollbarPalette, Skin};
pub use timing::{Debounce, Throttle};
pub use visibility::VisibilityController;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Axis, Callback, EventRegistry, EventStatus, ObservationBridge, Overlay, Point,
        PointerEvent, ScrollContainer, ScrollPosition, ScrollRequest, ScrollbarConfig,
        ScrollbarController, ThumbSurface,
    };
}
