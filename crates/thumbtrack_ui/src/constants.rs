//! Centralized constants for thumbtrack_ui
//!
//! Default geometry and timing used by the scrollbar engine. Configuration
//! values default to these.

use std::time::Duration;

// =============================================================================
// Track Geometry
// =============================================================================

/// Corner space reserved at the far end of each track when both bars show
pub const DEFAULT_TRACK_GAP: f32 = 16.0;

/// Thickness of a track (perpendicular to its scroll direction)
pub const DEFAULT_BAR_SIZE: f32 = 16.0;

/// Minimum scrollbar thumb length
pub const SCROLLBAR_MIN_THUMB: f32 = 20.0;

/// Default corner radius for thumbs
pub const THUMB_RADIUS: f32 = 4.0;

// =============================================================================
// Timing
// =============================================================================

/// Inactivity window after which a bar hides itself
pub const AUTO_HIDE_DELAY: Duration = Duration::from_millis(500);

/// Delay before both bars collapse when the pointer leaves the container
pub const LEAVE_HIDE_DELAY: Duration = Duration::ZERO;

/// Maximum wait of the `move_to` throttle window
pub const MOVE_THROTTLE_MAX_WAIT: Duration = Duration::from_millis(8);
