// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Overlay**: Controls overlay auto-hide timeout
//! - **Volume**: Player volume settings
//! - **Playback Rate**: Speed bounds and presets
//! - **Gestures**: Drag-to-seek tuning
//! - **Live Stream**: Live edge detection
//! - **Notification**: Listener fan-out limits

// ==========================================================================
// Overlay/Timeout Defaults
// ==========================================================================

/// Default auto-hide timeout for the controls overlay (in seconds).
pub const DEFAULT_OVERLAY_TIMEOUT_SECS: u32 = 3;

/// Minimum overlay timeout (in seconds).
pub const MIN_OVERLAY_TIMEOUT_SECS: u32 = 1;

/// Maximum overlay timeout (in seconds).
pub const MAX_OVERLAY_TIMEOUT_SECS: u32 = 30;

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Default player volume (percent, 0 to 100).
pub const DEFAULT_VOLUME: u8 = 100;

/// Minimum volume level.
pub const MIN_VOLUME: u8 = 0;

/// Maximum volume level.
pub const MAX_VOLUME: u8 = 100;

/// Volume adjustment step per key press.
pub const VOLUME_STEP: u8 = 5;

// ==========================================================================
// Playback Rate Defaults
// ==========================================================================

/// Normal playback speed.
pub const DEFAULT_PLAYBACK_RATE: f64 = 1.0;

/// Slowest rate the embedded player accepts.
pub const MIN_PLAYBACK_RATE: f64 = 0.25;

/// Fastest rate the embedded player accepts.
pub const MAX_PLAYBACK_RATE: f64 = 2.0;

/// Rates offered by the speed menu, slowest first.
pub const PLAYBACK_RATE_PRESETS: &[f64] = &[0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 2.0];

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Milliseconds of seek per logical pixel of horizontal drag.
pub const DRAG_SEEK_MILLIS_PER_PIXEL: f64 = 1000.0;

// ==========================================================================
// Live Stream Defaults
// ==========================================================================

/// A live stream within this many seconds of its head counts as live.
pub const LIVE_EDGE_TOLERANCE_SECS: u64 = 10;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Maximum fan-out passes a single notification may trigger through
/// re-entrant notifications before further ones are dropped.
pub const MAX_NOTIFY_PASSES: usize = 8;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_timeout_bounds_are_ordered() {
        assert!(MIN_OVERLAY_TIMEOUT_SECS <= DEFAULT_OVERLAY_TIMEOUT_SECS);
        assert!(DEFAULT_OVERLAY_TIMEOUT_SECS <= MAX_OVERLAY_TIMEOUT_SECS);
    }

    #[test]
    fn volume_default_is_within_bounds() {
        assert!((MIN_VOLUME..=MAX_VOLUME).contains(&DEFAULT_VOLUME));
    }

    #[test]
    fn playback_rate_presets_are_sorted_and_bounded() {
        assert!(PLAYBACK_RATE_PRESETS.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(PLAYBACK_RATE_PRESETS.first(), Some(&MIN_PLAYBACK_RATE));
        assert_eq!(PLAYBACK_RATE_PRESETS.last(), Some(&MAX_PLAYBACK_RATE));
        assert!(PLAYBACK_RATE_PRESETS.contains(&DEFAULT_PLAYBACK_RATE));
    }
}
