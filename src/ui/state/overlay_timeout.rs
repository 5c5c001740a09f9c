// SPDX-License-Identifier: MPL-2.0
//! Auto-hide delay of the player controls overlay.

use crate::config::{
    DEFAULT_OVERLAY_TIMEOUT_SECS, MAX_OVERLAY_TIMEOUT_SECS, MIN_OVERLAY_TIMEOUT_SECS,
};
use std::time::Duration;

/// Seconds the controls stay visible after the last tap.
///
/// Always within 1–30 seconds.
///
/// # Example
///
/// ```
/// use tube_lens::ui::state::OverlayTimeout;
///
/// assert_eq!(OverlayTimeout::default().value(), 3);
/// assert_eq!(OverlayTimeout::new(100).value(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayTimeout(u32);

impl OverlayTimeout {
    /// Creates a timeout, clamping to the valid range.
    #[must_use]
    pub fn new(secs: u32) -> Self {
        Self(secs.clamp(MIN_OVERLAY_TIMEOUT_SECS, MAX_OVERLAY_TIMEOUT_SECS))
    }

    /// Returns the timeout in seconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the timeout as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }
}

impl Default for OverlayTimeout {
    fn default() -> Self {
        Self(DEFAULT_OVERLAY_TIMEOUT_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(OverlayTimeout::new(0).value(), MIN_OVERLAY_TIMEOUT_SECS);
        assert_eq!(OverlayTimeout::new(100).value(), MAX_OVERLAY_TIMEOUT_SECS);
        assert_eq!(OverlayTimeout::new(15).value(), 15);
    }

    #[test]
    fn default_hides_after_three_seconds() {
        assert_eq!(
            OverlayTimeout::default().as_duration(),
            Duration::from_secs(3)
        );
    }
}
