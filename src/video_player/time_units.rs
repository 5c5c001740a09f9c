// SPDX-License-Identifier: MPL-2.0
//! Time unit conversion and formatting utilities for video playback.
//!
//! Provides:
//! - Conversions between [`Duration`] and signed milliseconds (seek arithmetic
//!   needs negative offsets, `Duration` cannot hold them)
//! - Textual rendering of positions and remaining time (`mm:ss` / `hh:mm:ss`)
//!
//! # Constants
//!
//! - `MILLIS_PER_SECOND`: 1,000
//! - `SECONDS_PER_HOUR`: 3,600

use std::time::Duration;

/// Milliseconds per second.
pub const MILLIS_PER_SECOND: i64 = 1_000;

/// Seconds per hour.
pub const SECONDS_PER_HOUR: u64 = 3_600;

/// Converts a duration to signed milliseconds, saturating at `i64::MAX`.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tube_lens::video_player::time_units::duration_to_millis;
///
/// assert_eq!(duration_to_millis(Duration::from_secs(2)), 2_000);
/// ```
#[inline]
pub fn duration_to_millis(duration: Duration) -> i64 {
    i64::try_from(duration.as_millis()).unwrap_or(i64::MAX)
}

/// Converts signed milliseconds to a duration, flooring negatives at zero.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tube_lens::video_player::time_units::millis_to_duration;
///
/// assert_eq!(millis_to_duration(1_500), Duration::from_millis(1_500));
/// assert_eq!(millis_to_duration(-20), Duration::ZERO);
/// ```
#[inline]
pub fn millis_to_duration(millis: i64) -> Duration {
    Duration::from_millis(u64::try_from(millis).unwrap_or(0))
}

/// Renders a duration as `mm:ss`, or `hh:mm:ss` from one hour on.
///
/// Sub-second remainders are truncated.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tube_lens::video_player::time_units::format_duration;
///
/// assert_eq!(format_duration(Duration::from_secs(125)), "02:05");
/// assert_eq!(format_duration(Duration::from_secs(3725)), "01:02:05");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / SECONDS_PER_HOUR;
    let minutes = (total_secs % SECONDS_PER_HOUR) / 60;
    let seconds = total_secs % 60;

    if hours == 0 {
        format!("{minutes:02}:{seconds:02}")
    } else {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    }
}

/// Renders the time left until `duration` as `- mm:ss`.
///
/// A position past the end renders as `- 00:00`.
pub fn format_remaining(position: Duration, duration: Duration) -> String {
    format!("- {}", format_duration(duration.saturating_sub(position)))
}

/// Renders a signed offset in milliseconds as `+ mm:ss` or `- mm:ss`.
pub fn format_offset(offset_millis: i64) -> String {
    let sign = if offset_millis < 0 { '-' } else { '+' };
    let magnitude = Duration::from_millis(offset_millis.unsigned_abs());
    format!("{sign} {}", format_duration(magnitude))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_below_one_hour() {
        assert_eq!(format_duration(Duration::ZERO), "00:00");
        assert_eq!(format_duration(Duration::from_secs(5)), "00:05");
        assert_eq!(format_duration(Duration::from_secs(125)), "02:05");
        assert_eq!(format_duration(Duration::from_secs(3599)), "59:59");
    }

    #[test]
    fn format_duration_from_one_hour() {
        assert_eq!(format_duration(Duration::from_secs(3600)), "01:00:00");
        assert_eq!(format_duration(Duration::from_secs(3725)), "01:02:05");
        assert_eq!(format_duration(Duration::from_secs(36_000 + 61)), "10:01:01");
    }

    #[test]
    fn format_duration_truncates_sub_second() {
        assert_eq!(format_duration(Duration::from_millis(1_999)), "00:01");
    }

    #[test]
    fn format_remaining_counts_down() {
        assert_eq!(
            format_remaining(Duration::from_secs(20), Duration::from_secs(145)),
            "- 02:05"
        );
        assert_eq!(
            format_remaining(Duration::from_secs(200), Duration::from_secs(145)),
            "- 00:00"
        );
    }

    #[test]
    fn format_offset_carries_sign() {
        assert_eq!(format_offset(5_000), "+ 00:05");
        assert_eq!(format_offset(-65_000), "- 01:05");
        assert_eq!(format_offset(0), "+ 00:00");
    }

    #[test]
    fn millis_conversions_handle_bounds() {
        assert_eq!(duration_to_millis(Duration::from_millis(42)), 42);
        assert_eq!(duration_to_millis(Duration::MAX), i64::MAX);
        assert_eq!(millis_to_duration(-1), Duration::ZERO);
        assert_eq!(millis_to_duration(MILLIS_PER_SECOND), Duration::from_secs(1));
    }
}
