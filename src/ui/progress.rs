// SPDX-License-Identifier: MPL-2.0
//! Bottom bar view models.
//!
//! These only derive what the host renders; they never change the
//! controller. Rebuild them from a progress listener.

use crate::config::LIVE_EDGE_TOLERANCE_SECS;
use crate::video_player::time_units::{format_duration, format_remaining};
use crate::video_player::{PlayerController, ProgressValue};
use std::time::Duration;

/// Share of `duration` covered by `position`, in `[0, 1]`. Zero while the
/// duration is unknown.
fn fraction(position: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 0.0;
    }
    (position.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0) as f32
}

/// Scrubber and time labels of the standard bottom bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBar {
    /// Played share of the video, in `[0, 1]`.
    pub played: f32,
    /// Buffered share of the video, in `[0, 1]`.
    pub buffered: f32,
    /// Current position, `mm:ss` or `hh:mm:ss`.
    pub position_label: String,
    /// Time left, `- mm:ss`.
    pub remaining_label: String,
    /// Total duration.
    pub duration_label: String,
}

impl ProgressBar {
    /// Builds the bar from a progress snapshot and the video duration.
    #[must_use]
    pub fn new(progress: ProgressValue, duration: Duration) -> Self {
        Self {
            played: fraction(progress.position, duration),
            buffered: progress.buffered.value() as f32,
            position_label: format_duration(progress.position),
            remaining_label: format_remaining(progress.position, duration),
            duration_label: format_duration(duration),
        }
    }

    /// Builds the bar from the controller's current state.
    #[must_use]
    pub fn from_controller(controller: &PlayerController) -> Self {
        Self::new(controller.progress(), controller.metadata().duration)
    }

    /// Position a scrubber drop at `fraction` of the bar seeks to.
    ///
    /// NaN (a zero-width bar) is treated as the start.
    #[must_use]
    pub fn seek_target(fraction: f32, duration: Duration) -> Duration {
        if fraction.is_nan() {
            return Duration::ZERO;
        }
        duration.mul_f64(f64::from(fraction.clamp(0.0, 1.0)))
    }
}

/// Bottom bar shown instead of [`ProgressBar`] for live streams.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveBar {
    /// Position within the stream's seekable window, in `[0, 1]`.
    pub position: f32,
    /// Playback is at the head of the stream.
    pub is_at_live_edge: bool,
    /// The fullscreen toggle is offered.
    pub show_fullscreen_button: bool,
}

impl LiveBar {
    /// Builds the live bar. `duration` is the currently seekable window.
    #[must_use]
    pub fn new(position: Duration, duration: Duration, show_fullscreen_button: bool) -> Self {
        let behind = duration.saturating_sub(position);
        Self {
            position: if duration.is_zero() {
                1.0
            } else {
                fraction(position, duration)
            },
            is_at_live_edge: behind <= Duration::from_secs(LIVE_EDGE_TOLERANCE_SECS),
            show_fullscreen_button,
        }
    }

    /// Builds the live bar from the controller's current state.
    #[must_use]
    pub fn from_controller(controller: &PlayerController) -> Self {
        Self::new(
            controller.progress().position,
            controller.metadata().duration,
            controller.flags().show_live_fullscreen_button,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::video::BufferedFraction;

    fn progress(secs: u64, buffered: f64) -> ProgressValue {
        ProgressValue {
            position: Duration::from_secs(secs),
            buffered: BufferedFraction::new(buffered),
        }
    }

    #[test]
    fn progress_bar_fractions_and_labels() {
        let bar = ProgressBar::new(progress(30, 0.75), Duration::from_secs(120));

        assert_eq!(bar.played, 0.25);
        assert_eq!(bar.buffered, 0.75);
        assert_eq!(bar.position_label, "00:30");
        assert_eq!(bar.remaining_label, "- 01:30");
        assert_eq!(bar.duration_label, "02:00");
    }

    #[test]
    fn progress_bar_with_unknown_duration_is_empty() {
        let bar = ProgressBar::new(progress(30, 0.0), Duration::ZERO);
        assert_eq!(bar.played, 0.0);
        assert_eq!(bar.remaining_label, "- 00:00");
    }

    #[test]
    fn progress_bar_caps_played_at_one() {
        let bar = ProgressBar::new(progress(200, 1.0), Duration::from_secs(120));
        assert_eq!(bar.played, 1.0);
    }

    #[test]
    fn seek_target_scales_duration() {
        assert_eq!(
            ProgressBar::seek_target(0.5, Duration::from_secs(90)),
            Duration::from_secs(45)
        );
        assert_eq!(
            ProgressBar::seek_target(1.5, Duration::from_secs(90)),
            Duration::from_secs(90)
        );
    }

    #[test]
    fn seek_target_on_zero_width_bar_is_start() {
        let width = 0.0_f32;
        let fraction = 0.0_f32 / width;
        assert!(fraction.is_nan());

        assert_eq!(
            ProgressBar::seek_target(fraction, Duration::from_secs(60)),
            Duration::ZERO
        );
    }

    #[test]
    fn live_bar_detects_live_edge() {
        let window = Duration::from_secs(3_600);
        assert!(LiveBar::new(Duration::from_secs(3_595), window, true).is_at_live_edge);
        assert!(!LiveBar::new(Duration::from_secs(1_800), window, true).is_at_live_edge);
        assert_eq!(LiveBar::new(Duration::from_secs(1_800), window, true).position, 0.5);
    }

    #[test]
    fn live_bar_without_window_sits_at_head() {
        let bar = LiveBar::new(Duration::ZERO, Duration::ZERO, false);
        assert_eq!(bar.position, 1.0);
        assert!(bar.is_at_live_edge);
        assert!(!bar.show_fullscreen_button);
    }
}
