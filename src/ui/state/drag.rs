// SPDX-License-Identifier: MPL-2.0
//! Drag-to-seek gesture state
//!
//! A horizontal drag across the player proposes a seek relative to the
//! position the drag started from. One logical pixel moves one second.

use crate::config::DRAG_SEEK_MILLIS_PER_PIXEL;
use crate::video_player::time_units::{duration_to_millis, format_offset, millis_to_duration};
use std::time::Duration;

/// Manages drag-to-seek state
#[derive(Debug, Clone, Default)]
pub struct DragSeek {
    /// Whether a drag is currently active
    pub is_dragging: bool,

    /// Horizontal pointer position where the drag started
    pub start_x: Option<f32>,

    /// Playback position when the drag started
    pub start_position: Option<Duration>,

    /// Last proposed seek target
    target: Option<Duration>,
}

impl DragSeek {
    /// Starts a drag operation
    pub fn start(&mut self, x: f32, position: Duration) {
        self.is_dragging = true;
        self.start_x = Some(x);
        self.start_position = Some(position);
        self.target = Some(position);
    }

    /// Proposes a seek target for the pointer at `x`.
    ///
    /// The target is clamped into `[0, duration]`; a zero `duration` (not yet
    /// known) only clamps at zero.
    pub fn update(&mut self, x: f32, duration: Duration) -> Option<Duration> {
        if !self.is_dragging {
            return None;
        }

        let start_x = self.start_x?;
        let start = duration_to_millis(self.start_position?);

        // Moving right seeks forward
        let delta_millis = (f64::from(x - start_x) * DRAG_SEEK_MILLIS_PER_PIXEL) as i64;
        let mut target = start.saturating_add(delta_millis).max(0);
        if !duration.is_zero() {
            target = target.min(duration_to_millis(duration));
        }

        let target = millis_to_duration(target);
        self.target = Some(target);
        Some(target)
    }

    /// Current proposed target, while dragging
    #[must_use]
    pub fn target(&self) -> Option<Duration> {
        self.target.filter(|_| self.is_dragging)
    }

    /// Signed distance between the target and the start position, in
    /// milliseconds
    #[must_use]
    pub fn offset_millis(&self) -> Option<i64> {
        let target = self.target()?;
        let start = self.start_position?;
        Some(duration_to_millis(target) - duration_to_millis(start))
    }

    /// Offset rendered as `+ mm:ss` / `- mm:ss` for the drag hint
    #[must_use]
    pub fn offset_label(&self) -> Option<String> {
        self.offset_millis().map(format_offset)
    }

    /// Stops the drag and returns the target to commit, if any
    pub fn stop(&mut self) -> Option<Duration> {
        let target = self.target();
        self.is_dragging = false;
        self.start_x = None;
        self.start_position = None;
        self.target = None;
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINUTE: Duration = Duration::from_secs(60);

    #[test]
    fn default_drag_state_is_not_dragging() {
        let state = DragSeek::default();
        assert!(!state.is_dragging);
        assert!(state.start_x.is_none());
        assert!(state.start_position.is_none());
        assert!(state.target().is_none());
    }

    #[test]
    fn update_returns_none_when_not_dragging() {
        let mut state = DragSeek::default();
        assert!(state.update(40.0, MINUTE).is_none());
    }

    #[test]
    fn dragging_right_seeks_forward() {
        let mut state = DragSeek::default();
        state.start(100.0, Duration::from_secs(10));

        // 15 pixels to the right, 15 seconds forward
        let target = state.update(115.0, MINUTE);

        assert_eq!(target, Some(Duration::from_secs(25)));
        assert_eq!(state.offset_label().as_deref(), Some("+ 00:15"));
    }

    #[test]
    fn dragging_left_clamps_at_zero() {
        let mut state = DragSeek::default();
        state.start(100.0, Duration::from_secs(10));

        assert_eq!(state.update(20.0, MINUTE), Some(Duration::ZERO));
        assert_eq!(state.offset_label().as_deref(), Some("- 00:10"));
    }

    #[test]
    fn target_clamps_at_duration() {
        let mut state = DragSeek::default();
        state.start(0.0, Duration::from_secs(50));

        assert_eq!(state.update(500.0, MINUTE), Some(MINUTE));
    }

    #[test]
    fn unknown_duration_has_no_upper_bound() {
        let mut state = DragSeek::default();
        state.start(0.0, Duration::ZERO);

        assert_eq!(
            state.update(90.0, Duration::ZERO),
            Some(Duration::from_secs(90))
        );
    }

    #[test]
    fn stop_returns_target_and_clears_state() {
        let mut state = DragSeek::default();
        state.start(0.0, Duration::from_secs(5));
        state.update(3.0, MINUTE);

        assert_eq!(state.stop(), Some(Duration::from_secs(8)));
        assert!(!state.is_dragging);
        assert!(state.stop().is_none());
    }
}
