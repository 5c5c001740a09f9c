// SPDX-License-Identifier: MPL-2.0
//! Snapshots published by the player controller.
//!
//! Values are replaced wholesale on every update. Build a new one with struct
//! update syntax from the current snapshot:
//!
//! ```
//! use tube_lens::video_player::PlayerValue;
//!
//! let current = PlayerValue::default();
//! let next = PlayerValue { is_ready: true, ..current.clone() };
//! assert!(next.is_ready && !current.is_ready);
//! ```

use crate::domain::video::{BufferedFraction, PlaybackRate, PlayerState, Volume};
use std::time::Duration;

/// Playback and chrome state of one session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerValue {
    /// Current state as last requested or reported.
    pub player_state: PlayerState,

    /// Current playback position.
    pub position: Duration,

    /// Share of the video buffered so far.
    pub buffered: BufferedFraction,

    /// Whether the host should lay the player out fullscreen.
    pub is_full_screen: bool,

    /// Whether the controls overlay is shown.
    pub is_controls_visible: bool,

    /// Whether a scrub or drag-seek gesture is in progress.
    pub is_dragging: bool,

    /// Whether the session is in its error state.
    pub has_error: bool,

    /// Provider error code, 0 when there is no error.
    pub error_code: i32,

    /// Whether playback actually started at least once since the last load.
    pub has_played: bool,

    /// Whether the surface resolved the current video and accepts commands.
    pub is_ready: bool,

    /// Whether audio is muted.
    pub is_muted: bool,

    /// Volume in percent.
    pub volume: Volume,

    /// Current playback rate.
    pub playback_rate: PlaybackRate,

    /// Quality label reported by the surface (e.g. `hd720`).
    pub playback_quality: Option<String>,
}

impl PlayerValue {
    /// Position and buffer share as a progress snapshot.
    #[must_use]
    pub fn progress(&self) -> ProgressValue {
        ProgressValue {
            position: self.position,
            buffered: self.buffered,
        }
    }
}

/// High-frequency part of the state, published on its own notifier.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProgressValue {
    pub position: Duration,
    pub buffered: BufferedFraction,
}

/// Descriptive data of the current video, filled in once the source resolves.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VideoMetadata {
    pub video_id: String,
    pub title: String,
    pub author: String,
    pub duration: Duration,
}

impl VideoMetadata {
    /// Metadata known before the source resolves: the id only.
    #[must_use]
    pub fn for_id(video_id: impl Into<String>) -> Self {
        Self {
            video_id: video_id.into(),
            ..Self::default()
        }
    }

    /// Returns true once the duration is known.
    #[must_use]
    pub fn has_duration(&self) -> bool {
        !self.duration.is_zero()
    }
}
