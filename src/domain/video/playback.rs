// SPDX-License-Identifier: MPL-2.0
//! Video playback state machine.
//!
//! This module defines the playback states reported by the embedded player.

/// Represents the current playback state of a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerState {
    /// State not reported yet.
    #[default]
    Unknown,
    /// Player created, video not started.
    Unstarted,
    /// Playback reached the end of the video.
    Ended,
    /// Video is currently playing.
    Playing,
    /// Video is paused at current position.
    Paused,
    /// Playback stalled waiting for data.
    Buffering,
    /// Video is loaded and ready but playback was not requested.
    Cued,
    /// Playback failed. Only a new load leaves this state.
    Error,
}

impl PlayerState {
    /// Maps the numeric state codes of the embedded player.
    ///
    /// Codes: -1 unstarted, 0 ended, 1 playing, 2 paused, 3 buffering, 5 cued.
    #[must_use]
    pub fn from_code(code: i32) -> Self {
        match code {
            -1 => Self::Unstarted,
            0 => Self::Ended,
            1 => Self::Playing,
            2 => Self::Paused,
            3 => Self::Buffering,
            5 => Self::Cued,
            _ => Self::Unknown,
        }
    }

    /// Returns true if the video is currently playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true if the video is paused.
    #[must_use]
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Returns true if the video is buffering.
    #[must_use]
    pub fn is_buffering(self) -> bool {
        matches!(self, Self::Buffering)
    }

    /// Returns true if the video ended.
    #[must_use]
    pub fn is_ended(self) -> bool {
        matches!(self, Self::Ended)
    }

    /// Returns true if the player is in its terminal error state.
    #[must_use]
    pub fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }
}
