// SPDX-License-Identifier: MPL-2.0
//! Construction-time configuration of a playback session.

use std::time::Duration;

/// Flags fixed when the controller is created.
///
/// Override only what differs from the defaults:
///
/// ```
/// use tube_lens::video_player::PlayerFlags;
///
/// let flags = PlayerFlags {
///     auto_play: false,
///     is_live: true,
///     ..PlayerFlags::default()
/// };
/// assert!(flags.is_live && !flags.auto_play);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerFlags {
    /// Start playing as soon as the video is loaded.
    pub auto_play: bool,

    /// Start muted.
    pub mute: bool,

    /// Restart from `start_at` when playback ends.
    pub loop_playback: bool,

    /// The content is a live stream with no fixed end.
    pub is_live: bool,

    /// Position playback starts from.
    pub start_at: Duration,

    /// Position playback stops at, if any.
    pub end_at: Option<Duration>,

    /// Ignore horizontal drags on the player surface.
    pub disable_drag_seek: bool,

    /// Show the controls overlay before the first tap.
    pub controls_visible_at_start: bool,

    /// Offer the fullscreen toggle in the live bar.
    pub show_live_fullscreen_button: bool,

    /// Never show the controls overlay.
    pub hide_controls: bool,

    /// Skip the thumbnail placeholder before first play.
    pub hide_thumbnail: bool,

    /// Ask the surface to display captions.
    pub enable_caption: bool,

    /// Caption language code.
    pub caption_language: String,

    /// Ask the surface for HD quality.
    pub force_hd: bool,
}

impl Default for PlayerFlags {
    fn default() -> Self {
        Self {
            auto_play: true,
            mute: false,
            loop_playback: false,
            is_live: false,
            start_at: Duration::ZERO,
            end_at: None,
            disable_drag_seek: false,
            controls_visible_at_start: false,
            show_live_fullscreen_button: true,
            hide_controls: false,
            hide_thumbnail: false,
            enable_caption: true,
            caption_language: "en".to_string(),
            force_hd: false,
        }
    }
}

impl PlayerFlags {
    /// Returns true if drag gestures may seek.
    #[must_use]
    pub fn allows_drag_seek(&self) -> bool {
        !self.disable_drag_seek && !self.is_live
    }
}
