// SPDX-License-Identifier: MPL-2.0
//! Which player chrome is shown for a given state.
//!
//! The host rebuilds a [`ControlsLayout`] from a value listener and renders
//! exactly what it says.

use crate::domain::video::PlayerState;
use crate::error::PlayerError;
use crate::video_player::{PlayerController, PlayerFlags, PlayerValue};

/// Icon of the center play button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayButton {
    Play,
    Pause,
    Replay,
}

impl PlayButton {
    fn for_state(state: PlayerState) -> Self {
        match state {
            PlayerState::Playing => Self::Pause,
            PlayerState::Ended => Self::Replay,
            _ => Self::Play,
        }
    }
}

/// Variant of the bottom control bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BottomBar {
    /// Scrubber with position and remaining time.
    Standard,
    /// Live badge, without a fixed end.
    Live,
}

/// Visible chrome for one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlsLayout {
    /// Thumbnail placeholder over the surface.
    pub show_thumbnail: bool,
    /// Loading spinner.
    pub show_loading: bool,
    /// Center play button, when shown.
    pub play_button: Option<PlayButton>,
    /// Bottom bar, when shown.
    pub bottom_bar: Option<BottomBar>,
    /// Fullscreen toggle in the bottom bar.
    pub show_fullscreen_button: bool,
    /// Whether the fullscreen toggle exits fullscreen.
    pub is_full_screen: bool,
    /// Error panel replacing the chrome.
    pub error: Option<PlayerError>,
}

impl ControlsLayout {
    /// Derives the layout from a snapshot. `video_id` only feeds the
    /// invalid-id message.
    #[must_use]
    pub fn from_value(value: &PlayerValue, flags: &PlayerFlags, video_id: &str) -> Self {
        if value.has_error {
            return Self {
                show_thumbnail: false,
                show_loading: false,
                play_button: None,
                bottom_bar: None,
                show_fullscreen_button: false,
                is_full_screen: value.is_full_screen,
                error: Some(PlayerError::from_code(value.error_code, video_id)),
            };
        }

        let show_loading = !value.is_ready || value.player_state.is_buffering();
        let controls = value.is_controls_visible && !flags.hide_controls;

        let bottom_bar = controls.then_some(if flags.is_live {
            BottomBar::Live
        } else {
            BottomBar::Standard
        });
        let show_fullscreen_button = match bottom_bar {
            Some(BottomBar::Standard) => true,
            Some(BottomBar::Live) => flags.show_live_fullscreen_button,
            None => false,
        };

        Self {
            show_thumbnail: !flags.hide_thumbnail && !value.has_played,
            show_loading,
            play_button: (controls && !show_loading)
                .then(|| PlayButton::for_state(value.player_state)),
            bottom_bar,
            show_fullscreen_button,
            is_full_screen: value.is_full_screen,
            error: None,
        }
    }

    /// Derives the layout from the controller's current state.
    #[must_use]
    pub fn from_controller(controller: &PlayerController) -> Self {
        Self::from_value(&controller.value(), controller.flags(), &controller.video_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready(state: PlayerState) -> PlayerValue {
        PlayerValue {
            is_ready: true,
            is_controls_visible: true,
            player_state: state,
            ..PlayerValue::default()
        }
    }

    #[test]
    fn unready_player_shows_thumbnail_and_spinner() {
        let layout =
            ControlsLayout::from_value(&PlayerValue::default(), &PlayerFlags::default(), "id");

        assert!(layout.show_thumbnail);
        assert!(layout.show_loading);
        assert!(layout.play_button.is_none());
        assert!(layout.bottom_bar.is_none());
    }

    #[test]
    fn play_button_follows_state() {
        let flags = PlayerFlags::default();
        let icon = |state| ControlsLayout::from_value(&ready(state), &flags, "id").play_button;

        assert_eq!(icon(PlayerState::Playing), Some(PlayButton::Pause));
        assert_eq!(icon(PlayerState::Paused), Some(PlayButton::Play));
        assert_eq!(icon(PlayerState::Ended), Some(PlayButton::Replay));
        assert_eq!(icon(PlayerState::Buffering), None);
    }

    #[test]
    fn thumbnail_disappears_after_first_play() {
        let value = PlayerValue {
            has_played: true,
            ..ready(PlayerState::Paused)
        };
        assert!(!ControlsLayout::from_value(&value, &PlayerFlags::default(), "id").show_thumbnail);

        let flags = PlayerFlags {
            hide_thumbnail: true,
            ..PlayerFlags::default()
        };
        assert!(!ControlsLayout::from_value(&ready(PlayerState::Cued), &flags, "id").show_thumbnail);
    }

    #[test]
    fn live_bar_respects_fullscreen_flag() {
        let flags = PlayerFlags {
            is_live: true,
            show_live_fullscreen_button: false,
            ..PlayerFlags::default()
        };
        let layout = ControlsLayout::from_value(&ready(PlayerState::Playing), &flags, "id");

        assert_eq!(layout.bottom_bar, Some(BottomBar::Live));
        assert!(!layout.show_fullscreen_button);
    }

    #[test]
    fn hidden_controls_show_no_bar() {
        let value = PlayerValue {
            is_controls_visible: false,
            ..ready(PlayerState::Playing)
        };
        let layout = ControlsLayout::from_value(&value, &PlayerFlags::default(), "id");
        assert!(layout.bottom_bar.is_none());
        assert!(layout.play_button.is_none());

        let flags = PlayerFlags {
            hide_controls: true,
            ..PlayerFlags::default()
        };
        let layout = ControlsLayout::from_value(&ready(PlayerState::Playing), &flags, "id");
        assert!(layout.bottom_bar.is_none());
    }

    #[test]
    fn error_replaces_chrome() {
        let value = PlayerValue {
            has_error: true,
            error_code: 100,
            player_state: PlayerState::Error,
            ..ready(PlayerState::Playing)
        };
        let layout = ControlsLayout::from_value(&value, &PlayerFlags::default(), "id");

        assert_eq!(layout.error, Some(PlayerError::VideoNotFound));
        assert!(layout.bottom_bar.is_none());
        assert!(!layout.show_loading);
        assert!(!layout.show_thumbnail);
    }
}
