// SPDX-License-Identifier: MPL-2.0
//! Player controller: the shared state container and command API of one
//! playback session.
//!
//! State machine (`player_state`):
//! - Unstarted → Buffering ⇄ {Playing, Paused} → Ended
//! - Error is reachable from every state and only `load` leaves it
//!
//! Commands (`play`, `pause`, `seek_to`, ...) update the value optimistically
//! and are forwarded to the surface without waiting. The surface confirms
//! later through [`SurfaceEvent`]s; the last write wins.
//!
//! The controller is single-threaded. Share it behind an `Rc` and attach
//! listeners for as long as a view needs them.

use super::notifier::{ListenerId, Notifier, Subscription};
use super::surface::{SurfaceCommand, SurfaceCommandSender, SurfaceEvent, SurfaceEventReceiver};
use super::time_units::{duration_to_millis, millis_to_duration};
use super::value::{PlayerValue, ProgressValue, VideoMetadata};
use super::video_id::resolve_id_trimmed;
use super::PlayerFlags;
use crate::domain::video::{BufferedFraction, PlaybackRate, PlayerState, Volume};
use crate::error::PlayerError;
use std::cell::{Cell, RefCell};
use std::time::Duration;

/// Provider code reported for ids that do not resolve.
const INVALID_VIDEO_ID_CODE: i32 = 1;

/// Shared state container plus command API for one playback session.
pub struct PlayerController {
    flags: PlayerFlags,

    /// Current snapshot. Replaced wholesale, never borrowed across callbacks.
    value: RefCell<PlayerValue>,

    metadata: RefCell<VideoMetadata>,

    /// Position window of the current load (flags for the first one).
    start_at: Cell<Duration>,
    end_at: Cell<Option<Duration>>,

    listeners: Notifier,
    progress_listeners: Notifier,

    surface: RefCell<Option<SurfaceCommandSender>>,

    /// Play/pause intent held while buffering.
    resume_state: Cell<Option<PlayerState>>,

    /// Set by seeks and loads; lets the next progress report move backwards.
    seek_pending: Cell<bool>,

    disposed: Cell<bool>,
}

impl PlayerController {
    /// Creates a controller for `initial_video_id`.
    ///
    /// The id may be a bare id or any URL [`resolve_id`](super::resolve_id)
    /// understands. An unresolvable id leaves the controller in its error
    /// state with code 1.
    pub fn new(initial_video_id: &str, flags: PlayerFlags) -> Self {
        let controller = Self {
            start_at: Cell::new(flags.start_at),
            end_at: Cell::new(flags.end_at),
            flags,
            value: RefCell::new(PlayerValue::default()),
            metadata: RefCell::new(VideoMetadata::default()),
            listeners: Notifier::new(),
            progress_listeners: Notifier::new(),
            surface: RefCell::new(None),
            resume_state: Cell::new(None),
            seek_pending: Cell::new(false),
            disposed: Cell::new(false),
        };

        let initial = PlayerValue {
            is_controls_visible: controller.flags.controls_visible_at_start,
            is_muted: controller.flags.mute,
            ..PlayerValue::default()
        };
        match resolve_id_trimmed(initial_video_id) {
            Some(video_id) => {
                *controller.metadata.borrow_mut() = VideoMetadata::for_id(video_id);
                *controller.value.borrow_mut() = initial;
            }
            None => {
                tracing::warn!(video_id = initial_video_id, "initial video id does not resolve");
                *controller.metadata.borrow_mut() =
                    VideoMetadata::for_id(initial_video_id.trim());
                *controller.value.borrow_mut() = errored(initial, INVALID_VIDEO_ID_CODE);
            }
        }
        controller
    }

    // ------------------------------------------------------------------
    // Readers
    // ------------------------------------------------------------------

    /// Current snapshot.
    pub fn value(&self) -> PlayerValue {
        self.value.borrow().clone()
    }

    /// Current position and buffer share.
    pub fn progress(&self) -> ProgressValue {
        self.value.borrow().progress()
    }

    /// Metadata of the current video.
    pub fn metadata(&self) -> VideoMetadata {
        self.metadata.borrow().clone()
    }

    /// Id of the current video.
    pub fn video_id(&self) -> String {
        self.metadata.borrow().video_id.clone()
    }

    /// Construction-time flags.
    pub fn flags(&self) -> &PlayerFlags {
        &self.flags
    }

    /// The surfaced error, if the session is in its error state.
    pub fn error(&self) -> Option<PlayerError> {
        let value = self.value.borrow();
        value
            .has_error
            .then(|| PlayerError::from_code(value.error_code, &self.metadata.borrow().video_id))
    }

    /// Returns true once [`dispose`](Self::dispose) ran.
    pub fn is_disposed(&self) -> bool {
        self.disposed.get()
    }

    // ------------------------------------------------------------------
    // Listeners
    // ------------------------------------------------------------------

    /// Attaches a listener invoked on every value change.
    pub fn add_listener(&self, listener: impl Fn() + 'static) -> ListenerId {
        self.listeners.add_listener(listener)
    }

    /// Detaches a value listener. Detaching twice is a no-op.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        self.listeners.remove_listener(id)
    }

    /// Attaches a value listener for the lifetime of the returned guard.
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> Subscription {
        self.listeners.subscribe(listener)
    }

    /// Attaches a listener invoked on every position or buffer change.
    pub fn add_progress_listener(&self, listener: impl Fn() + 'static) -> ListenerId {
        self.progress_listeners.add_listener(listener)
    }

    /// Detaches a progress listener. Detaching twice is a no-op.
    pub fn remove_progress_listener(&self, id: ListenerId) -> bool {
        self.progress_listeners.remove_listener(id)
    }

    /// Attaches a progress listener for the lifetime of the returned guard.
    pub fn subscribe_progress(&self, listener: impl Fn() + 'static) -> Subscription {
        self.progress_listeners.subscribe(listener)
    }

    // ------------------------------------------------------------------
    // Surface
    // ------------------------------------------------------------------

    /// Connects the embedded surface. Replaces any previous one.
    pub fn attach_surface(&self, sender: SurfaceCommandSender) {
        *self.surface.borrow_mut() = Some(sender);
    }

    /// Disconnects the embedded surface. Later commands are dropped.
    pub fn detach_surface(&self) {
        self.surface.borrow_mut().take();
    }

    /// Returns true while a surface is attached.
    pub fn has_surface(&self) -> bool {
        self.surface.borrow().is_some()
    }

    /// Applies every queued surface event. Returns how many were applied.
    pub fn drain_events(&self, events: &mut SurfaceEventReceiver) -> usize {
        let mut applied = 0;
        while let Some(event) = events.try_next() {
            self.handle_surface_event(event);
            applied += 1;
        }
        applied
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Loads a new video and starts it when `auto_play` is set.
    ///
    /// Metadata and value go back to the initial unready state; an error from
    /// a previous video is cleared. Fullscreen, mute, volume and rate carry
    /// over.
    pub fn load(&self, video_id: &str, start_at: Duration, end_at: Option<Duration>) {
        if let Some(video_id) = self.begin_load(video_id, start_at, end_at) {
            tracing::debug!(%video_id, ?start_at, ?end_at, "loading video");
            self.send(SurfaceCommand::Load {
                video_id,
                start_at,
                end_at,
                auto_play: self.flags.auto_play,
                mute: self.value.borrow().is_muted,
            });
        }
    }

    /// Like [`load`](Self::load) but never starts playback.
    pub fn cue(&self, video_id: &str, start_at: Duration, end_at: Option<Duration>) {
        if let Some(video_id) = self.begin_load(video_id, start_at, end_at) {
            tracing::debug!(%video_id, ?start_at, ?end_at, "cueing video");
            self.send(SurfaceCommand::Cue {
                video_id,
                start_at,
                end_at,
            });
        }
    }

    /// Loads the current video again from the start of its window.
    pub fn reload(&self) {
        let video_id = self.video_id();
        self.load(&video_id, self.start_at.get(), self.end_at.get());
    }

    /// Requests playback. Ignored until the surface is ready.
    pub fn play(&self) {
        if !self.accepts_playback_commands("play") {
            return;
        }
        self.request_state(PlayerState::Playing);
        self.send(SurfaceCommand::Play);
    }

    /// Requests a pause. Ignored until the surface is ready.
    pub fn pause(&self) {
        if !self.accepts_playback_commands("pause") {
            return;
        }
        self.request_state(PlayerState::Paused);
        self.send(SurfaceCommand::Pause);
    }

    /// Pauses when playing (or about to resume playing), plays otherwise.
    pub fn toggle_playback(&self) {
        let state = self.value.borrow().player_state;
        let wants_playing = match state {
            PlayerState::Buffering => self.resume_state.get() == Some(PlayerState::Playing),
            other => other.is_playing(),
        };
        if wants_playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Seeks to `position`, clamped into `[0, duration]`.
    pub fn seek_to(&self, position: Duration) {
        self.seek_to_millis(duration_to_millis(position));
    }

    /// Seeks to a signed position in milliseconds, clamped into
    /// `[0, duration]`. Without a known duration only the lower bound applies.
    pub fn seek_to_millis(&self, millis: i64) {
        if self.value.borrow().has_error {
            tracing::debug!("seek ignored in error state");
            return;
        }

        let duration = self.metadata.borrow().duration;
        let mut target = millis.max(0);
        if !duration.is_zero() {
            target = target.min(duration_to_millis(duration));
        }
        let position = millis_to_duration(target);

        self.seek_pending.set(true);
        self.update(|value| PlayerValue {
            position,
            ..value.clone()
        });
        self.send(SurfaceCommand::SeekTo { position });
    }

    /// Mutes audio.
    pub fn mute(&self) {
        self.update(|value| PlayerValue {
            is_muted: true,
            ..value.clone()
        });
        self.send(SurfaceCommand::Mute);
    }

    /// Restores audio.
    pub fn un_mute(&self) {
        self.update(|value| PlayerValue {
            is_muted: false,
            ..value.clone()
        });
        self.send(SurfaceCommand::UnMute);
    }

    /// Sets the volume.
    pub fn set_volume(&self, volume: Volume) {
        self.update(|value| PlayerValue {
            volume,
            ..value.clone()
        });
        self.send(SurfaceCommand::SetVolume(volume));
    }

    /// Sets the playback rate.
    pub fn set_playback_rate(&self, rate: PlaybackRate) {
        self.update(|value| PlayerValue {
            playback_rate: rate,
            ..value.clone()
        });
        self.send(SurfaceCommand::SetPlaybackRate(rate));
    }

    /// Flips the fullscreen flag. Laying the player out is up to the host.
    pub fn toggle_full_screen_mode(&self) {
        self.update(|value| PlayerValue {
            is_full_screen: !value.is_full_screen,
            ..value.clone()
        });
    }

    /// Shows or hides the controls overlay.
    pub fn set_controls_visible(&self, visible: bool) {
        if self.value.borrow().is_controls_visible == visible {
            return;
        }
        self.update(|value| PlayerValue {
            is_controls_visible: visible,
            ..value.clone()
        });
    }

    /// Marks a scrub or drag gesture as started or finished.
    pub fn set_dragging(&self, dragging: bool) {
        if self.value.borrow().is_dragging == dragging {
            return;
        }
        self.update(|value| PlayerValue {
            is_dragging: dragging,
            ..value.clone()
        });
    }

    /// Puts the value back to its initial state. Listeners stay attached.
    pub fn reset(&self) {
        self.resume_state.set(None);
        self.seek_pending.set(true);
        let initial = self.initial_value();
        self.update_value(initial);
    }

    /// Replaces the snapshot and notifies listeners.
    ///
    /// Listeners run synchronously on this call stack. One that calls back
    /// into the controller does not recurse: the nested notification is
    /// folded into one more pass after the current one.
    pub fn update_value(&self, new_value: PlayerValue) {
        let old = self.value.replace(new_value);
        let progress_changed = old.progress() != self.value.borrow().progress();

        self.listeners.notify();
        if progress_changed {
            self.progress_listeners.notify();
        }
    }

    /// Detaches every listener and the surface.
    pub fn dispose(&self) {
        self.disposed.set(true);
        self.listeners.clear();
        self.progress_listeners.clear();
        self.detach_surface();
    }

    // ------------------------------------------------------------------
    // Surface events
    // ------------------------------------------------------------------

    /// Reconciles an asynchronous report from the surface.
    pub fn handle_surface_event(&self, event: SurfaceEvent) {
        if self.disposed.get() {
            tracing::trace!(?event, "surface event after dispose ignored");
            return;
        }

        match event {
            SurfaceEvent::Ready => self.on_ready(),
            SurfaceEvent::StateChanged(state) => self.on_state_changed(state),
            SurfaceEvent::BufferingComplete => self.on_buffering_complete(),
            SurfaceEvent::Progress { position, buffered } => self.on_progress(position, buffered),
            SurfaceEvent::Metadata(metadata) => self.on_metadata(metadata),
            SurfaceEvent::QualityChanged(quality) => self.update(|value| PlayerValue {
                playback_quality: Some(quality),
                ..value.clone()
            }),
            SurfaceEvent::RateChanged(rate) => self.update(|value| PlayerValue {
                playback_rate: PlaybackRate::new(rate),
                ..value.clone()
            }),
            SurfaceEvent::Error(code) => self.on_error(code),
        }
    }

    fn on_ready(&self) {
        if self.value.borrow().has_error {
            return;
        }
        let mute = self.flags.mute;
        self.update(|value| PlayerValue {
            is_ready: true,
            is_muted: value.is_muted || mute,
            ..value.clone()
        });
    }

    fn on_state_changed(&self, state: PlayerState) {
        let current = self.value.borrow().player_state;
        if current.is_error() {
            tracing::debug!(?state, "state change ignored in error state");
            return;
        }

        match state {
            PlayerState::Buffering => {
                if matches!(current, PlayerState::Playing | PlayerState::Paused) {
                    self.resume_state.set(Some(current));
                }
                self.update(|value| PlayerValue {
                    player_state: PlayerState::Buffering,
                    ..value.clone()
                });
            }
            PlayerState::Ended => {
                self.resume_state.set(None);
                self.finish_playback();
            }
            PlayerState::Error => {
                // Errors carry their code through `SurfaceEvent::Error`.
                tracing::debug!("error state change without code ignored");
            }
            other => {
                self.resume_state.set(None);
                let played = other.is_playing();
                self.update(|value| PlayerValue {
                    player_state: other,
                    has_played: value.has_played || played,
                    ..value.clone()
                });
            }
        }
    }

    fn on_buffering_complete(&self) {
        if !self.value.borrow().player_state.is_buffering() {
            return;
        }
        let fallback = if self.flags.auto_play {
            PlayerState::Playing
        } else {
            PlayerState::Paused
        };
        let resumed = self.resume_state.take().unwrap_or(fallback);
        let played = resumed.is_playing();
        self.update(|value| PlayerValue {
            player_state: resumed,
            has_played: value.has_played || played,
            ..value.clone()
        });
    }

    fn on_progress(&self, position: Duration, buffered: f64) {
        let (current, state) = {
            let value = self.value.borrow();
            (value.progress(), value.player_state)
        };
        let buffered = BufferedFraction::new(buffered);

        let position = if position >= current.position || self.seek_pending.get() {
            self.seek_pending.set(false);
            position
        } else {
            tracing::trace!(?position, current = ?current.position, "stale position report");
            current.position
        };

        let next = ProgressValue { position, buffered };
        if next != current {
            // Progress-only change: value listeners are not woken.
            let value = PlayerValue {
                position: next.position,
                buffered: next.buffered,
                ..self.value()
            };
            *self.value.borrow_mut() = value;
            self.progress_listeners.notify();
        }

        if let Some(end_at) = self.end_at.get() {
            if position >= end_at && state.is_playing() {
                tracing::debug!(?end_at, "reached end of playback window");
                self.send(SurfaceCommand::Pause);
                self.finish_playback();
            }
        }
    }

    fn on_metadata(&self, metadata: VideoMetadata) {
        {
            let mut current = self.metadata.borrow_mut();
            let video_id = if metadata.video_id.is_empty() {
                std::mem::take(&mut current.video_id)
            } else {
                metadata.video_id
            };
            *current = VideoMetadata {
                video_id,
                ..metadata
            };
        }
        self.listeners.notify();
    }

    fn on_error(&self, code: i32) {
        tracing::warn!(code, video_id = %self.video_id(), "player reported an error");
        self.resume_state.set(None);
        let value = errored(self.value(), code);
        self.update_value(value);
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    /// Ends playback, or restarts the window when looping.
    fn finish_playback(&self) {
        if self.flags.loop_playback {
            let start_at = self.start_at.get();
            self.seek_pending.set(true);
            self.update(|value| PlayerValue {
                player_state: PlayerState::Playing,
                position: start_at,
                ..value.clone()
            });
            self.send(SurfaceCommand::SeekTo { position: start_at });
            self.send(SurfaceCommand::Play);
        } else {
            self.update(|value| PlayerValue {
                player_state: PlayerState::Ended,
                ..value.clone()
            });
        }
    }

    /// Resets state for a new video. Returns the resolved id, or `None` after
    /// moving into the error state.
    fn begin_load(
        &self,
        video_id: &str,
        start_at: Duration,
        end_at: Option<Duration>,
    ) -> Option<String> {
        self.resume_state.set(None);
        self.seek_pending.set(true);
        self.start_at.set(start_at);
        self.end_at.set(end_at);

        let resolved = resolve_id_trimmed(video_id);
        let metadata_id = resolved.clone().unwrap_or_else(|| video_id.trim().to_string());
        *self.metadata.borrow_mut() = VideoMetadata::for_id(metadata_id);

        let initial = self.initial_value();
        match resolved {
            Some(id) => {
                self.update_value(initial);
                Some(id)
            }
            None => {
                tracing::warn!(video_id, "video id does not resolve");
                self.update_value(errored(initial, INVALID_VIDEO_ID_CODE));
                None
            }
        }
    }

    /// Unready, error-free value keeping the session-wide preferences.
    fn initial_value(&self) -> PlayerValue {
        let current = self.value.borrow();
        PlayerValue {
            is_full_screen: current.is_full_screen,
            is_controls_visible: self.flags.controls_visible_at_start,
            is_muted: current.is_muted,
            volume: current.volume,
            playback_rate: current.playback_rate,
            ..PlayerValue::default()
        }
    }

    fn accepts_playback_commands(&self, command: &str) -> bool {
        let value = self.value.borrow();
        if !value.is_ready {
            tracing::debug!(command, "ignored, player not ready");
            return false;
        }
        if value.has_error {
            tracing::debug!(command, "ignored, player in error state");
            return false;
        }
        true
    }

    /// Applies a play/pause request, deferring it while buffering.
    fn request_state(&self, requested: PlayerState) {
        if self.value.borrow().player_state.is_buffering() {
            self.resume_state.set(Some(requested));
            return;
        }
        self.update(|value| PlayerValue {
            player_state: requested,
            ..value.clone()
        });
    }

    fn update(&self, change: impl FnOnce(&PlayerValue) -> PlayerValue) {
        let next = change(&self.value.borrow());
        self.update_value(next);
    }

    fn send(&self, command: SurfaceCommand) {
        let surface = self.surface.borrow();
        match surface.as_ref() {
            Some(sender) => {
                if let Err(err) = sender.send(command) {
                    tracing::warn!(error = %err, "surface command dropped");
                }
            }
            None => tracing::debug!(?command, "no surface attached, command dropped"),
        }
    }
}

fn errored(value: PlayerValue, code: i32) -> PlayerValue {
    PlayerValue {
        player_state: PlayerState::Error,
        has_error: true,
        error_code: code,
        ..value
    }
}

impl std::fmt::Debug for PlayerController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerController")
            .field("video_id", &self.metadata.borrow().video_id)
            .field("value", &*self.value.borrow())
            .field("listeners", &self.listeners.len())
            .field("progress_listeners", &self.progress_listeners.len())
            .field("has_surface", &self.has_surface())
            .finish()
    }
}
