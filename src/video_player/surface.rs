// SPDX-License-Identifier: MPL-2.0
//! Channels between the controller and the embedded video surface.
//!
//! The surface (a web view hosting the provider's player) lives outside this
//! crate. It receives [`SurfaceCommand`]s and reports back with
//! [`SurfaceEvent`]s. Its callbacks may fire on any thread; they only push
//! onto the event channel, and the UI thread drains that channel into the
//! controller, so controller state is only ever touched from one thread.

use crate::domain::video::{PlaybackRate, PlayerState, Volume};
use crate::error::{Error, Result};
use crate::video_player::VideoMetadata;
use std::time::Duration;
use tokio::sync::mpsc;

/// Commands sent from the controller to the surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    /// Resolve and start a video.
    Load {
        video_id: String,
        start_at: Duration,
        end_at: Option<Duration>,
        auto_play: bool,
        mute: bool,
    },

    /// Resolve a video without starting it.
    Cue {
        video_id: String,
        start_at: Duration,
        end_at: Option<Duration>,
    },

    /// Start or resume playback.
    Play,

    /// Pause playback.
    Pause,

    /// Jump to a position.
    SeekTo { position: Duration },

    /// Silence audio.
    Mute,

    /// Restore audio.
    UnMute,

    /// Set volume in percent.
    SetVolume(Volume),

    /// Change playback rate.
    SetPlaybackRate(PlaybackRate),
}

/// Callbacks from the surface into the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// The current video resolved and commands are accepted.
    Ready,

    /// The surface moved to a new state.
    StateChanged(PlayerState),

    /// Enough data arrived to leave buffering, without saying which state
    /// playback resumes in.
    BufferingComplete,

    /// Periodic position and buffer report.
    Progress { position: Duration, buffered: f64 },

    /// Title, author and duration of the current video.
    Metadata(VideoMetadata),

    /// The surface switched quality.
    QualityChanged(String),

    /// The surface applied a playback rate.
    RateChanged(f64),

    /// Provider error code.
    Error(i32),
}

/// Handle for sending commands to the surface from the UI.
#[derive(Clone)]
pub struct SurfaceCommandSender {
    tx: mpsc::UnboundedSender<SurfaceCommand>,
}

impl SurfaceCommandSender {
    /// Sends a command. Fails once the surface dropped its receiver.
    pub fn send(&self, command: SurfaceCommand) -> Result<()> {
        self.tx.send(command).map_err(|_| Error::SurfaceClosed)
    }

    /// Returns true once the surface dropped its receiver.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl std::fmt::Debug for SurfaceCommandSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfaceCommandSender")
            .field("closed", &self.tx.is_closed())
            .finish()
    }
}

/// Surface side of the command channel.
pub type SurfaceCommandReceiver = mpsc::UnboundedReceiver<SurfaceCommand>;

/// Creates the channel commands travel on.
pub fn command_channel() -> (SurfaceCommandSender, SurfaceCommandReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (SurfaceCommandSender { tx }, rx)
}

/// Handle the surface uses to report events. Cheap to clone, `Send`.
#[derive(Clone)]
pub struct SurfaceEventSender {
    tx: mpsc::UnboundedSender<SurfaceEvent>,
}

impl SurfaceEventSender {
    /// Queues an event for the UI thread.
    pub fn send(&self, event: SurfaceEvent) -> Result<()> {
        self.tx.send(event).map_err(|_| Error::SurfaceClosed)
    }
}

impl std::fmt::Debug for SurfaceEventSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfaceEventSender")
            .field("closed", &self.tx.is_closed())
            .finish()
    }
}

/// UI side of the event channel.
#[derive(Debug)]
pub struct SurfaceEventReceiver {
    rx: mpsc::UnboundedReceiver<SurfaceEvent>,
}

impl SurfaceEventReceiver {
    /// Returns the next queued event without waiting.
    pub fn try_next(&mut self) -> Option<SurfaceEvent> {
        self.rx.try_recv().ok()
    }

    /// Waits for the next event. `None` once every sender is gone.
    pub async fn recv(&mut self) -> Option<SurfaceEvent> {
        self.rx.recv().await
    }
}

/// Creates the channel events travel on.
pub fn event_channel() -> (SurfaceEventSender, SurfaceEventReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (SurfaceEventSender { tx }, SurfaceEventReceiver { rx })
}
