// SPDX-License-Identifier: MPL-2.0
//! Embedded video player controller for TubeLens.
//!
//! The provider's player runs inside an embedded surface this crate does not
//! own. [`PlayerController`] keeps the authoritative playback state, forwards
//! commands to the surface over a channel, and reconciles the surface's
//! asynchronous reports back into [`PlayerValue`] snapshots that views observe
//! through listeners.

mod controller;
mod flags;
pub mod notifier;
pub mod surface;
pub mod time_units;
mod value;
mod video_id;

pub use controller::PlayerController;
pub use flags::PlayerFlags;
pub use notifier::{ListenerId, Notifier, Subscription};
pub use surface::{
    command_channel, event_channel, SurfaceCommand, SurfaceCommandReceiver,
    SurfaceCommandSender, SurfaceEvent, SurfaceEventReceiver, SurfaceEventSender,
};
pub use time_units::{format_duration, format_offset, format_remaining};
pub use value::{PlayerValue, ProgressValue, VideoMetadata};
pub use video_id::{
    resolve_id, resolve_id_trimmed, thumbnail_url, ThumbnailQuality, VIDEO_ID_LEN,
};
