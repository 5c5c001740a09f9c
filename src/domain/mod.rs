// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects shared by the controller and the view models.
//!
//! # Modules
//!
//! - [`video`]: Video playback types ([`PlayerState`](video::PlayerState),
//!   [`Volume`](video::Volume), [`PlaybackRate`](video::PlaybackRate),
//!   [`BufferedFraction`](video::BufferedFraction))

pub mod video;
