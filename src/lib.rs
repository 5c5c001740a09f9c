// SPDX-License-Identifier: MPL-2.0
//! `tube_lens` holds the non-rendering half of an embeddable video-stream
//! player: the controller state machine, its listener protocol, the
//! auto-hide overlay and drag-to-seek gestures, and the view models the
//! player chrome is drawn from.
//!
//! Rendering and hosting the provider's web player are left to the host UI
//! framework, which talks to this crate through the surface channels in
//! [`video_player::surface`].
//!
//! ```
//! use std::rc::Rc;
//! use tube_lens::video_player::{PlayerController, PlayerFlags, SurfaceEvent};
//!
//! let controller = Rc::new(PlayerController::new(
//!     "https://youtu.be/dQw4w9WgXcQ",
//!     PlayerFlags::default(),
//! ));
//! let _subscription = controller.subscribe(|| {});
//!
//! controller.handle_surface_event(SurfaceEvent::Ready);
//! controller.play();
//! assert!(controller.value().player_state.is_playing());
//! ```

#![doc(html_root_url = "https://docs.rs/tube_lens/0.1.0")]

pub mod config;
pub mod domain;
pub mod error;
pub mod ui;
pub mod video_player;
