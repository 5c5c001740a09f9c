// SPDX-License-Identifier: MPL-2.0
//! Player chrome state and view models.
//!
//! Nothing here draws. Hosts feed pointer events and clock ticks into the
//! [`shutter`], rebuild the view models from controller listeners, and render
//! them with their own widgets.
//!
//! - [`state`] - Overlay auto-hide and drag-to-seek gesture state
//! - [`shutter`] - Touch layer binding gestures to a controller
//! - [`controls`] - Which chrome is visible for a given snapshot
//! - [`progress`] - Standard and live bottom bars

pub mod controls;
pub mod progress;
pub mod shutter;
pub mod state;

pub use controls::{BottomBar, ControlsLayout, PlayButton};
pub use progress::{LiveBar, ProgressBar};
pub use shutter::TouchShutter;
