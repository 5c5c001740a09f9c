// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Gesture and overlay state kept apart from the controller so hosts can
//! drive it with their own clock and pointer events.

pub mod drag;
pub mod overlay;
pub mod overlay_timeout;

// Re-export commonly used types for convenience
pub use drag::DragSeek;
pub use overlay::{Effect as OverlayEffect, OverlayVisibility};
pub use overlay_timeout::OverlayTimeout;
