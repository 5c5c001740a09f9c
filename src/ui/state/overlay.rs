// SPDX-License-Identifier: MPL-2.0
//! Auto-hide state of the controls overlay.
//!
//! The host drives this with clock ticks (for example an iced
//! `time::every` subscription) and feeds the current `Instant` in. Nothing
//! here reads the clock, so hiding is fully deterministic under test.

use super::OverlayTimeout;
use std::time::Instant;

/// Result of feeding an event to [`OverlayVisibility`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// Visibility changed to the contained value.
    VisibilityChanged(bool),
}

/// Controls overlay visibility with a single pending hide deadline.
#[derive(Debug, Clone, Default)]
pub struct OverlayVisibility {
    visible: bool,
    /// When the overlay hides, if it is visible and the timer is armed.
    deadline: Option<Instant>,
    timeout: OverlayTimeout,
}

impl OverlayVisibility {
    /// Creates a hidden overlay.
    #[must_use]
    pub fn new(timeout: OverlayTimeout) -> Self {
        Self {
            visible: false,
            deadline: None,
            timeout,
        }
    }

    /// Returns true while the overlay is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Pending hide deadline, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Auto-hide delay in use.
    #[must_use]
    pub fn timeout(&self) -> OverlayTimeout {
        self.timeout
    }

    /// A tap on the player surface: flips visibility.
    ///
    /// Any pending deadline is dropped first. When the tap shows the overlay a
    /// new deadline is armed.
    pub fn tap(&mut self, now: Instant) -> Effect {
        self.deadline = None;
        self.visible = !self.visible;
        if self.visible {
            self.arm(now);
        }
        Effect::VisibilityChanged(self.visible)
    }

    /// Shows the overlay and restarts the timer. Used after interactions with
    /// the controls themselves so they stay up while in use.
    pub fn show(&mut self, now: Instant) -> Effect {
        self.arm(now);
        if self.visible {
            Effect::None
        } else {
            self.visible = true;
            Effect::VisibilityChanged(true)
        }
    }

    /// Checks the deadline.
    ///
    /// The deadline fires at most once. If a drag is in progress when it
    /// fires the overlay stays up and no new deadline is armed.
    pub fn poll(&mut self, now: Instant, is_dragging: bool) -> Effect {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                if is_dragging || !self.visible {
                    return Effect::None;
                }
                self.visible = false;
                Effect::VisibilityChanged(false)
            }
            _ => Effect::None,
        }
    }

    /// Adopts a visibility decided elsewhere. A pending deadline survives only
    /// while the overlay stays visible.
    pub fn sync(&mut self, visible: bool) {
        self.visible = visible;
        if !visible {
            self.deadline = None;
        }
    }

    /// Drops the pending deadline without changing visibility.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Forces the overlay hidden and drops the deadline.
    pub fn hide(&mut self) -> Effect {
        self.deadline = None;
        if self.visible {
            self.visible = false;
            Effect::VisibilityChanged(false)
        } else {
            Effect::None
        }
    }

    fn arm(&mut self, now: Instant) {
        self.deadline = now.checked_add(self.timeout.as_duration());
    }
}
