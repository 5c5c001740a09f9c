// SPDX-License-Identifier: MPL-2.0
//! Touch layer laid over the video surface.
//!
//! Taps toggle the controls overlay and horizontal drags seek. The shutter
//! keeps its own gesture and timer state and writes the outcome into the
//! controller (`is_controls_visible`, `is_dragging`, seeks).
//!
//! The shutter only holds a weak reference to the controller. Once the
//! controller is dropped or disposed, or [`TouchShutter::dispose`] ran, every
//! message is ignored and the hide timer can no longer fire.

use crate::ui::state::{DragSeek, OverlayEffect, OverlayTimeout, OverlayVisibility};
use crate::video_player::PlayerController;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

/// Messages for the touch shutter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Tap on the player surface.
    Tapped(Instant),
    /// Clock tick from the host.
    Tick(Instant),
    /// Pointer went down and started moving horizontally.
    DragStarted { x: f32, at: Instant },
    /// Pointer moved during a drag.
    DragMoved { x: f32 },
    /// Pointer released; the proposed seek is committed.
    DragEnded(Instant),
    /// Gesture aborted; nothing is committed.
    DragCancelled,
}

/// Effects produced by the touch shutter.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// The controls overlay was shown or hidden.
    ControlsVisibilityChanged(bool),
    /// A drag proposes seeking to `target`; `label` is the relative offset.
    SeekPreview { target: Duration, label: String },
    /// A drag finished and the controller was asked to seek.
    Seeked(Duration),
}

/// Tap and drag handling bound to one controller.
#[derive(Debug)]
pub struct TouchShutter {
    controller: Weak<PlayerController>,
    overlay: OverlayVisibility,
    drag: DragSeek,
    disposed: bool,
}

impl TouchShutter {
    /// Binds a shutter to `controller`.
    pub fn new(controller: &Rc<PlayerController>, timeout: OverlayTimeout) -> Self {
        let mut overlay = OverlayVisibility::new(timeout);
        overlay.sync(controller.value().is_controls_visible);
        Self {
            controller: Rc::downgrade(controller),
            overlay,
            drag: DragSeek::default(),
            disposed: false,
        }
    }

    /// Returns true while the controls overlay is shown.
    #[must_use]
    pub fn is_controls_visible(&self) -> bool {
        self.overlay.is_visible()
    }

    /// Pending hide deadline, for hosts that schedule ticks precisely.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.overlay.deadline()
    }

    /// Drag hint text, while a drag is in progress.
    #[must_use]
    pub fn drag_label(&self) -> Option<String> {
        self.drag.offset_label()
    }

    /// Handles a shutter message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        let Some(controller) = self.live_controller() else {
            return Effect::None;
        };

        match msg {
            Message::Tapped(now) => {
                if controller.flags().hide_controls {
                    return Effect::None;
                }
                self.overlay.sync(controller.value().is_controls_visible);
                let effect = self.overlay.tap(now);
                self.apply(&controller, effect)
            }
            Message::Tick(now) => {
                let value = controller.value();
                self.overlay.sync(value.is_controls_visible);
                // Scrubber drags are only visible through the controller.
                let is_dragging = self.drag.is_dragging || value.is_dragging;
                let effect = self.overlay.poll(now, is_dragging);
                self.apply(&controller, effect)
            }
            Message::DragStarted { x, at } => {
                if !controller.flags().allows_drag_seek() || controller.value().has_error {
                    return Effect::None;
                }
                self.drag.start(x, controller.progress().position);
                controller.set_dragging(true);
                if controller.flags().hide_controls {
                    return Effect::None;
                }
                let effect = self.overlay.show(at);
                self.apply(&controller, effect)
            }
            Message::DragMoved { x } => {
                let duration = controller.metadata().duration;
                match (self.drag.update(x, duration), self.drag.offset_label()) {
                    (Some(target), Some(label)) => Effect::SeekPreview { target, label },
                    _ => Effect::None,
                }
            }
            Message::DragEnded(now) => {
                let Some(target) = self.drag.stop() else {
                    return Effect::None;
                };
                controller.set_dragging(false);
                controller.seek_to(target);
                if !controller.flags().hide_controls {
                    // Restart the hide timer from the release.
                    let effect = self.overlay.show(now);
                    self.apply(&controller, effect);
                }
                Effect::Seeked(target)
            }
            Message::DragCancelled => {
                if self.drag.stop().is_some() {
                    controller.set_dragging(false);
                }
                Effect::None
            }
        }
    }

    /// Cancels the hide timer and any drag, and unbinds from the controller.
    pub fn dispose(&mut self) {
        self.overlay.cancel();
        if self.drag.stop().is_some() {
            if let Some(controller) = self.live_controller() {
                controller.set_dragging(false);
            }
        }
        self.disposed = true;
        self.controller = Weak::new();
    }

    fn live_controller(&self) -> Option<Rc<PlayerController>> {
        if self.disposed {
            return None;
        }
        self.controller
            .upgrade()
            .filter(|controller| !controller.is_disposed())
    }

    fn apply(&self, controller: &PlayerController, effect: OverlayEffect) -> Effect {
        match effect {
            OverlayEffect::VisibilityChanged(visible) => {
                controller.set_controls_visible(visible);
                Effect::ControlsVisibilityChanged(visible)
            }
            OverlayEffect::None => Effect::None,
        }
    }
}

impl Drop for TouchShutter {
    fn drop(&mut self) {
        self.dispose();
    }
}
