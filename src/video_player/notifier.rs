// SPDX-License-Identifier: MPL-2.0
//! Synchronous listener registry.
//!
//! Listeners take no arguments: they read the current state back from whatever
//! owns the notifier. Fan-out runs on the caller's thread, in attachment order.
//!
//! A notification raised while a fan-out is already running (a listener that
//! mutates the controller) does not recurse. It is coalesced into one more
//! pass once the current pass finishes, up to
//! [`MAX_NOTIFY_PASSES`](crate::config::MAX_NOTIFY_PASSES) passes.

use crate::config::MAX_NOTIFY_PASSES;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// Handle identifying one attached listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Rc<dyn Fn()>;

#[derive(Default)]
struct Registry {
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
    next_id: Cell<u64>,
    notifying: Cell<bool>,
    pending: Cell<bool>,
}

impl Registry {
    fn is_attached(&self, id: ListenerId) -> bool {
        self.listeners.borrow().iter().any(|(other, _)| *other == id)
    }

    fn remove(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(other, _)| *other != id);
        listeners.len() != before
    }
}

/// Clears the in-progress flag even if a listener panics.
struct PassGuard<'a>(&'a Registry);

impl Drop for PassGuard<'_> {
    fn drop(&mut self) {
        self.0.notifying.set(false);
        self.0.pending.set(false);
    }
}

/// Ordered registry of no-argument callbacks.
#[derive(Default)]
pub struct Notifier {
    registry: Rc<Registry>,
}

impl Notifier {
    /// Creates an empty notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a listener and returns its handle.
    pub fn add_listener(&self, listener: impl Fn() + 'static) -> ListenerId {
        let id = ListenerId(self.registry.next_id.get());
        self.registry.next_id.set(id.0 + 1);
        self.registry
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        id
    }

    /// Detaches a listener.
    ///
    /// Detaching twice is a no-op. Returns whether the listener was attached.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        self.registry.remove(id)
    }

    /// Attaches a listener that is detached when the returned guard drops.
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> Subscription {
        let id = self.add_listener(listener);
        Subscription {
            registry: Rc::downgrade(&self.registry),
            id: Some(id),
        }
    }

    /// Returns true if `id` is still attached.
    pub fn is_attached(&self, id: ListenerId) -> bool {
        self.registry.is_attached(id)
    }

    /// Number of attached listeners.
    pub fn len(&self) -> usize {
        self.registry.listeners.borrow().len()
    }

    /// Returns true if nothing is attached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Detaches every listener.
    pub fn clear(&self) {
        self.registry.listeners.borrow_mut().clear();
    }

    /// Invokes every attached listener once, in attachment order.
    pub fn notify(&self) {
        let registry = &*self.registry;
        if registry.notifying.get() {
            registry.pending.set(true);
            tracing::trace!("re-entrant notification coalesced");
            return;
        }

        registry.notifying.set(true);
        let _guard = PassGuard(registry);

        let mut passes = 0;
        loop {
            passes += 1;
            // Snapshot so listeners may attach or detach during the pass.
            let snapshot: Vec<(ListenerId, Listener)> = registry.listeners.borrow().clone();
            for (id, listener) in snapshot {
                if registry.is_attached(id) {
                    listener();
                }
            }

            if !registry.pending.replace(false) {
                break;
            }
            if passes >= MAX_NOTIFY_PASSES {
                tracing::warn!(
                    passes,
                    "listeners keep re-triggering notifications, dropping the rest"
                );
                break;
            }
        }
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("listeners", &self.len())
            .field("notifying", &self.registry.notifying.get())
            .finish()
    }
}

/// Scoped attachment to a [`Notifier`].
///
/// Dropping the guard detaches the listener. Outliving the notifier is fine.
#[must_use = "dropping a Subscription detaches its listener immediately"]
pub struct Subscription {
    registry: Weak<Registry>,
    id: Option<ListenerId>,
}

impl Subscription {
    /// Handle of the attached listener, if still attached through this guard.
    pub fn id(&self) -> Option<ListenerId> {
        self.id
    }

    /// Detaches now. Calling it again is a no-op.
    pub fn unsubscribe(&mut self) {
        if let (Some(id), Some(registry)) = (self.id.take(), self.registry.upgrade()) {
            registry.remove(id);
        }
    }

    /// Keeps the listener attached for the notifier's lifetime.
    pub fn detach(mut self) -> Option<ListenerId> {
        self.id.take()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("notifier_alive", &(self.registry.strong_count() > 0))
            .finish()
    }
}
