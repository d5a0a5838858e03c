//! Synchronous multicast notifications.
//!
//! A [`Signal`] delivers every emitted value to its live handlers on the
//! calling thread, in subscription order, before `emit` returns. Handlers
//! are removed when their [`Subscription`] is dropped.

use std::{
    cell::RefCell,
    fmt, mem,
    rc::{Rc, Weak},
};

type Handler<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Registry<T> {
    next_id:  u64,
    slots:    Vec<(u64, Handler<T>)>,
    disposed: bool,
}

/// A single-threaded publish/subscribe channel.
pub struct Signal<T> {
    registry: Rc<RefCell<Registry<T>>>,
}

/// Keeps a handler registered. Dropping it unsubscribes.
#[must_use = "dropping a Subscription immediately unsubscribes its handler"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl<T: 'static> Signal<T> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id:  0,
                slots:    Vec::new(),
                disposed: false,
            })),
        }
    }

    /// Registers `handler`; it runs on every later `emit` until the returned
    /// subscription is released. A disposed signal hands back an inert subscription.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(&T) + 'static,
    {
        let id = {
            let mut registry = self.registry.borrow_mut();
            if registry.disposed {
                tracing::debug!("subscribe on a disposed signal ignored");
                return Subscription::inert();
            }
            let id = registry.next_id;
            registry.next_id += 1;
            let handler: Handler<T> = Rc::new(RefCell::new(handler));
            registry.slots.push((id, handler));
            id
        };

        let registry = Rc::downgrade(&self.registry);
        Subscription {
            release: Some(Box::new(move || release_slot(&registry, id))),
        }
    }

    /// Calls every handler registered when the emit starts.
    pub fn emit(&self, value: &T) {
        let handlers: Vec<Handler<T>> = {
            let registry = self.registry.borrow();
            if registry.disposed {
                return;
            }
            registry.slots.iter().map(|(_, handler)| Rc::clone(handler)).collect()
        };
        tracing::trace!(subscribers = handlers.len(), "emitting");

        for handler in &handlers {
            match handler.try_borrow_mut() {
                Ok(mut handler) => (*handler)(value),
                Err(_) => tracing::warn!("handler re-entered through a nested emit; skipped"),
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().slots.len()
    }

    pub fn is_disposed(&self) -> bool {
        self.registry.borrow().disposed
    }

    /// Drops every handler. Later emits and subscribes are no-ops.
    pub fn dispose(&self) {
        let slots = {
            let mut registry = self.registry.borrow_mut();
            registry.disposed = true;
            mem::take(&mut registry.slots)
        };
        tracing::debug!(released = slots.len(), "signal disposed");
        // handlers may own subscriptions to this signal; drop them after the borrow ends
        drop(slots);
    }
}

fn release_slot<T>(registry: &Weak<RefCell<Registry<T>>>, id: u64) {
    let Some(registry) = registry.upgrade() else {
        return;
    };
    let removed = {
        let mut registry = registry.borrow_mut();
        registry
            .slots
            .iter()
            .position(|(slot_id, _)| *slot_id == id)
            .map(|index| registry.slots.remove(index))
    };
    drop(removed);
}

impl<T: 'static> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.registry.borrow();
        f.debug_struct("Signal")
            .field("subscribers", &registry.slots.len())
            .field("disposed", &registry.disposed)
            .finish()
    }
}

impl Subscription {
    fn inert() -> Self {
        Self { release: None }
    }

    /// Removes the handler now. Same as dropping the subscription.
    pub fn unsubscribe(self) {
        drop(self);
    }

    /// Keeps the handler registered for the rest of the signal's life.
    pub fn detach(mut self) {
        self.release = None;
    }

    /// False for subscriptions handed out by a disposed signal or already detached.
    pub const fn is_active(&self) -> bool {
        self.release.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("active", &self.is_active()).finish()
    }
}
