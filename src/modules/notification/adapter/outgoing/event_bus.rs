use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use tracing::{debug, trace};

use crate::notification::application::ports::outgoing::ChangeNotifier;
use crate::notification::domain::ContentEvent;

type Listener = Arc<dyn Fn(&ContentEvent) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: AtomicU64,
    listeners: Mutex<Vec<(u64, Listener)>>,
}

impl Registry {
    fn listeners(&self) -> MutexGuard<'_, Vec<(u64, Listener)>> {
        // A listener panicking mid-publish never holds this lock.
        self.listeners
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// In-process event bus standing in for the window's event target.
///
/// Cloning shares the same listener registry.
#[derive(Clone, Default)]
pub struct EventBus {
    registry: Arc<Registry>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` until the returned [`Subscription`] is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&ContentEvent) + Send + Sync + 'static,
    {
        let id = self.registry.next_id.fetch_add(1, Ordering::Relaxed);
        self.registry.listeners().push((id, Arc::new(listener)));
        debug!(subscription = id, "Listener subscribed to content events");

        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.listeners().len()
    }
}

impl ChangeNotifier for EventBus {
    fn publish(&self, event: &ContentEvent) {
        // Snapshot so listeners can subscribe, unsubscribe or publish re-entrantly.
        let listeners: Vec<Listener> = self
            .registry
            .listeners()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        trace!(
            event = event.event_type(),
            listeners = listeners.len(),
            "Dispatching content event"
        );

        for listener in listeners {
            listener(event);
        }
    }
}

/// Handle returned by [`EventBus::subscribe`].
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<Registry>,
}

impl Subscription {
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.listeners().retain(|(id, _)| *id != self.id);
            debug!(subscription = self.id, "Listener unsubscribed from content events");
        }
    }
}
