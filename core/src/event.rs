//! Node event listeners.
//!
//! The gateway delivers node events (invoice paid, payment succeeded, new
//! block, ...) through a cursor; [`crate::Wallet::poll_events`] fetches new
//! events and fans each one out to every registered listener.

use crate::api::NodeEvent;
use std::collections::HashMap;
use std::sync::Mutex;

/// Callback invoked for every node event.
pub trait EventListener: Send + Sync {
    fn on_event(&self, event: &NodeEvent);
}

/// Registry of event listeners, keyed by registration id.
pub(crate) struct ListenerRegistry {
    listeners: Mutex<HashMap<String, Box<dyn EventListener>>>,
}

impl ListenerRegistry {
    pub(crate) fn new() -> Self {
        Self {
            listeners: Mutex::new(HashMap::new()),
        }
    }

    /// Register a listener and return its id.
    pub(crate) fn add(&self, listener: Box<dyn EventListener>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.listeners
            .lock()
            .expect("listener registry poisoned")
            .insert(id.clone(), listener);
        id
    }

    /// Remove a listener by id. Returns whether it was registered.
    pub(crate) fn remove(&self, id: &str) -> bool {
        self.listeners
            .lock()
            .expect("listener registry poisoned")
            .remove(id)
            .is_some()
    }

    /// Dispatch each event to every registered listener, in order.
    pub(crate) fn dispatch(&self, events: &[NodeEvent]) {
        let listeners = self.listeners.lock().expect("listener registry poisoned");
        for event in events {
            for listener in listeners.values() {
                listener.on_event(event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingListener(Arc<AtomicUsize>);

    impl EventListener for CountingListener {
        fn on_event(&self, _event: &NodeEvent) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_dispatch_reaches_every_listener() {
        let registry = ListenerRegistry::new();
        let count_a = Arc::new(AtomicUsize::new(0));
        let count_b = Arc::new(AtomicUsize::new(0));
        registry.add(Box::new(CountingListener(count_a.clone())));
        registry.add(Box::new(CountingListener(count_b.clone())));

        registry.dispatch(&[NodeEvent::Synced, NodeEvent::NewBlock { block: 1 }]);

        assert_eq!(count_a.load(Ordering::SeqCst), 2);
        assert_eq!(count_b.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_remove_stops_delivery() {
        let registry = ListenerRegistry::new();
        let count = Arc::new(AtomicUsize::new(0));
        let id = registry.add(Box::new(CountingListener(count.clone())));

        assert!(registry.remove(&id));
        assert!(!registry.remove(&id));

        registry.dispatch(&[NodeEvent::Synced]);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
