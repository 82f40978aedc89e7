//! Listener registration shared by the observable collaborators.
//!
//! Change notifications carry no payload: observers re-read current
//! collaborator state when woken. Dispatch snapshots the listener list
//! before invoking callbacks, so a callback is free to subscribe or
//! unsubscribe on the same registry while it runs.

use std::sync::{Arc, Mutex};

/// Callback invoked when an observed collaborator changes.
///
/// Only notification dispatch invokes listeners; registration and
/// removal never do. Sources release their own state locks before
/// dispatching, since listeners re-read the source.
pub type ChangeListener = Arc<dyn Fn() + Send + Sync>;

/// Handle identifying one listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Registered listeners for one event source.
pub struct ListenerRegistry {
    inner: Mutex<RegistryInner>,
}

struct RegistryInner {
    /// Next handle value; never reused within a registry.
    next_id: u64,
    /// Listeners in registration order.
    entries: Vec<(SubscriptionId, ChangeListener)>,
}

impl ListenerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(RegistryInner {
                next_id: 0,
                entries: Vec::new(),
            }),
        }
    }

    /// Register a listener and return its subscription handle.
    pub fn subscribe(&self, listener: ChangeListener) -> SubscriptionId {
        let mut inner = self.inner.lock().unwrap();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.entries.push((id, listener));
        id
    }

    /// Remove a listener. Returns `false` if the handle was not registered.
    pub fn unsubscribe(&self, subscription: SubscriptionId) -> bool {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.entries.len();
        inner.entries.retain(|(id, _)| *id != subscription);
        inner.entries.len() != before
    }

    /// Invoke every registered listener, in registration order.
    pub fn notify_all(&self) {
        let listeners: Vec<ChangeListener> = {
            let inner = self.inner.lock().unwrap();
            inner.entries.iter().map(|(_, listener)| listener.clone()).collect()
        };
        for listener in listeners {
            listener();
        }
    }

    /// Number of registered listeners.
    pub fn count(&self) -> usize {
        self.inner.lock().unwrap().entries.len()
    }

    /// Whether no listeners are registered.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl Default for ListenerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_subscribe_and_notify() {
        let registry = ListenerRegistry::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = calls.clone();
        registry.subscribe(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        registry.notify_all();
        registry.notify_all();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let registry = ListenerRegistry::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = calls.clone();
        let id = registry.subscribe(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        registry.notify_all();
        assert!(registry.unsubscribe(id));
        registry.notify_all();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(registry.count(), 0);
    }

    #[test]
    fn test_unsubscribe_unknown_handle() {
        let registry = ListenerRegistry::new();
        let id = registry.subscribe(Arc::new(|| {}));

        assert!(registry.unsubscribe(id));
        assert!(!registry.unsubscribe(id));
    }

    #[test]
    fn test_handles_are_unique() {
        let registry = ListenerRegistry::new();
        let a = registry.subscribe(Arc::new(|| {}));
        let b = registry.subscribe(Arc::new(|| {}));

        assert_ne!(a, b);
        assert_eq!(registry.count(), 2);
    }

    #[test]
    fn test_unsubscribe_from_within_callback() {
        let registry = Arc::new(ListenerRegistry::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let inner_registry = registry.clone();
        let counter = calls.clone();
        let id = Arc::new(Mutex::new(None));
        let id_slot = id.clone();
        let handle = registry.subscribe(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            if let Some(own) = *id_slot.lock().unwrap() {
                inner_registry.unsubscribe(own);
            }
        }));
        *id.lock().unwrap() = Some(handle);

        // First dispatch runs the callback, which removes itself.
        registry.notify_all();
        registry.notify_all();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(registry.is_empty());
    }
}
