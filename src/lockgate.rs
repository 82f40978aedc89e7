//! Lock-state reporting.
//!
//! The surrounding system decides when a lock surface is showing and
//! whether it is secure; the control only combines the two answers into
//! "is interaction currently allowed". Gating policy stays outside.

use crate::subscription::{ChangeListener, ListenerRegistry, SubscriptionId};
use std::sync::Mutex;

/// External authority on the current lock state, observable for change.
pub trait LockGate: Send + Sync {
    /// Whether a lock surface is currently showing.
    fn is_showing(&self) -> bool;

    /// Whether the lock requires credentials to dismiss.
    fn is_secure(&self) -> bool;

    /// Register a change listener.
    fn subscribe(&self, listener: ChangeListener) -> SubscriptionId;

    /// Remove a previously registered listener.
    fn unsubscribe(&self, subscription: SubscriptionId);
}

/// Snapshot of the two lock flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LockState {
    showing: bool,
    secure: bool,
}

/// In-memory lock gate for tests and embedders without a platform lock
/// service. Starts unlocked (not showing, secure).
pub struct DefaultLockGate {
    state: Mutex<LockState>,
    listeners: ListenerRegistry,
}

impl DefaultLockGate {
    /// Create a gate that reports not showing, secure.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(LockState {
                showing: false,
                secure: true,
            }),
            listeners: ListenerRegistry::new(),
        }
    }

    /// Replace both lock flags and notify observers.
    pub fn set_lock_state(&self, showing: bool, secure: bool) {
        {
            let mut state = self.state.lock().unwrap();
            *state = LockState { showing, secure };
        }
        tracing::debug!("Lock state changed: showing={} secure={}", showing, secure);
        self.listeners.notify_all();
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.listeners.count()
    }
}

impl Default for DefaultLockGate {
    fn default() -> Self {
        Self::new()
    }
}

impl LockGate for DefaultLockGate {
    fn is_showing(&self) -> bool {
        self.state.lock().unwrap().showing
    }

    fn is_secure(&self) -> bool {
        self.state.lock().unwrap().secure
    }

    fn subscribe(&self, listener: ChangeListener) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    fn unsubscribe(&self, subscription: SubscriptionId) {
        self.listeners.unsubscribe(subscription);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_starts_unlocked() {
        let gate = DefaultLockGate::new();
        assert!(!gate.is_showing());
        assert!(gate.is_secure());
    }

    #[test]
    fn test_set_lock_state() {
        let gate = DefaultLockGate::new();
        gate.set_lock_state(true, false);
        assert!(gate.is_showing());
        assert!(!gate.is_secure());
    }

    #[test]
    fn test_change_notification() {
        let gate = DefaultLockGate::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = calls.clone();
        let id = gate.subscribe(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        gate.set_lock_state(true, true);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        gate.unsubscribe(id);
        gate.set_lock_state(false, true);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
