//! Access to the externally persisted feature toggle.
//!
//! The profiles feature is governed by a single boolean setting owned by
//! the surrounding system. The control only ever reads and writes it
//! through this seam, so hosts can back it with whatever store they use.

use crate::subscription::{ChangeListener, ListenerRegistry, SubscriptionId};
use std::sync::Mutex;

/// Value reported for the toggle when the backing store has no entry.
pub const DEFAULT_ENABLED: bool = true;

/// Read/write access to the boolean feature setting, observable for change.
pub trait SettingAccessor: Send + Sync {
    /// Current toggle value; `DEFAULT_ENABLED` when unset.
    fn get(&self) -> bool;

    /// Write a new toggle value.
    fn set(&self, enabled: bool);

    /// Register a change listener.
    fn subscribe(&self, listener: ChangeListener) -> SubscriptionId;

    /// Remove a previously registered listener.
    fn unsubscribe(&self, subscription: SubscriptionId);
}

/// In-memory setting accessor, the default store for tests and embedders
/// without an external settings service.
pub struct DefaultSettingAccessor {
    /// `None` models a store with no persisted entry yet.
    value: Mutex<Option<bool>>,
    listeners: ListenerRegistry,
}

impl DefaultSettingAccessor {
    /// Create an accessor with no persisted value (reads as enabled).
    pub fn new() -> Self {
        Self {
            value: Mutex::new(None),
            listeners: ListenerRegistry::new(),
        }
    }

    /// Create an accessor with an explicit initial value.
    pub fn with_value(enabled: bool) -> Self {
        Self {
            value: Mutex::new(Some(enabled)),
            listeners: ListenerRegistry::new(),
        }
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.listeners.count()
    }
}

impl Default for DefaultSettingAccessor {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingAccessor for DefaultSettingAccessor {
    fn get(&self) -> bool {
        self.value.lock().unwrap().unwrap_or(DEFAULT_ENABLED)
    }

    fn set(&self, enabled: bool) {
        {
            let mut value = self.value.lock().unwrap();
            *value = Some(enabled);
        }
        tracing::debug!("Feature setting written: {}", enabled);
        // Observers are notified on every write, even an unchanged one,
        // matching content-observer stores.
        self.listeners.notify_all();
    }

    fn subscribe(&self, listener: ChangeListener) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    fn unsubscribe(&self, subscription: SubscriptionId) {
        self.listeners.unsubscribe(subscription);
    }
}
