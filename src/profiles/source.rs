//! Profile source contract and the in-memory registry implementation.

use crate::profiles::types::{ProfileEntry, ProfileError};
use crate::subscription::{ChangeListener, ListenerRegistry, SubscriptionId};
use std::sync::Mutex;
use uuid::Uuid;

/// Provider of the profile list and the active selection.
///
/// A single registered listener observes both kinds of change: selection
/// changes and profile metadata updates. Listeners re-read the source
/// rather than receiving a payload.
pub trait ProfileSource: Send + Sync {
    /// All profiles, in presentation order.
    fn profiles(&self) -> Vec<ProfileEntry>;

    /// The currently active profile, if any.
    fn active_profile(&self) -> Option<ProfileEntry>;

    /// Request that the profile with `id` become active.
    fn set_active(&self, id: Uuid) -> Result<(), ProfileError>;

    /// Register a selected/updated listener.
    fn subscribe(&self, listener: ChangeListener) -> SubscriptionId;

    /// Remove a previously registered listener.
    fn unsubscribe(&self, subscription: SubscriptionId);
}

/// Mutable registry state behind the manager's lock.
struct RegistryState {
    /// Profiles in presentation order.
    profiles: Vec<ProfileEntry>,
    /// Identifier of the active profile, if one is selected.
    active: Option<Uuid>,
}

/// In-memory profile registry.
///
/// Serves as the [`ProfileSource`] for tests and for embedders that keep
/// profile definitions in process. Starts empty with no active profile;
/// activation is always explicit.
pub struct ProfileManager {
    state: Mutex<RegistryState>,
    listeners: ListenerRegistry,
}

impl ProfileManager {
    /// Create an empty registry with no active profile.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(RegistryState {
                profiles: Vec::new(),
                active: None,
            }),
            listeners: ListenerRegistry::new(),
        }
    }

    /// Add a profile with the given display name.
    pub fn add_profile(&self, name: impl Into<String>) -> Result<ProfileEntry, ProfileError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProfileError::EmptyName);
        }

        let entry = ProfileEntry::new(name);
        {
            let mut state = self.state.lock().unwrap();
            state.profiles.push(entry.clone());
        }
        tracing::debug!("Profile added: {}", entry.name);
        self.listeners.notify_all();
        Ok(entry)
    }

    /// Rename an existing profile.
    pub fn rename_profile(&self, id: Uuid, name: impl Into<String>) -> Result<(), ProfileError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProfileError::EmptyName);
        }

        {
            let mut state = self.state.lock().unwrap();
            let entry = state
                .profiles
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or(ProfileError::NotFound(id))?;
            entry.name = name;
        }
        tracing::debug!("Profile renamed: {}", id);
        self.listeners.notify_all();
        Ok(())
    }

    /// Remove a profile. Removing the active profile clears the selection.
    pub fn remove_profile(&self, id: Uuid) -> Result<(), ProfileError> {
        {
            let mut state = self.state.lock().unwrap();
            if !state.profiles.iter().any(|p| p.id == id) {
                return Err(ProfileError::NotFound(id));
            }
            state.profiles.retain(|p| p.id != id);
            if state.active == Some(id) {
                state.active = None;
            }
        }
        tracing::debug!("Profile removed: {}", id);
        self.listeners.notify_all();
        Ok(())
    }

    /// Number of profiles in the registry.
    pub fn len(&self) -> usize {
        self.state.lock().unwrap().profiles.len()
    }

    /// Whether the registry holds no profiles.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.listeners.count()
    }
}

impl Default for ProfileManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileSource for ProfileManager {
    fn profiles(&self) -> Vec<ProfileEntry> {
        self.state.lock().unwrap().profiles.clone()
    }

    fn active_profile(&self) -> Option<ProfileEntry> {
        let state = self.state.lock().unwrap();
        let active = state.active?;
        state.profiles.iter().find(|p| p.id == active).cloned()
    }

    fn set_active(&self, id: Uuid) -> Result<(), ProfileError> {
        {
            let mut state = self.state.lock().unwrap();
            if !state.profiles.iter().any(|p| p.id == id) {
                return Err(ProfileError::NotFound(id));
            }
            state.active = Some(id);
        }
        tracing::debug!("Active profile set: {}", id);
        // Re-selecting the already active profile still notifies, like
        // the add/rename/remove paths.
        self.listeners.notify_all();
        Ok(())
    }

    fn subscribe(&self, listener: ChangeListener) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    fn unsubscribe(&self, subscription: SubscriptionId) {
        self.listeners.unsubscribe(subscription);
    }
}
