//! Profile entry data model and errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// A named, uniquely identified configuration preset a user can activate.
///
/// Entries are immutable snapshots handed out by a [`ProfileSource`];
/// the control never mutates them.
///
/// [`ProfileSource`]: crate::profiles::ProfileSource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileEntry {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
}

impl ProfileEntry {
    /// Create an entry with a fresh identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for ProfileEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Errors from profile source operations.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// No profile with the given identifier exists
    #[error("Profile not found: {0}")]
    NotFound(Uuid),

    /// Profile names must contain at least one non-whitespace character
    #[error("Profile name cannot be empty")]
    EmptyName,
}
