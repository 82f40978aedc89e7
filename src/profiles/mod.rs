//! Profile definitions and the source they are read from.

pub mod source;
pub mod types;

pub use source::{ProfileManager, ProfileSource};
pub use types::{ProfileEntry, ProfileError};
