//! Profiles Tile - Quick-Panel Profile Control
//!
//! A headless quick-panel tile for a system-profiles feature: a master
//! toggle with a glanceable summary state, an expandable detail view of
//! selectable profiles, and accessibility change announcements. Rendering,
//! persistence, and lock policy stay on the host side behind small
//! collaborator traits.

pub mod lockgate;
pub mod profiles;
pub mod settings;
pub mod subscription;
pub mod tile;

// Re-export commonly used types
pub use lockgate::{DefaultLockGate, LockGate};
pub use profiles::source::{ProfileManager, ProfileSource};
pub use profiles::types::{ProfileEntry, ProfileError};
pub use settings::{DefaultSettingAccessor, SettingAccessor};
pub use subscription::{ChangeListener, SubscriptionId};
pub use tile::control::ProfileControl;
pub use tile::detail::DetailViewController;
pub use tile::strings::TileStrings;
pub use tile::types::{IconVariant, ListSnapshot, SummaryRenderState, TileHost};
