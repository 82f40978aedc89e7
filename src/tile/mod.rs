//! The profile tile: collapsed control, detail view, strings, shared types.

pub mod control;
pub mod detail;
pub mod strings;
pub mod types;

pub use control::ProfileControl;
pub use detail::{DetailViewController, ProfileListModel};
pub use strings::TileStrings;
pub use types::{
    EmptyState, IconVariant, ListSnapshot, SummaryRenderState, TileHost, METRICS_CATEGORY_DETAIL,
    METRICS_CATEGORY_TILE, SETTINGS_TARGET,
};
