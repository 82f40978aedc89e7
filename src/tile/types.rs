//! Types shared across the tile: render state, list snapshot, host contract.

use crate::profiles::types::ProfileEntry;
use serde::{Deserialize, Serialize};

/// Routing token for the external settings surface the tile links to.
pub const SETTINGS_TARGET: &str = "settings/profiles";

/// Instrumentation category for interactions with the collapsed tile.
pub const METRICS_CATEGORY_TILE: &str = "panel.profiles";

/// Instrumentation category for interactions inside the detail view.
pub const METRICS_CATEGORY_DETAIL: &str = "panel.profiles.detail";

/// Icon shown in the tile's summary state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconVariant {
    /// Feature enabled
    On,
    /// Feature disabled
    #[default]
    Off,
}

impl std::fmt::Display for IconVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconVariant::On => write!(f, "On"),
            IconVariant::Off => write!(f, "Off"),
        }
    }
}

/// Render-ready summary of the collapsed tile.
///
/// Recomputed in full on every refresh; a value is a snapshot, not a
/// live view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRenderState {
    /// Whether the tile should be shown at all
    pub visible: bool,
    /// Whether taps/toggles are currently permitted
    pub interaction_allowed: bool,
    /// Icon variant to render
    pub icon: IconVariant,
    /// Primary label (active profile name, or the off label)
    pub label: String,
    /// Accessibility description for screen readers
    pub description: String,
}

impl Default for SummaryRenderState {
    fn default() -> Self {
        Self {
            visible: false,
            interaction_allowed: true,
            icon: IconVariant::Off,
            label: String::new(),
            description: String::new(),
        }
    }
}

/// Ordered profile list for the detail view plus the checked position.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListSnapshot {
    /// Entries in source order
    pub entries: Vec<ProfileEntry>,
    /// Index of the checked entry, if any
    pub checked: Option<usize>,
}

/// Descriptor for the detail view's empty/off presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmptyState {
    /// Icon variant to render
    pub icon: IconVariant,
    /// Label shown in place of the list
    pub label: String,
}

/// Host-side rendering and navigation collaborator.
///
/// The tile pushes state out through this trait and never reads back;
/// implementations are expected to be cheap and non-blocking.
pub trait TileHost: Send + Sync {
    /// Request that the expanded detail view be shown.
    fn open_detail_view(&self);

    /// Request navigation to the external settings surface.
    fn navigate_to_settings(&self, bypass_lock: bool);

    /// A new summary render state is available.
    fn notify_render_state_changed(&self, state: &SummaryRenderState);

    /// The detail view's list snapshot was rebuilt.
    fn notify_list_changed(&self, snapshot: &ListSnapshot);

    /// The user drove the toggle from the detail view.
    fn notify_toggle_changed(&self, enabled: bool);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_render_state_is_neutral() {
        let state = SummaryRenderState::default();
        assert!(!state.visible);
        assert!(state.interaction_allowed);
        assert_eq!(state.icon, IconVariant::Off);
        assert!(state.label.is_empty());
        assert!(state.description.is_empty());
    }

    #[test]
    fn test_default_snapshot_is_empty() {
        let snapshot = ListSnapshot::default();
        assert!(snapshot.entries.is_empty());
        assert_eq!(snapshot.checked, None);
    }

    #[test]
    fn test_icon_variant_display() {
        assert_eq!(IconVariant::On.to_string(), "On");
        assert_eq!(IconVariant::Off.to_string(), "Off");
    }
}
