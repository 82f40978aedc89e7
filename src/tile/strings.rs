//! Display and accessibility strings for the tile.

use serde::{Deserialize, Serialize};

/// Fixed strings used by the tile's summary and announcement text.
///
/// Hosts localize by deserializing their own values; the `Default` set
/// is English. Dynamic text (active profile names) never lives here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileStrings {
    /// Static feature name, also the detail view title
    pub tile_label: String,
    /// Summary label while the feature is off
    pub off_label: String,
    /// Accessibility description while the feature is off
    pub off_description: String,
    /// Announcement spoken when the feature turns off
    pub off_changed_announcement: String,
}

impl Default for TileStrings {
    fn default() -> Self {
        Self {
            tile_label: "Profiles".to_string(),
            off_label: "Profiles off".to_string(),
            off_description: "Profiles off.".to_string(),
            off_changed_announcement: "Profiles turned off.".to_string(),
        }
    }
}

impl TileStrings {
    /// Accessibility description for the enabled summary state.
    pub fn summary_description(&self, label: &str) -> String {
        format!("{}: {}.", self.tile_label, label)
    }

    /// Announcement spoken when the enabled state's label changes.
    pub fn changed_announcement(&self, label: &str) -> String {
        format!("{} changed to {}.", self.tile_label, label)
    }
}
