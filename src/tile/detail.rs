//! Expanded detail view: the profile list model and its controller.

use crate::profiles::source::ProfileSource;
use crate::profiles::types::ProfileEntry;
use crate::settings::SettingAccessor;
use crate::tile::strings::TileStrings;
use crate::tile::types::{
    EmptyState, IconVariant, ListSnapshot, TileHost, METRICS_CATEGORY_DETAIL, SETTINGS_TARGET,
};
use std::sync::{Arc, Mutex};

/// Ordered list of profile entries backing the detail view.
///
/// Holds at most one checked position (single-choice selection). The
/// model is rebuilt from the source on demand; it never patches itself
/// incrementally.
#[derive(Debug, Default)]
pub struct ProfileListModel {
    entries: Vec<ProfileEntry>,
    checked: Option<usize>,
}

impl ProfileListModel {
    /// Create an empty model with nothing checked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the model from the source.
    ///
    /// Always clears first. With `populate` false the model stays empty
    /// (the off/empty presentation). With `populate` true the entries are
    /// copied in source order and the checked position is set to the
    /// first entry matching the active profile's id, if any.
    pub fn rebuild(&mut self, populate: bool, source: &dyn ProfileSource) {
        self.entries.clear();
        self.checked = None;

        if !populate {
            return;
        }

        self.entries = source.profiles();
        if let Some(active) = source.active_profile() {
            self.checked = self.entries.iter().position(|p| p.id == active.id);
        }
    }

    /// Entries in presentation order.
    pub fn entries(&self) -> &[ProfileEntry] {
        &self.entries
    }

    /// Checked position, if any entry is checked.
    pub fn checked(&self) -> Option<usize> {
        self.checked
    }

    /// Copy the current contents into a snapshot.
    pub fn snapshot(&self) -> ListSnapshot {
        ListSnapshot {
            entries: self.entries.clone(),
            checked: self.checked,
        }
    }
}

/// Controller for the expanded detail view.
///
/// Owns the list model while the view is open and routes the toggle and
/// item-click interactions to the collaborators. Created by
/// [`ProfileControl`](crate::tile::control::ProfileControl); not
/// constructed directly by hosts.
pub struct DetailViewController {
    settings: Arc<dyn SettingAccessor>,
    profiles: Arc<dyn ProfileSource>,
    host: Arc<dyn TileHost>,
    strings: TileStrings,
    model: Mutex<Option<ProfileListModel>>,
}

impl DetailViewController {
    pub(crate) fn new(
        settings: Arc<dyn SettingAccessor>,
        profiles: Arc<dyn ProfileSource>,
        host: Arc<dyn TileHost>,
        strings: TileStrings,
    ) -> Self {
        Self {
            settings,
            profiles,
            host,
            strings,
            model: Mutex::new(None),
        }
    }

    /// Heading for the detail view (the feature name).
    pub fn title(&self) -> &str {
        &self.strings.tile_label
    }

    /// Instrumentation category for detail-view interactions.
    pub fn metrics_category(&self) -> &'static str {
        METRICS_CATEGORY_DETAIL
    }

    /// Routing token for the settings affordance in the detail view.
    pub fn settings_target(&self) -> &'static str {
        SETTINGS_TARGET
    }

    /// Descriptor for rendering the empty/off list state.
    pub fn empty_state(&self) -> EmptyState {
        EmptyState {
            icon: IconVariant::Off,
            label: self.strings.off_label.clone(),
        }
    }

    /// Current toggle state, read through to the setting.
    pub fn get_toggle_state(&self) -> bool {
        self.settings.get()
    }

    /// Write the toggle, announce the user-driven change, and rebuild.
    ///
    /// The toggle-changed notification is distinct from the generic
    /// refresh path so hosts can tell a user-driven toggle apart from an
    /// externally observed one.
    pub fn set_toggle_state(&self, state: bool) {
        tracing::info!("Detail toggle set: {}", state);
        self.settings.set(state);
        self.host.notify_toggle_changed(state);
        self.rebuild(state);
    }

    /// Make `entry` the active profile.
    ///
    /// Fire-and-forget: the checked position is not updated here. The
    /// source's change notification drives the rebuild, keeping the view
    /// consistent with the single source of truth.
    pub fn on_entry_selected(&self, entry: &ProfileEntry) {
        tracing::debug!("Profile entry selected: {}", entry.name);
        if let Err(e) = self.profiles.set_active(entry.id) {
            tracing::warn!("Failed to activate profile {}: {}", entry.name, e);
        }
    }

    /// Open the detail view: install an empty model, then rebuild it
    /// against the current toggle state.
    ///
    /// Selection is single-choice (at most one checked position); item
    /// clicks route to [`Self::on_entry_selected`]. Returns the initial
    /// snapshot for the host to render.
    pub fn create_detail_view(&self) -> ListSnapshot {
        {
            let mut model = self.model.lock().unwrap();
            *model = Some(ProfileListModel::new());
        }
        tracing::debug!("Detail view created");
        self.rebuild(self.get_toggle_state())
            .unwrap_or_default()
    }

    /// Close the detail view and discard the model.
    pub fn teardown(&self) {
        let mut model = self.model.lock().unwrap();
        if model.take().is_some() {
            tracing::debug!("Detail view torn down");
        }
    }

    /// Whether the detail view is currently open.
    pub fn is_open(&self) -> bool {
        self.model.lock().unwrap().is_some()
    }

    /// Snapshot of the current model, if the detail view is open.
    pub fn snapshot(&self) -> Option<ListSnapshot> {
        self.model.lock().unwrap().as_ref().map(|m| m.snapshot())
    }

    /// Rebuild the model if the detail view is open.
    ///
    /// Notifies the host after every completed rebuild, even when the
    /// resulting snapshot is unchanged. Returns the new snapshot, or
    /// `None` when the view is closed.
    pub(crate) fn rebuild(&self, populate: bool) -> Option<ListSnapshot> {
        let snapshot = {
            let mut model = self.model.lock().unwrap();
            let model = model.as_mut()?;
            model.rebuild(populate, &*self.profiles);
            model.snapshot()
        };
        self.host.notify_list_changed(&snapshot);
        Some(snapshot)
    }
}
