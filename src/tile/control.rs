//! The collapsed tile control: listening lifecycle and summary state.

use crate::lockgate::LockGate;
use crate::profiles::source::ProfileSource;
use crate::settings::SettingAccessor;
use crate::subscription::SubscriptionId;
use crate::tile::detail::DetailViewController;
use crate::tile::strings::TileStrings;
use crate::tile::types::{
    IconVariant, SummaryRenderState, TileHost, METRICS_CATEGORY_TILE, SETTINGS_TARGET,
};
use std::sync::{Arc, Mutex, Weak};

/// Mutable control state behind the lock.
#[derive(Default)]
struct ControlInner {
    listening: bool,
    setting_sub: Option<SubscriptionId>,
    profile_sub: Option<SubscriptionId>,
    lock_sub: Option<SubscriptionId>,
    state: SummaryRenderState,
}

/// The quick-panel profile control.
///
/// Orchestrates the collaborators into a render-ready summary state and
/// drives the detail view's list model. While listening it reacts to
/// setting and profile notifications; lock-state changes are observed
/// for the control's whole lifetime. Every reaction is a full
/// recomputation from current collaborator state, so duplicate or
/// out-of-order notifications are harmless.
pub struct ProfileControl {
    settings: Arc<dyn SettingAccessor>,
    profiles: Arc<dyn ProfileSource>,
    lock_gate: Arc<dyn LockGate>,
    host: Arc<dyn TileHost>,
    strings: TileStrings,
    detail: Arc<DetailViewController>,
    self_ref: Weak<ProfileControl>,
    inner: Mutex<ControlInner>,
}

impl ProfileControl {
    /// Create the control with the default English strings.
    pub fn new(
        settings: Arc<dyn SettingAccessor>,
        profiles: Arc<dyn ProfileSource>,
        lock_gate: Arc<dyn LockGate>,
        host: Arc<dyn TileHost>,
    ) -> Arc<Self> {
        Self::with_strings(settings, profiles, lock_gate, host, TileStrings::default())
    }

    /// Create the control with custom strings.
    pub fn with_strings(
        settings: Arc<dyn SettingAccessor>,
        profiles: Arc<dyn ProfileSource>,
        lock_gate: Arc<dyn LockGate>,
        host: Arc<dyn TileHost>,
        strings: TileStrings,
    ) -> Arc<Self> {
        let detail = Arc::new(DetailViewController::new(
            settings.clone(),
            profiles.clone(),
            host.clone(),
            strings.clone(),
        ));
        let control = Arc::new_cyclic(|weak: &Weak<Self>| Self {
            settings,
            profiles,
            lock_gate,
            host,
            strings,
            detail,
            self_ref: weak.clone(),
            inner: Mutex::new(ControlInner::default()),
        });

        // Lock gating applies for the control's whole lifetime,
        // independent of the listening state.
        let weak = control.self_ref.clone();
        let lock_sub = control.lock_gate.subscribe(Arc::new(move || {
            if let Some(control) = weak.upgrade() {
                control.on_lock_state_changed();
            }
        }));
        control.inner.lock().unwrap().lock_sub = Some(lock_sub);

        tracing::debug!("Profile control created");
        control
    }

    /// Enter or leave the listening state.
    ///
    /// Idempotent for no-op transitions. Entering subscribes to the
    /// setting and profile sources and immediately refreshes; leaving
    /// unsubscribes from both without a further refresh.
    pub fn set_listening(&self, listening: bool) {
        {
            let mut inner = self.inner.lock().unwrap();
            if inner.listening == listening {
                return;
            }
            inner.listening = listening;

            // Collaborator subscribe/unsubscribe never dispatch
            // callbacks, so the guard stays held and the pairing
            // stays atomic.
            if listening {
                let weak = self.self_ref.clone();
                inner.setting_sub = Some(self.settings.subscribe(Arc::new(move || {
                    if let Some(control) = weak.upgrade() {
                        control.on_setting_changed();
                    }
                })));
                let weak = self.self_ref.clone();
                inner.profile_sub = Some(self.profiles.subscribe(Arc::new(move || {
                    if let Some(control) = weak.upgrade() {
                        control.on_profiles_changed();
                    }
                })));
            } else {
                if let Some(sub) = inner.setting_sub.take() {
                    self.settings.unsubscribe(sub);
                }
                if let Some(sub) = inner.profile_sub.take() {
                    self.profiles.unsubscribe(sub);
                }
            }
        }

        if listening {
            tracing::debug!("Listening started");
            self.refresh();
        } else {
            tracing::debug!("Listening stopped");
        }
    }

    /// Recompute the summary render state and push it to the host.
    ///
    /// Pure recomputation from current collaborator state; safe to call
    /// redundantly.
    pub fn refresh(&self) {
        let state = self.compute_render_state();
        {
            let mut inner = self.inner.lock().unwrap();
            inner.state = state.clone();
        }
        self.host.notify_render_state_changed(&state);
    }

    fn compute_render_state(&self) -> SummaryRenderState {
        let interaction_allowed = !(self.lock_gate.is_showing() && self.lock_gate.is_secure());

        if self.settings.get() {
            let label = self
                .profiles
                .active_profile()
                .map(|p| p.name)
                .unwrap_or_else(|| self.strings.tile_label.clone());
            SummaryRenderState {
                visible: true,
                interaction_allowed,
                icon: IconVariant::On,
                description: self.strings.summary_description(&label),
                label,
            }
        } else {
            SummaryRenderState {
                visible: true,
                interaction_allowed,
                icon: IconVariant::Off,
                label: self.strings.off_label.clone(),
                description: self.strings.off_description.clone(),
            }
        }
    }

    fn on_setting_changed(&self) {
        tracing::debug!("Setting change observed");
        self.refresh();
        self.detail.rebuild(self.settings.get());
    }

    fn on_profiles_changed(&self) {
        tracing::debug!("Profile change observed");
        self.refresh();
        self.detail.rebuild(self.settings.get());
    }

    /// React to a lock-state change: the summary is refreshed, the
    /// detail list is left alone.
    pub fn on_lock_state_changed(&self) {
        self.refresh();
    }

    /// Tile tap: request the detail view.
    pub fn handle_click(&self) {
        tracing::debug!("Tile clicked");
        self.host.open_detail_view();
    }

    /// Tile long-press: request the settings surface, bypassing the lock.
    pub fn handle_long_click(&self) {
        tracing::debug!("Tile long-clicked");
        self.host.navigate_to_settings(true);
    }

    /// Sentence announcing the current state after a summary change.
    pub fn compose_change_announcement(&self) -> String {
        if self.settings.get() {
            let label = self
                .profiles
                .active_profile()
                .map(|p| p.name)
                .unwrap_or_else(|| self.strings.tile_label.clone());
            self.strings.changed_announcement(&label)
        } else {
            self.strings.off_changed_announcement.clone()
        }
    }

    /// Static feature name.
    pub fn tile_label(&self) -> &str {
        &self.strings.tile_label
    }

    /// Routing token for the settings surface opened by long-press.
    pub fn settings_target(&self) -> &'static str {
        SETTINGS_TARGET
    }

    /// Instrumentation category for tile interactions.
    pub fn metrics_category(&self) -> &'static str {
        METRICS_CATEGORY_TILE
    }

    /// Last computed summary render state.
    pub fn render_state(&self) -> SummaryRenderState {
        self.inner.lock().unwrap().state.clone()
    }

    /// Whether the control is currently listening.
    pub fn is_listening(&self) -> bool {
        self.inner.lock().unwrap().listening
    }

    /// The controller backing the expanded detail view.
    pub fn detail_controller(&self) -> Arc<DetailViewController> {
        self.detail.clone()
    }

    /// Terminal cleanup: stop listening, drop the detail model, and
    /// unsubscribe from the lock gate. Idempotent.
    pub fn destroy(&self) {
        self.set_listening(false);
        self.detail.teardown();

        let lock_sub = self.inner.lock().unwrap().lock_sub.take();
        if let Some(sub) = lock_sub {
            self.lock_gate.unsubscribe(sub);
            tracing::debug!("Profile control destroyed");
        }
    }
}

impl Drop for ProfileControl {
    fn drop(&mut self) {
        self.destroy();
    }
}
