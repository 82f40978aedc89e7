//! Integration tests for the listening lifecycle and summary state.
//!
//! Drives the control the way a quick-panel host would: construct with
//! live collaborators, toggle listening around external changes, and
//! read back the pushed render states.

use profiles_tile::tile::types::{IconVariant, ListSnapshot, SummaryRenderState, TileHost};
use profiles_tile::{
    DefaultLockGate, DefaultSettingAccessor, ProfileControl, ProfileManager, ProfileSource,
    SettingAccessor,
};
use std::sync::{Arc, Mutex};

/// Panel stand-in that records every pushed render state.
#[derive(Default)]
struct PanelHost {
    render_states: Mutex<Vec<SummaryRenderState>>,
}

impl PanelHost {
    fn last_state(&self) -> SummaryRenderState {
        self.render_states
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no render state pushed yet")
    }

    fn state_count(&self) -> usize {
        self.render_states.lock().unwrap().len()
    }
}

impl TileHost for PanelHost {
    fn open_detail_view(&self) {}
    fn navigate_to_settings(&self, _bypass_lock: bool) {}

    fn notify_render_state_changed(&self, state: &SummaryRenderState) {
        self.render_states.lock().unwrap().push(state.clone());
    }

    fn notify_list_changed(&self, _snapshot: &ListSnapshot) {}
    fn notify_toggle_changed(&self, _enabled: bool) {}
}

struct Panel {
    settings: Arc<DefaultSettingAccessor>,
    profiles: Arc<ProfileManager>,
    lock: Arc<DefaultLockGate>,
    host: Arc<PanelHost>,
    control: Arc<ProfileControl>,
}

fn panel() -> Panel {
    let settings = Arc::new(DefaultSettingAccessor::new());
    let profiles = Arc::new(ProfileManager::new());
    let lock = Arc::new(DefaultLockGate::new());
    let host = Arc::new(PanelHost::default());
    let control = ProfileControl::new(
        settings.clone(),
        profiles.clone(),
        lock.clone(),
        host.clone(),
    );
    Panel {
        settings,
        profiles,
        lock,
        host,
        control,
    }
}

#[test]
fn test_lifecycle_converges_on_external_changes() {
    let panel = panel();
    let home = panel.profiles.add_profile("Home").unwrap();
    let work = panel.profiles.add_profile("Work").unwrap();
    panel.profiles.set_active(home.id).unwrap();

    // Listening starts with an immediate refresh.
    panel.control.set_listening(true);
    let state = panel.host.last_state();
    assert_eq!(state.icon, IconVariant::On);
    assert_eq!(state.label, "Home");

    // Selection change arrives through the subscription.
    panel.profiles.set_active(work.id).unwrap();
    assert_eq!(panel.host.last_state().label, "Work");

    // Metadata update of the active profile is reflected too.
    panel.profiles.rename_profile(work.id, "Office").unwrap();
    assert_eq!(panel.host.last_state().label, "Office");

    // External toggle writes flow through the setting subscription.
    panel.settings.set(false);
    let state = panel.host.last_state();
    assert_eq!(state.icon, IconVariant::Off);
    assert_eq!(state.label, "Profiles off");

    panel.settings.set(true);
    assert_eq!(panel.host.last_state().label, "Office");
}

#[test]
fn test_not_listening_keeps_stale_state_until_relisten() {
    let panel = panel();
    let home = panel.profiles.add_profile("Home").unwrap();
    panel.profiles.set_active(home.id).unwrap();

    panel.control.set_listening(true);
    assert_eq!(panel.control.render_state().label, "Home");

    panel.control.set_listening(false);
    let baseline = panel.host.state_count();

    // Changes while not listening are not observed.
    panel.settings.set(false);
    assert_eq!(panel.host.state_count(), baseline);
    assert_eq!(panel.control.render_state().label, "Home");

    // Relistening refreshes immediately and catches up.
    panel.control.set_listening(true);
    assert_eq!(panel.host.state_count(), baseline + 1);
    assert_eq!(panel.host.last_state().icon, IconVariant::Off);
}

#[test]
fn test_removing_active_profile_falls_back_to_feature_label() {
    let panel = panel();
    let home = panel.profiles.add_profile("Home").unwrap();
    panel.profiles.set_active(home.id).unwrap();
    panel.control.set_listening(true);
    assert_eq!(panel.host.last_state().label, "Home");

    panel.profiles.remove_profile(home.id).unwrap();
    let state = panel.host.last_state();
    assert_eq!(state.icon, IconVariant::On);
    assert_eq!(state.label, "Profiles");
}

#[test]
fn test_lock_gating_end_to_end() {
    let panel = panel();
    panel.control.set_listening(true);
    assert!(panel.host.last_state().interaction_allowed);

    // Showing alone is not enough.
    panel.lock.set_lock_state(true, false);
    assert!(panel.host.last_state().interaction_allowed);

    // Showing and secure together gate interaction.
    panel.lock.set_lock_state(true, true);
    assert!(!panel.host.last_state().interaction_allowed);

    // Unlocking restores it.
    panel.lock.set_lock_state(false, true);
    assert!(panel.host.last_state().interaction_allowed);
}

#[test]
fn test_lock_changes_observed_even_while_not_listening() {
    let panel = panel();
    panel.lock.set_lock_state(true, true);
    assert!(!panel.control.render_state().interaction_allowed);
    assert!(panel.control.render_state().visible);
}

#[test]
fn test_duplicate_notifications_are_harmless() {
    let panel = panel();
    let home = panel.profiles.add_profile("Home").unwrap();
    panel.profiles.set_active(home.id).unwrap();
    panel.control.set_listening(true);
    let reference = panel.host.last_state();

    // Rewriting the same value still notifies; each recomputation
    // lands on the same state.
    panel.settings.set(true);
    panel.settings.set(true);
    panel.profiles.set_active(home.id).unwrap();

    let states = panel.host.render_states.lock().unwrap();
    assert_eq!(states.len(), 4);
    for state in states.iter() {
        assert_eq!(state, &reference);
    }
}

#[test]
fn test_announcements_track_current_state() {
    let panel = panel();
    let work = panel.profiles.add_profile("Work").unwrap();
    panel.profiles.set_active(work.id).unwrap();
    panel.control.set_listening(true);

    assert_eq!(
        panel.control.compose_change_announcement(),
        "Profiles changed to Work."
    );

    panel.settings.set(false);
    assert_eq!(
        panel.control.compose_change_announcement(),
        "Profiles turned off."
    );
}

#[test]
fn test_destroyed_control_ignores_everything() {
    let panel = panel();
    panel.profiles.add_profile("Home").unwrap();
    panel.control.set_listening(true);

    panel.control.destroy();
    let baseline = panel.host.state_count();

    panel.settings.set(false);
    panel.profiles.add_profile("Work").unwrap();
    panel.lock.set_lock_state(true, true);

    assert_eq!(panel.host.state_count(), baseline);
    assert_eq!(panel.settings.observer_count(), 0);
    assert_eq!(panel.profiles.observer_count(), 0);
    assert_eq!(panel.lock.observer_count(), 0);
}
