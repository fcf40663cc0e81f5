//! End-to-end flows for the accent picker.
//!
//! These tests drive the picker the way a host surface would: containers and
//! a settings panel appear, the picker mounts, users change radios, and new
//! containers show up after startup and get bound on the next pump.

use accentuate::{
    AccentPicker, JsonFileStore, MemoryStore, PanelItem, DEFAULT_ACCENT,
};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn stored_accent_applies_across_all_pickers_at_mount() {
    let mut picker = AccentPicker::new(MemoryStore::with_value("tesla"));
    let header = picker.document_mut().add_container(Some("header"));
    let sidebar = picker.document_mut().add_container(None);
    picker.mount();

    assert_eq!(picker.document().accent_marker(), Some("tesla"));
    for id in [header, sidebar] {
        let container = picker.document().container(id).unwrap();
        let tesla = container.option("tesla").unwrap();
        assert!(tesla.checked);
        assert!(tesla.active);
        for option in container.options().iter().filter(|o| o.accent != "tesla") {
            assert!(!option.checked);
            assert!(!option.active);
        }
    }
}

#[test]
fn unknown_stored_accent_resolves_to_default_everywhere() {
    let mut picker = AccentPicker::new(MemoryStore::with_value("unknown-brand"));
    let container = picker.document_mut().add_container(None);
    picker.mount();

    assert_eq!(picker.document().accent_marker(), Some(DEFAULT_ACCENT));
    let checked = picker
        .document()
        .container(container)
        .unwrap()
        .checked_option()
        .unwrap()
        .accent
        .clone();
    assert_eq!(checked, DEFAULT_ACCENT);
}

#[test]
fn late_container_is_bound_by_pump_with_stored_selection() {
    let mut picker = AccentPicker::new(MemoryStore::with_value("spotify"));
    picker.document_mut().add_container(None);
    picker.mount();

    // A new picker shows up after initial load.
    let late = picker.document_mut().add_container(None);
    assert!(!picker.document().container(late).unwrap().is_bound());

    picker.pump();
    let container = picker.document().container(late).unwrap();
    assert!(container.is_bound());
    assert!(container.option("spotify").unwrap().checked);
}

#[test]
fn pump_batches_multiple_insertions_into_one_scan() {
    let mut picker = AccentPicker::new(MemoryStore::new());
    picker.mount();

    let a = picker.document_mut().add_container(None);
    let b = picker.document_mut().add_container(None);
    let c = picker.document_mut().add_container(None);
    picker.pump();

    for id in [a, b, c] {
        assert!(picker.document().container(id).unwrap().is_bound());
    }

    // A quiet pump leaves everything untouched.
    let before: Vec<_> = [a, b, c]
        .iter()
        .map(|&id| picker.document().container(id).unwrap().clone())
        .collect();
    picker.pump();
    for (id, snapshot) in [a, b, c].into_iter().zip(before) {
        let container = picker.document().container(id).unwrap();
        assert_eq!(container.group_name(), snapshot.group_name());
        assert_eq!(container.options(), snapshot.options());
    }
}

#[test]
fn settings_panel_gets_picker_before_first_divider() {
    let mut picker = AccentPicker::new(MemoryStore::new());
    picker.document_mut().set_panel(vec![
        PanelItem::Block("notifications".to_string()),
        PanelItem::Divider,
        PanelItem::Block("privacy".to_string()),
    ]);
    picker.mount();

    let panel = picker.document().panel().unwrap();
    assert!(matches!(panel.items()[0], PanelItem::Block(_)));
    let PanelItem::Picker(id) = &panel.items()[1] else {
        panic!("expected picker before the first divider, got {:?}", panel.items());
    };
    assert!(matches!(panel.items()[2], PanelItem::Divider));
    let container = picker.document().container(*id).unwrap();
    assert!(container.is_bound());
    assert!(container.shell_markup().unwrap().contains("System accent"));
}

#[test]
fn settings_panel_is_not_augmented_twice() {
    let mut picker = AccentPicker::new(MemoryStore::new());
    picker.document_mut().set_panel(vec![PanelItem::Divider]);
    picker.mount();
    picker.pump();
    picker.pump();

    let pickers = picker
        .document()
        .panel()
        .unwrap()
        .items()
        .iter()
        .filter(|item| matches!(item, PanelItem::Picker(_)))
        .count();
    assert_eq!(pickers, 1);
    assert_eq!(picker.document().container_count(), 1);
}

#[test]
fn panel_without_divider_appends_picker() {
    let mut picker = AccentPicker::new(MemoryStore::new());
    picker
        .document_mut()
        .set_panel(vec![PanelItem::Block("about".to_string())]);
    picker.mount();

    let panel = picker.document().panel().unwrap();
    assert!(matches!(panel.items().last(), Some(PanelItem::Picker(_))));
}

#[test]
fn selection_change_broadcasts_and_persists() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut picker = AccentPicker::new(MemoryStore::new());
    let sink = Rc::clone(&seen);
    picker.on_accent_change(move |accent| sink.borrow_mut().push(accent.to_string()));

    let container = picker.document_mut().add_container(None);
    picker.mount();
    picker.radio_changed(container, "amazon");

    assert_eq!(seen.borrow().as_slice(), ["amazon"]);
    assert_eq!(picker.stored_accent(), "amazon");
    assert_eq!(picker.document().accent_marker(), Some("amazon"));
}

#[test]
fn picker_stays_functional_when_storage_is_unavailable() {
    let store = MemoryStore::new().fail_reads(true).fail_writes(true);
    let mut picker = AccentPicker::new(store);
    let container = picker.document_mut().add_container(None);
    picker.mount();

    // Degrades to the default, then keeps tracking user selections.
    assert_eq!(picker.document().accent_marker(), Some(DEFAULT_ACCENT));
    picker.radio_changed(container, "google");
    assert_eq!(picker.document().accent_marker(), Some("google"));
    let checked = picker
        .document()
        .container(container)
        .unwrap()
        .checked_option()
        .unwrap()
        .accent
        .clone();
    assert_eq!(checked, "google");
}

#[test]
fn selection_survives_reload_through_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("accent.json");

    let mut first = AccentPicker::new(JsonFileStore::new(&path));
    let container = first.document_mut().add_container(None);
    first.mount();
    first.radio_changed(container, "samsung");

    // Fresh picker over the same store, as after a page reload.
    let mut second = AccentPicker::new(JsonFileStore::new(&path));
    let container = second.document_mut().add_container(None);
    second.mount();

    assert_eq!(second.document().accent_marker(), Some("samsung"));
    assert!(second
        .document()
        .container(container)
        .unwrap()
        .option("samsung")
        .unwrap()
        .checked);
}
