use std::rc::Rc;

use modalhost::{Alignment, HostConfig, OverlayEntry, OverlayHost, OverlayState};

fn entry(id: &str) -> OverlayEntry {
    OverlayEntry::new(Rc::new(OverlayState::new())).id(id)
}

// =============================================================================
// Registration
// =============================================================================

#[test]
fn test_new_host_is_empty() {
    let host = OverlayHost::new();
    assert!(host.is_empty());
    assert_eq!(host.len(), 0);
}

#[test]
fn test_add_preserves_insertion_order() {
    let mut host = OverlayHost::new();
    host.add(entry("a"));
    host.add(entry("b"));
    host.add(entry("c"));

    let ids: Vec<&str> = host.entries().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[test]
fn test_add_is_idempotent_on_duplicate_id() {
    let mut host = OverlayHost::new();
    host.add(entry("a").dismiss_on_back_press(false));
    host.add(entry("a").dismiss_on_back_press(true));

    assert_eq!(host.len(), 1);
    // The first registration wins; the duplicate is dropped.
    assert!(!host.entries()[0].dismiss_on_back_press);
}

#[test]
fn test_hidden_entry_stays_registered() {
    let mut host = OverlayHost::new();
    host.add(entry("a"));

    assert!(!host.entries()[0].is_visible());
    assert_eq!(host.len(), 1);
}

#[test]
fn test_generated_ids_are_unique() {
    let a = OverlayEntry::new(Rc::new(OverlayState::new()));
    let b = OverlayEntry::new(Rc::new(OverlayState::new()));
    assert_ne!(a.id, b.id);
}

// =============================================================================
// Removal
// =============================================================================

#[test]
fn test_remove_keeps_remaining_order() {
    let mut host = OverlayHost::new();
    host.add(entry("a"));
    host.add(entry("b"));
    host.add(entry("c"));

    host.remove("b");

    let ids: Vec<&str> = host.entries().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["a", "c"]);
}

#[test]
fn test_remove_absent_is_noop() {
    let mut host = OverlayHost::new();
    host.add(entry("a"));

    host.remove("missing");
    assert_eq!(host.len(), 1);
}

#[test]
fn test_readd_after_remove() {
    let mut host = OverlayHost::new();
    host.add(entry("a"));
    host.remove("a");
    host.add(entry("a"));

    assert_eq!(host.len(), 1);
}

#[test]
fn test_add_remove_sequences_keep_exact_set() {
    let mut host = OverlayHost::new();
    host.add(entry("a"));
    host.add(entry("b"));
    host.add(entry("a"));
    host.remove("a");
    host.add(entry("c"));
    host.remove("missing");

    let ids: Vec<&str> = host.entries().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["b", "c"]);
}

// =============================================================================
// Lookup
// =============================================================================

#[test]
fn test_get_by_id() {
    let mut host = OverlayHost::new();
    host.add(entry("a"));

    assert!(host.get("a").is_some());
    assert!(host.get("b").is_none());
}

// =============================================================================
// Entry & Config Defaults
// =============================================================================

#[test]
fn test_entry_defaults() {
    let entry = OverlayEntry::new(Rc::new(OverlayState::new()));
    assert!(entry.dismiss_on_back_press);
    assert!(entry.dismiss_on_click_outside);
}

#[test]
fn test_host_config_defaults() {
    let config = HostConfig::default();
    assert_eq!(config.content_alignment, Alignment::BottomCenter);
    assert_eq!(config.background_blur, 12.0);
    assert_eq!(config.background_scale_ratio, 0.95);
    assert!((config.background_tint.alpha() - 0.1).abs() < 1e-6);
}

#[test]
fn test_host_config_builder() {
    let config = HostConfig::new()
        .content_alignment(Alignment::Center)
        .background_blur(4.0)
        .background_scale_ratio(0.9);

    assert_eq!(config.content_alignment, Alignment::Center);
    assert_eq!(config.background_blur, 4.0);
    assert_eq!(config.background_scale_ratio, 0.9);
}
