use super::*;

// =============================================================
// MemoryMedium
// =============================================================

#[test]
fn memory_medium_round_trips_items() {
    let medium = MemoryMedium::new();
    assert!(medium.is_empty());

    medium.set_item("k", "v1");
    medium.set_item("k", "v2");
    assert_eq!(medium.get_item("k").as_deref(), Some("v2"));
    assert_eq!(medium.len(), 1);

    medium.remove_item("k");
    assert!(medium.get_item("k").is_none());
}

#[test]
fn memory_medium_tracks_close() {
    let medium = MemoryMedium::new();
    assert!(!medium.is_closed());
    medium.close();
    assert!(medium.is_closed());
}

// =============================================================
// WebStorage (non-hydrate fallback)
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn web_storage_is_inert_without_browser() {
    let medium = WebStorage::Local;
    medium.set_item("k", "v");
    assert!(medium.get_item("k").is_none());
    medium.remove_item("k");
    medium.close();
}
