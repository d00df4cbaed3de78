mod common;

use std::time::Duration;

use common::utils::{page, text_input};
use propace_autofill::detect::cache::{
    FieldCache, MAX_CACHED_SCANS, structure_fingerprint,
};

// =========================================================================
// Structural fingerprint
// =========================================================================

#[test]
fn fingerprint_is_deterministic_for_an_unchanged_tree() {
    let root = page(vec![text_input("full_name"), text_input("email")]);
    assert_eq!(structure_fingerprint(&root), structure_fingerprint(&root));
}

#[test]
fn fingerprint_changes_when_structure_changes() {
    let root = page(vec![text_input("full_name")]);
    let before = structure_fingerprint(&root);

    root.borrow_mut().children.push(text_input("email"));

    assert_ne!(before, structure_fingerprint(&root));
}

#[test]
fn value_only_edits_go_unnoticed() {
    // Accepted false negative: the signature tracks structure and length,
    // not field values.
    let input = text_input("full_name");
    let root = page(vec![input.clone()]);
    let before = structure_fingerprint(&root);

    input.borrow_mut().value = "edited".to_string();

    assert_eq!(before, structure_fingerprint(&root));
}

// =========================================================================
// Cache validity, clearing, and the entry bound
// =========================================================================

#[test]
fn get_answers_only_for_the_stored_fingerprint() {
    let mut cache = FieldCache::new();
    cache.set("fp-a".to_string(), vec![]);

    assert!(cache.is_valid("fp-a"));
    assert!(cache.get("fp-a").is_some());
    assert!(!cache.is_valid("fp-b"));
    assert!(cache.get("fp-b").is_none(), "Unknown fingerprint misses");
}

#[test]
fn zero_ttl_entries_are_never_served() {
    let mut cache = FieldCache::with_ttl(Duration::ZERO);
    cache.set("fp".to_string(), vec![]);

    assert!(!cache.is_valid("fp"));
    assert!(cache.get("fp").is_none(), "Expired entries read as misses");
    assert_eq!(cache.entry_count(), 1, "get has no eviction side effect");
}

#[test]
fn clear_resets_to_empty() {
    let mut cache = FieldCache::new();
    cache.set("fp".to_string(), vec![]);
    cache.clear();

    assert_eq!(cache.entry_count(), 0);
    assert!(cache.get("fp").is_none());
}

#[test]
fn crossing_the_entry_bound_clears_everything_first() {
    let mut cache = FieldCache::new();

    for i in 0..=MAX_CACHED_SCANS {
        cache.set(format!("fp-{}", i), vec![]);
    }
    assert_eq!(cache.entry_count(), MAX_CACHED_SCANS + 1);

    // One more store is over the bound: the cache empties, then stores.
    cache.set("fp-final".to_string(), vec![]);
    assert_eq!(cache.entry_count(), 1);
    assert!(cache.get("fp-final").is_some());
    assert!(cache.get("fp-0").is_none());
}
