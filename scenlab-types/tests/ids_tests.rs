use scenlab_types::{EXTRAS_OWNER, PieceHandle, SnippetId};

// ── SnippetId ─────────────────────────────────────────────────────

#[test]
fn bare_id_has_no_owner() {
    let id = SnippetId::new("scenario");
    assert_eq!(id.owner(), None);
    assert_eq!(id.without_owner(), id);
}

#[test]
fn prefixed_id_splits_at_first_slash() {
    let id = SnippetId::new("german/ob_setup_1.1");
    assert_eq!(id.owner(), Some("german"));
    assert_eq!(id.without_owner().as_str(), "ob_setup_1.1");
}

#[test]
fn only_first_slash_marks_the_owner() {
    let id = SnippetId::new("german/ob/setup");
    assert_eq!(id.owner(), Some("german"));
    assert_eq!(id.without_owner().as_str(), "ob/setup");
}

#[test]
fn extras_prefix_is_recognized() {
    assert!(SnippetId::new("extras/blank-space").is_extras());
    assert!(!SnippetId::new("extras").is_extras());
    assert!(!SnippetId::new("german/extras").is_extras());
    assert_eq!(SnippetId::new("extras/x").owner(), Some(EXTRAS_OWNER));
}

#[test]
fn display_matches_raw_string() {
    let id = SnippetId::new("ob_note_2.3");
    assert_eq!(id.to_string(), "ob_note_2.3");
}

#[test]
fn serde_is_transparent() {
    let id = SnippetId::new("victory_conditions");
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"victory_conditions\"");
    let parsed: SnippetId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn hash_eq() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(SnippetId::new("ssr"));
    set.insert(SnippetId::new("ssr"));
    assert_eq!(set.len(), 1);
}

// ── PieceHandle ───────────────────────────────────────────────────

#[test]
fn piece_handle_roundtrips_raw_key() {
    let handle = PieceHandle::new(42);
    assert_eq!(handle.raw(), 42);
    assert_eq!(handle, PieceHandle::new(42));
    assert_ne!(handle, PieceHandle::new(43));
}

#[test]
fn piece_handle_display() {
    assert_eq!(PieceHandle::new(7).to_string(), "piece#7");
}
