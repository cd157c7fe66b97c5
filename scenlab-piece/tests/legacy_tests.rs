use scenlab_piece::{FieldedState, LegacyLabel, LegacyMatch, find_legacy_match};
use scenlab_types::{PieceHandle, Snippet};

/// Builds a legacy label whose two content fields hold the given text.
fn make_label(handle: u64, label1: &str, label2: &str) -> LegacyLabel {
    let state = FieldedState::parse(&format!(
        "piece;;;\\\tjoe\\\t\\\t{label1}\\\t{label2}\\\tMap0;40;40"
    ));
    LegacyLabel::new(PieceHandle::new(handle), state)
}

fn make_snippet(phrases: &[&str]) -> Snippet {
    Snippet::new("scenario", "<content>").with_raw_content(phrases.to_vec())
}

// ── matching ──────────────────────────────────────────────────────

#[test]
fn matches_when_every_phrase_is_present() {
    let labels = vec![make_label(1, "Battle of Foo (1944)", "setup notes")];
    let snippet = make_snippet(&["Battle of Foo", "setup"]);
    assert_eq!(
        find_legacy_match(&snippet, &labels),
        Some(LegacyMatch {
            index: 0,
            field_index: 3,
        })
    );
}

#[test]
fn last_phrase_decides_the_content_field() {
    let labels = vec![make_label(1, "Battle of Foo", "2 Feb 1944")];
    let snippet = make_snippet(&["Battle of Foo", "Feb 1944"]);
    assert_eq!(
        find_legacy_match(&snippet, &labels),
        Some(LegacyMatch {
            index: 0,
            field_index: 4,
        })
    );
}

#[test]
fn first_field_is_checked_before_the_second() {
    let labels = vec![make_label(1, "same text", "same text")];
    let snippet = make_snippet(&["same text"]);
    assert_eq!(
        find_legacy_match(&snippet, &labels),
        Some(LegacyMatch {
            index: 0,
            field_index: 3,
        })
    );
}

#[test]
fn the_matched_field_comes_from_the_matching_label() {
    // the second label carries the first phrase in its second field but
    // not the rest, so only the first label matches
    let labels = vec![
        make_label(1, "assemble at the bridge by dawn", ""),
        make_label(2, "", "assemble at the bridge"),
    ];
    let snippet = make_snippet(&["assemble at the bridge", "by dawn"]);
    assert_eq!(
        find_legacy_match(&snippet, &labels),
        Some(LegacyMatch {
            index: 0,
            field_index: 3,
        })
    );
}

#[test]
fn no_match_when_any_phrase_is_missing() {
    let labels = vec![make_label(1, "Battle of Foo", "")];
    let snippet = make_snippet(&["Battle of Foo", "Vire river"]);
    assert_eq!(find_legacy_match(&snippet, &labels), None);
}

#[test]
fn phrases_with_newlines_match_flattened_label_text() {
    let labels = vec![make_label(1, "first line second line", "")];
    let snippet = make_snippet(&["first line\nsecond line"]);
    assert!(find_legacy_match(&snippet, &labels).is_some());
}

// ── the exactly-one rule ──────────────────────────────────────────

#[test]
fn two_matching_labels_is_ambiguous() {
    let labels = vec![
        make_label(1, "setup area: north", ""),
        make_label(2, "setup area: south", ""),
    ];
    let snippet = make_snippet(&["setup area"]);
    assert_eq!(find_legacy_match(&snippet, &labels), None);
}

#[test]
fn the_single_match_is_picked_out_of_many_labels() {
    let labels = vec![
        make_label(1, "turn track", ""),
        make_label(2, "Battle of Foo", ""),
        make_label(3, "reinforcements", ""),
    ];
    let snippet = make_snippet(&["Battle of Foo"]);
    assert_eq!(
        find_legacy_match(&snippet, &labels).map(|m| m.index),
        Some(1)
    );
}

#[test]
fn empty_raw_content_never_matches() {
    let labels = vec![make_label(1, "anything at all", "")];
    let snippet = Snippet::new("scenario", "<content>");
    assert!(snippet.raw_content.is_empty());
    assert_eq!(find_legacy_match(&snippet, &labels), None);
}

#[test]
fn no_labels_means_no_match() {
    let snippet = make_snippet(&["Battle of Foo"]);
    assert_eq!(find_legacy_match(&snippet, &[]), None);
}

#[test]
fn short_states_are_skipped_without_panicking() {
    let label = LegacyLabel::new(PieceHandle::new(1), FieldedState::parse("stackable"));
    let snippet = make_snippet(&["anything"]);
    assert_eq!(find_legacy_match(&snippet, &[label]), None);
}
