//! Legacy label matching.
//!
//! Labels placed before ids were embedded carry no marker, so the only
//! link back to a snippet is the raw text the user typed. A legacy label
//! matches a snippet when every raw-content phrase occurs somewhere in
//! the label's two content fields. Anything other than exactly one
//! matching label is no match at all: with several candidates there is
//! no safe pick, and the snippet falls through to creation instead.

use crate::label::LegacyLabel;
use crate::marker::{LABEL1_FIELD, LABEL2_FIELD};
use scenlab_types::Snippet;

/// A legacy label that matched a snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyMatch {
    /// Position of the label in the scanned list.
    pub index: usize,
    /// The content field the phrases were found in. When phrases span
    /// both fields, the field that matched the last phrase wins.
    pub field_index: usize,
}

/// Scans `labels` for the single legacy label containing every one of
/// the snippet's raw-content phrases.
///
/// Snippets with no phrases never match: unconditionally emitted
/// content would capture an arbitrary label.
#[must_use]
pub fn find_legacy_match(snippet: &Snippet, labels: &[LegacyLabel]) -> Option<LegacyMatch> {
    if snippet.raw_content.is_empty() {
        return None;
    }

    let mut matches: Vec<LegacyMatch> = Vec::new();
    for (index, label) in labels.iter().enumerate() {
        if let Some(field_index) = contains_all_phrases(label, &snippet.raw_content) {
            matches.push(LegacyMatch { index, field_index });
        }
    }

    match matches.as_slice() {
        [only] => Some(*only),
        _ => None,
    }
}

/// Checks whether the label contains every phrase, returning the field
/// the last phrase was found in.
fn contains_all_phrases(label: &LegacyLabel, phrases: &[String]) -> Option<usize> {
    let mut matched_field = None;
    for phrase in phrases {
        // snippet text arrives with newlines; label fields never do
        let phrase = phrase.replace('\n', " ");
        if field_contains(label, LABEL1_FIELD, &phrase) {
            matched_field = Some(LABEL1_FIELD);
        } else if field_contains(label, LABEL2_FIELD, &phrase) {
            matched_field = Some(LABEL2_FIELD);
        } else {
            return None;
        }
    }
    matched_field
}

fn field_contains(label: &LegacyLabel, index: usize, phrase: &str) -> bool {
    label.field(index).is_some_and(|text| text.contains(phrase))
}
