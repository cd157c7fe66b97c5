//! Managed-label markers.
//!
//! Labels under reconciliation embed their snippet id in an HTML comment
//! inside the label content, e.g. `<!-- vasl-templates:id scenario -->`.
//! The id runs to the first space after it. Only two fields of a piece
//! state can carry label content; a label with no marker in either is a
//! legacy label.

use crate::codec::FieldedState;
use regex_lite::Regex;
use scenlab_types::SnippetId;
use std::sync::OnceLock;

/// Field index of the first label line.
pub const LABEL1_FIELD: usize = 3;
/// Field index of the second label line.
pub const LABEL2_FIELD: usize = 4;

/// The two content-bearing fields, in match priority order.
pub const LABEL_FIELDS: [usize; 2] = [LABEL1_FIELD, LABEL2_FIELD];

fn marker_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // the trailing space is part of the marker
    RE.get_or_init(|| Regex::new(r"<!-- vasl-templates:id (.+?) ").expect("invalid marker pattern"))
}

/// Extracts the snippet id from a marker comment, if the text has one.
#[must_use]
pub fn marker_id(text: &str) -> Option<SnippetId> {
    marker_re()
        .captures(text)
        .map(|caps| SnippetId::new(&caps[1]))
}

/// How a piece state classifies against the marker convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelKind {
    /// Carries a marker: the embedded id plus the field holding it.
    Managed { id: SnippetId, field_index: usize },
    /// No marker in either content field.
    Legacy,
}

/// Classifies a piece state by marker presence.
///
/// The first label field wins when both carry a marker.
#[must_use]
pub fn classify(state: &FieldedState) -> LabelKind {
    for field_index in LABEL_FIELDS {
        if let Some(text) = state.field(field_index) {
            if let Some(id) = marker_id(text) {
                return LabelKind::Managed { id, field_index };
            }
        }
    }
    LabelKind::Legacy
}
