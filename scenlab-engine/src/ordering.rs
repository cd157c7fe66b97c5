//! Label creation ordering.
//!
//! New labels are created in a configured order so related labels pack
//! next to each other. An order token is either an exact id or a
//! `stem*` wildcard collecting every pending id with that stem;
//! wildcard groups sort by the number after the last `.` in the id, so
//! `ob_note_1.10` comes after `ob_note_1.2`. Ids no token claims are
//! appended in the order the snippet source supplied them.

use scenlab_types::SnippetId;

/// Orders `pending` ids for creation according to `tokens`.
///
/// Every pending id appears in the result exactly once.
#[must_use]
pub fn creation_order(tokens: &[String], pending: &[SnippetId]) -> Vec<SnippetId> {
    let mut remaining: Vec<SnippetId> = pending.to_vec();
    let mut ordered = Vec::with_capacity(pending.len());

    for token in tokens {
        if let Some(stem) = token.strip_suffix('*') {
            let mut group = Vec::new();
            remaining.retain(|id| {
                if id.as_str().starts_with(stem) {
                    group.push(id.clone());
                    false
                } else {
                    true
                }
            });
            group.sort_by_key(|id| numeric_suffix(id.as_str()));
            ordered.extend(group);
        } else if let Some(found) = remaining.iter().position(|id| id.as_str() == token) {
            ordered.push(remaining.remove(found));
        }
    }

    ordered.extend(remaining);
    ordered
}

/// The number after the last `.` in an id, or 0 when there is none.
fn numeric_suffix(id: &str) -> u32 {
    id.rsplit_once('.')
        .and_then(|(_, suffix)| suffix.parse().ok())
        .unwrap_or(0)
}
