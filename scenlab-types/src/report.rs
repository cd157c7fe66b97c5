//! Outcome report for one reconciliation run.
//!
//! Every snippet and every pre-existing managed label ends up in exactly
//! one bucket. Callers use the report to decide whether the scenario
//! needs saving and to tell the user what happened.

use crate::{MapPoint, SnippetId};
use serde::{Deserialize, Serialize};

/// One label the run created, updated, deleted, left alone, or failed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// The snippet id the label belongs to.
    pub id: SnippetId,
    /// Top-left placement position, present for created labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<MapPoint>,
    /// Human-readable failure caption, present for failed operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Underlying failure message from the store, present for failed
    /// operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ReportEntry {
    /// Creates an entry carrying only the snippet id.
    #[must_use]
    pub fn new(id: SnippetId) -> Self {
        Self {
            id,
            position: None,
            caption: None,
            message: None,
        }
    }

    /// Creates an entry for a label placed at `position`.
    #[must_use]
    pub fn placed(id: SnippetId, position: MapPoint) -> Self {
        Self {
            id,
            position: Some(position),
            caption: None,
            message: None,
        }
    }

    /// Creates an entry for a failed operation.
    #[must_use]
    pub fn failed(id: SnippetId, caption: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id,
            position: None,
            caption: Some(caption.into()),
            message: Some(message.into()),
        }
    }
}

/// Everything one reconciliation run did, bucketed by outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelReport {
    /// Labels created for snippets nothing matched.
    pub created: Vec<ReportEntry>,
    /// Labels whose content was rewritten.
    pub updated: Vec<ReportEntry>,
    /// Managed labels no snippet wanted any more.
    pub deleted: Vec<ReportEntry>,
    /// Labels whose content already matched.
    pub unchanged: Vec<ReportEntry>,
    /// Per-label operations the store refused.
    pub failed: Vec<ReportEntry>,
}

impl LabelReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the run changed the scenario: any bucket other than
    /// `unchanged` has entries. Failures count as modifications.
    #[must_use]
    pub fn was_modified(&self) -> bool {
        !(self.created.is_empty()
            && self.updated.is_empty()
            && self.deleted.is_empty()
            && self.failed.is_empty())
    }
}
