//! Snippet inputs for one reconciliation run.
//!
//! A snippet is the generator's desired content for one map label. The
//! engine never produces snippets; the caller collects them from its
//! snippet source and hands the whole batch over in one call.

use crate::SnippetId;
use serde::{Deserialize, Serialize};

/// Default label width when the generator supplies no size.
pub const DEFAULT_LABEL_WIDTH: u32 = 300;
/// Default label height when the generator supplies no size.
pub const DEFAULT_LABEL_HEIGHT: u32 = 300;

/// A desired content fragment for one map label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// Stable identifier linking the snippet to its label.
    pub id: SnippetId,
    /// Rendered markup to store in the label. Newlines are collapsed to
    /// spaces at the point of insertion, never here.
    pub content: String,
    /// Plain-text phrases used only to recognize legacy labels.
    pub raw_content: Vec<String>,
    /// Label width in map pixels.
    pub width: u32,
    /// Label height in map pixels.
    pub height: u32,
    /// Whether a missing label may be created for this snippet.
    pub auto_create: bool,
    /// Target area name; empty means the default `general` area.
    pub label_area: String,
}

impl Snippet {
    /// Creates a snippet with the default footprint, auto-creation on,
    /// and no raw-content phrases.
    #[must_use]
    pub fn new(id: impl Into<SnippetId>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            raw_content: Vec::new(),
            width: DEFAULT_LABEL_WIDTH,
            height: DEFAULT_LABEL_HEIGHT,
            auto_create: true,
            label_area: String::new(),
        }
    }

    /// Sets the label footprint.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the phrases used to recognize legacy labels.
    #[must_use]
    pub fn with_raw_content<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.raw_content = phrases.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the target area name.
    #[must_use]
    pub fn with_label_area(mut self, area: impl Into<String>) -> Self {
        self.label_area = area.into();
        self
    }

    /// Enables or disables creation when no label matches.
    #[must_use]
    pub fn with_auto_create(mut self, auto_create: bool) -> Self {
        self.auto_create = auto_create;
        self
    }
}

/// Everything the snippet source supplies for one reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetBatch {
    /// Snippets in generator order. Labels left over for creation are
    /// created in this order unless the configured ordering claims them.
    pub snippets: Vec<Snippet>,
    /// The two active player identifiers, used to scope owner-prefixed
    /// snippets and labels.
    pub players: [String; 2],
    /// Strip volatile markup before deciding whether a label changed.
    pub fuzzy_label_compares: bool,
}

impl SnippetBatch {
    /// Creates a batch with strict content comparison.
    #[must_use]
    pub fn new(snippets: Vec<Snippet>, players: [String; 2]) -> Self {
        Self {
            snippets,
            players,
            fuzzy_label_compares: false,
        }
    }

    /// Enables fuzzy content comparison.
    #[must_use]
    pub fn with_fuzzy_compares(mut self) -> Self {
        self.fuzzy_label_compares = true;
        self
    }
}
