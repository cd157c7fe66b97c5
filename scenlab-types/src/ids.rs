//! Identifier types used throughout the ScenLab core.
//!
//! Snippet ids are the stable keys linking generated content fragments to
//! the map labels that carry them. Piece handles are opaque references
//! into whatever state store the caller wires in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved owner segment for pass-through snippets that reconciliation
/// must never touch.
pub const EXTRAS_OWNER: &str = "extras";

/// Unique identifier for a snippet, e.g. `scenario` or `german/ob_setup_1.1`.
///
/// An id may carry an owner prefix (the segment before the first `/`)
/// naming the player the label belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnippetId(String);

impl SnippetId {
    /// Creates a snippet ID from a raw string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the owner segment before the first `/`, if the id has one.
    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        self.0.split_once('/').map(|(owner, _)| owner)
    }

    /// Returns the id with its owner segment stripped.
    ///
    /// Ids without an owner prefix come back unchanged.
    #[must_use]
    pub fn without_owner(&self) -> Self {
        match self.0.split_once('/') {
            Some((_, rest)) => Self(rest.to_string()),
            None => self.clone(),
        }
    }

    /// True for ids under the reserved `extras/` namespace.
    #[must_use]
    pub fn is_extras(&self) -> bool {
        self.owner() == Some(EXTRAS_OWNER)
    }
}

impl fmt::Display for SnippetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SnippetId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SnippetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Opaque handle to a piece placed inside the state store.
///
/// Handles are minted by the store and mean nothing outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceHandle(u64);

impl PieceHandle {
    /// Creates a handle from the store's raw key.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the store's raw key.
    #[must_use]
    pub const fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PieceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "piece#{}", self.0)
    }
}
