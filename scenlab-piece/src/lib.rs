//! Piece-state parsing and label classification for ScenLab.
//!
//! This crate provides the pieces the reconciliation engine works on:
//!
//! - [`FieldedState`] — lossless split of a piece state into fields and
//!   the separators between them
//! - [`classify`] / [`LabelKind`] — marker-based label classification
//! - [`ManagedLabel`] / [`LegacyLabel`] — parsed labels, with and
//!   without a resolved content field
//! - [`find_legacy_match`] — raw-content matching for pre-marker labels
//!
//! The codec guarantees that `parse` followed by `render` is the
//! identity on any input, and that replacing one field leaves every
//! other byte of the state untouched. Everything downstream relies on
//! those two properties to rewrite labels without corrupting the
//! surrounding piece state.

mod codec;
mod label;
mod legacy;
mod marker;

pub use codec::{FieldedState, printable};
pub use label::{LegacyLabel, ManagedLabel};
pub use legacy::{LegacyMatch, find_legacy_match};
pub use marker::{LABEL1_FIELD, LABEL2_FIELD, LABEL_FIELDS, LabelKind, classify, marker_id};
