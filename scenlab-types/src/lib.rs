//! Core type definitions for ScenLab.
//!
//! This crate defines the fundamental, engine-agnostic types shared by
//! the label reconciliation crates:
//! - Snippet identifiers and piece handles
//! - Snippet inputs and per-run batches
//! - Map geometry and pixel positions
//! - The bucketed outcome report
//!
//! Anything that knows about piece-state encodings, packing, or the
//! reconciliation flow belongs in the downstream crates, not here.

mod geometry;
mod ids;
mod report;
mod snippet;

pub use geometry::{MapGeometry, MapPoint};
pub use ids::{EXTRAS_OWNER, PieceHandle, SnippetId};
pub use report::{LabelReport, ReportEntry};
pub use snippet::{DEFAULT_LABEL_HEIGHT, DEFAULT_LABEL_WIDTH, Snippet, SnippetBatch};
