//! Shelf packing and label area geometry for ScenLab.
//!
//! This crate decides where newly created labels go:
//!
//! - [`LabelArea`] — greedy row-based packing inside one rectangle
//! - [`AreaSet`] — the named areas carved out of a map's border
//!
//! Placement is stateful and append-only: areas hand out positions in
//! the order they are asked and never move a label that has been
//! placed. Callers that want related labels grouped together control
//! that entirely through the order they request positions in.

mod area;
mod regions;

pub use area::LabelArea;
pub use regions::{AreaSet, GENERAL_AREA, OVERFLOW_AREA, PLAYER1_AREA, PLAYER2_AREA};
