//! Capability interfaces to the surrounding game engine.
//!
//! The engine never walks the loaded scenario's object graph. The
//! caller hands it these two capabilities, scoped to exactly the
//! operations label reconciliation needs: enumerate the label-shaped
//! pieces, read and write their encoded states, remove them, and mint
//! new ones from the fixed label template.

use scenlab_types::{MapGeometry, PieceHandle};
use thiserror::Error;

/// An error raised by a store or template operation.
///
/// Carries the store's message verbatim; per-label failures copy it
/// into the report's `failed` bucket instead of aborting the run.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    /// Creates an error from the store's message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Read/write access to the labels placed in a loaded scenario.
///
/// Implementations decide which pieces are label-shaped; the engine
/// classifies them further purely by the content of their states.
pub trait StateStore {
    /// Every label-shaped piece currently placed, in scan order.
    fn label_pieces(&self) -> Vec<PieceHandle>;

    /// The piece's encoded state string.
    fn piece_state(&self, piece: PieceHandle) -> Result<String, StoreError>;

    /// Overwrites the piece's encoded state.
    fn set_piece_state(&mut self, piece: PieceHandle, state: &str) -> Result<(), StoreError>;

    /// Removes the piece from the scenario.
    fn remove_piece(&mut self, piece: PieceHandle) -> Result<(), StoreError>;

    /// Materializes a new piece from an encoded state.
    fn insert_piece(&mut self, state: &str) -> Result<PieceHandle, StoreError>;

    /// Dimensions of the active map.
    fn map_geometry(&self) -> MapGeometry;
}

/// Supplies the pristine state of a freshly cloned label piece.
pub trait TemplateSource {
    /// The template's encoded default state, ready to be rewritten.
    fn label_template(&self) -> Result<String, StoreError>;
}
