//! Parsed label pieces.
//!
//! A managed label knows which field its content lives in; a legacy
//! label does not until raw-content matching resolves one. The split
//! keeps "which field do I rewrite" answered before any update runs.

use crate::codec::FieldedState;
use scenlab_types::PieceHandle;

/// A label piece whose content field is resolved.
#[derive(Debug, Clone)]
pub struct ManagedLabel {
    piece: PieceHandle,
    state: FieldedState,
    content_field: usize,
}

impl ManagedLabel {
    /// Creates a managed label from its parsed state.
    #[must_use]
    pub fn new(piece: PieceHandle, state: FieldedState, content_field: usize) -> Self {
        Self {
            piece,
            state,
            content_field,
        }
    }

    /// The store handle of the underlying piece.
    #[must_use]
    pub fn piece(&self) -> PieceHandle {
        self.piece
    }

    /// The field index the label's content lives in.
    #[must_use]
    pub fn content_field(&self) -> usize {
        self.content_field
    }

    /// Reassembles the piece state with the content field replaced.
    #[must_use]
    pub fn state_with_content(&self, content: &str) -> String {
        self.state.render_with(self.content_field, content)
    }
}

/// A label piece with no embedded marker.
#[derive(Debug, Clone)]
pub struct LegacyLabel {
    piece: PieceHandle,
    state: FieldedState,
}

impl LegacyLabel {
    /// Creates a legacy label from its parsed state.
    #[must_use]
    pub fn new(piece: PieceHandle, state: FieldedState) -> Self {
        Self { piece, state }
    }

    /// The store handle of the underlying piece.
    #[must_use]
    pub fn piece(&self) -> PieceHandle {
        self.piece
    }

    /// The field at `index`, if the state has that many fields.
    #[must_use]
    pub fn field(&self, index: usize) -> Option<&str> {
        self.state.field(index)
    }

    /// Converts into a managed label once matching has picked the field
    /// the content should be written to.
    #[must_use]
    pub fn resolve(self, content_field: usize) -> ManagedLabel {
        ManagedLabel::new(self.piece, self.state, content_field)
    }
}
