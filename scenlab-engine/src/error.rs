//! Error types for the reconciliation engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Run-level failures that abort a reconciliation.
///
/// Failures scoped to a single label never surface here; they are
/// recorded in the report's `failed` bucket and the run carries on.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The template source could not supply the label template.
    #[error("label template is unavailable: {0}")]
    MissingTemplate(String),

    /// Both the resolved label area and the overflow area refused a
    /// placement.
    #[error("label areas '{area}' and 'overflow' are full")]
    AreasFull {
        /// The area that was tried before falling back to overflow.
        area: String,
    },
}
