//! Label reconciliation engine for ScenLab.
//!
//! Keeps the text labels on a scenario map in sync with the content an
//! external generator wants on it, preserving everything else in the
//! saved game.
//!
//! # Architecture
//!
//! One reconciliation run is a short pipeline:
//!
//! 1. **Scan**: every label-shaped piece is parsed and classified as
//!    managed (carries an embedded snippet id) or legacy (predates the
//!    marker convention)
//! 2. **Scope**: `extras/` snippets are skipped, foreign-owned snippets
//!    dropped, and owner prefixes downgraded for old saves
//! 3. **Match and update**: snippets are matched by id, then by raw
//!    content; drifted label content is rewritten in place
//! 4. **Delete**: managed labels no snippet claimed are removed
//! 5. **Create**: leftover snippets become new labels, shelf-packed
//!    into the map's label areas in a configured order
//!
//! The engine reaches the scenario only through the [`StateStore`] and
//! [`TemplateSource`] capabilities, and reports everything it did in a
//! [`scenlab_types::LabelReport`].
//!
//! # Example
//!
//! ```
//! use scenlab_engine::EngineConfig;
//!
//! let config = EngineConfig::default();
//! assert_eq!(config.x_margin, 20);
//! assert!(config.label_order.iter().any(|token| token == "scenario"));
//! ```

mod config;
mod create;
mod engine;
mod error;
mod fuzzy;
mod ordering;
mod store;

pub use config::{DEFAULT_FORCE_NEW_ROW, DEFAULT_LABEL_ORDER, EngineConfig};
pub use engine::UpdateEngine;
pub use error::{EngineError, EngineResult};
pub use ordering::creation_order;
pub use store::{StateStore, StoreError, TemplateSource};
