#![allow(dead_code)]

//! Shared fixtures: an in-memory state store and template source.

use scenlab_engine::{EngineConfig, EngineResult, StateStore, StoreError, TemplateSource, UpdateEngine};
use scenlab_types::{LabelReport, MapGeometry, PieceHandle, SnippetBatch};
use std::collections::HashSet;

/// The label template's pristine state, as the game engine would clone
/// it from the module's piece slot.
pub const TEMPLATE_STATE: &str =
    "piece;;;\\\tDavid Sullivan\\\t\\\tLabel\\\tno background\\\tnull;0;0";

/// Content carrying the marker the engine recognizes labels by.
pub fn label_content(id: &str, text: &str) -> String {
    format!("<!-- vasl-templates:id {id} --> {text}")
}

/// An encoded state for an existing managed label.
pub fn managed_state(id: &str, text: &str) -> String {
    format!(
        "piece;;;\\\tvasl-templates\\\t\\\t{}\\\t\\\tMap0;120;45",
        label_content(id, text)
    )
}

/// An encoded state for a label that predates markers.
pub fn legacy_state(label1: &str, label2: &str) -> String {
    format!("piece;;;\\\tjoe blow\\\t\\\t{label1}\\\t{label2}\\\tMap0;300;300")
}

/// In-memory state store over insertion-ordered pieces.
pub struct MemoryStore {
    pieces: Vec<(PieceHandle, String)>,
    next_handle: u64,
    geometry: MapGeometry,
    pub fail_reads_for: HashSet<PieceHandle>,
    pub fail_writes_for: HashSet<PieceHandle>,
    pub fail_removes_for: HashSet<PieceHandle>,
    pub fail_inserts: bool,
}

impl MemoryStore {
    /// A store over a map with no boards placed.
    pub fn boardless() -> Self {
        Self::with_geometry(MapGeometry::boardless())
    }

    pub fn with_geometry(geometry: MapGeometry) -> Self {
        Self {
            pieces: Vec::new(),
            next_handle: 0,
            geometry,
            fail_reads_for: HashSet::new(),
            fail_writes_for: HashSet::new(),
            fail_removes_for: HashSet::new(),
            fail_inserts: false,
        }
    }

    /// Places a piece directly, bypassing the failure switches.
    pub fn add_piece(&mut self, state: impl Into<String>) -> PieceHandle {
        let handle = PieceHandle::new(self.next_handle);
        self.next_handle += 1;
        self.pieces.push((handle, state.into()));
        handle
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn state_of(&self, piece: PieceHandle) -> Option<&str> {
        self.pieces
            .iter()
            .find(|(handle, _)| *handle == piece)
            .map(|(_, state)| state.as_str())
    }

    pub fn contains(&self, piece: PieceHandle) -> bool {
        self.state_of(piece).is_some()
    }

    /// The first piece state containing `needle`.
    pub fn find_state(&self, needle: &str) -> Option<&str> {
        self.pieces
            .iter()
            .map(|(_, state)| state.as_str())
            .find(|state| state.contains(needle))
    }
}

impl StateStore for MemoryStore {
    fn label_pieces(&self) -> Vec<PieceHandle> {
        self.pieces.iter().map(|(handle, _)| *handle).collect()
    }

    fn piece_state(&self, piece: PieceHandle) -> Result<String, StoreError> {
        if self.fail_reads_for.contains(&piece) {
            return Err(StoreError::new("state read rejected"));
        }
        self.state_of(piece)
            .map(str::to_string)
            .ok_or_else(|| StoreError::new(format!("no such piece: {piece}")))
    }

    fn set_piece_state(&mut self, piece: PieceHandle, state: &str) -> Result<(), StoreError> {
        if self.fail_writes_for.contains(&piece) {
            return Err(StoreError::new("state write rejected"));
        }
        let entry = self
            .pieces
            .iter_mut()
            .find(|(handle, _)| *handle == piece)
            .ok_or_else(|| StoreError::new(format!("no such piece: {piece}")))?;
        entry.1 = state.to_string();
        Ok(())
    }

    fn remove_piece(&mut self, piece: PieceHandle) -> Result<(), StoreError> {
        if self.fail_removes_for.contains(&piece) {
            return Err(StoreError::new("piece removal rejected"));
        }
        let before = self.pieces.len();
        self.pieces.retain(|(handle, _)| *handle != piece);
        if self.pieces.len() == before {
            return Err(StoreError::new(format!("no such piece: {piece}")));
        }
        Ok(())
    }

    fn insert_piece(&mut self, state: &str) -> Result<PieceHandle, StoreError> {
        if self.fail_inserts {
            return Err(StoreError::new("piece insertion rejected"));
        }
        Ok(self.add_piece(state))
    }

    fn map_geometry(&self) -> MapGeometry {
        self.geometry
    }
}

/// Template source backed by an optional fixed state.
pub struct MemoryTemplates {
    pub template: Option<String>,
}

impl MemoryTemplates {
    pub fn standard() -> Self {
        Self {
            template: Some(TEMPLATE_STATE.to_string()),
        }
    }

    pub fn missing() -> Self {
        Self { template: None }
    }
}

impl TemplateSource for MemoryTemplates {
    fn label_template(&self) -> Result<String, StoreError> {
        self.template
            .clone()
            .ok_or_else(|| StoreError::new("label piece slot not found"))
    }
}

pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Runs one reconciliation with the default config and template.
pub fn run_engine(store: &mut MemoryStore, batch: SnippetBatch) -> EngineResult<LabelReport> {
    init_logging();
    let templates = MemoryTemplates::standard();
    let mut engine = UpdateEngine::new(store, &templates, EngineConfig::default());
    engine.run(batch)
}

/// Ids of the entries in a report bucket, for compact assertions.
pub fn ids_of(entries: &[scenlab_types::ReportEntry]) -> Vec<String> {
    entries.iter().map(|entry| entry.id.to_string()).collect()
}

/// A strict-comparison batch for the standard two test players.
pub fn make_batch(snippets: Vec<scenlab_types::Snippet>) -> SnippetBatch {
    SnippetBatch::new(snippets, ["german".to_string(), "american".to_string()])
}
