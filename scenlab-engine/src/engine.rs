//! The reconciliation engine.
//!
//! One run takes a snippet batch end to end: scan the scenario for
//! label pieces, match snippets to labels by embedded id or raw
//! content, rewrite the labels whose content drifted, delete managed
//! labels no snippet wants any more, and shelf-pack new labels into the
//! map's label areas. The run's outcome is a [`LabelReport`]; the
//! engine never talks to a user directly.

use std::collections::HashMap;

use scenlab_layout::AreaSet;
use scenlab_piece::{
    FieldedState, LabelKind, LegacyLabel, ManagedLabel, classify, find_legacy_match, printable,
};
use scenlab_types::{
    EXTRAS_OWNER, LabelReport, MapPoint, ReportEntry, Snippet, SnippetBatch, SnippetId,
};
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::create::compose_label_state;
use crate::error::{EngineError, EngineResult};
use crate::fuzzy::states_equal;
use crate::ordering::creation_order;
use crate::store::{StateStore, TemplateSource};

/// How one snippet related to the labels already on the map.
///
/// The legacy ambiguity policy lives behind this type: zero or many
/// legacy candidates both come back as `Unmatched`.
#[derive(Debug)]
enum LabelMatch {
    /// A marker-carrying label with the same id, consumed from the index.
    Managed(ManagedLabel),
    /// Exactly one legacy label contained all raw-content phrases.
    Legacy(ManagedLabel),
    /// Nothing matched; the snippet is a creation candidate.
    Unmatched,
}

/// Labels discovered by scanning the scenario.
#[derive(Debug, Default)]
struct LabelScan {
    /// Marker-carrying labels, indexed by their embedded snippet id.
    managed: HashMap<SnippetId, ManagedLabel>,
    /// Labels without a marker, in scan order.
    legacy: Vec<LegacyLabel>,
    /// Whether any marker carried a non-`extras` owner prefix.
    has_player_owned: bool,
}

/// Drives one label reconciliation over a loaded scenario.
pub struct UpdateEngine<'a, S, T> {
    store: &'a mut S,
    templates: &'a T,
    config: EngineConfig,
}

impl<'a, S: StateStore, T: TemplateSource> UpdateEngine<'a, S, T> {
    /// Creates an engine over the given store and template source.
    pub fn new(store: &'a mut S, templates: &'a T, config: EngineConfig) -> Self {
        Self {
            store,
            templates,
            config,
        }
    }

    /// Reconciles the batch against the scenario and reports what
    /// happened.
    ///
    /// Per-label store failures land in the report's `failed` bucket;
    /// only a missing template or exhausted label areas abort the run.
    pub fn run(&mut self, batch: SnippetBatch) -> EngineResult<LabelReport> {
        let SnippetBatch {
            snippets,
            players,
            fuzzy_label_compares,
        } = batch;
        info!(
            player1 = %players[0],
            player2 = %players[1],
            snippets = snippets.len(),
            fuzzy = fuzzy_label_compares,
            "reconciling snippet batch"
        );

        // nothing can be created without the template, so fail before
        // touching any label
        let template = self
            .templates
            .label_template()
            .map_err(|err| EngineError::MissingTemplate(err.to_string()))?;

        let mut scan = self.scan_labels(&players);
        let snippets = scope_snippets(snippets, &players, scan.has_player_owned);

        let mut report = LabelReport::new();
        let pending = self.update_labels(snippets, fuzzy_label_compares, &mut scan, &mut report);
        self.delete_labels(scan.managed, &mut report);
        self.create_labels(&template, pending, &mut report)?;
        Ok(report)
    }

    /// Scans every label-shaped piece and splits them into managed and
    /// legacy labels.
    ///
    /// Managed labels owned by a player outside the batch are left
    /// untouched and never enter the index. Their presence still counts
    /// towards `has_player_owned`.
    fn scan_labels(&self, players: &[String; 2]) -> LabelScan {
        let mut scan = LabelScan::default();
        for piece in self.store.label_pieces() {
            let state = match self.store.piece_state(piece) {
                Ok(state) => state,
                Err(err) => {
                    warn!(%piece, %err, "couldn't read piece state, skipping");
                    continue;
                }
            };
            let fields = FieldedState::parse(&state);
            match classify(&fields) {
                LabelKind::Managed { id, field_index } => {
                    if let Some(owner) = id.owner() {
                        if owner != EXTRAS_OWNER {
                            scan.has_player_owned = true;
                            if owner != players[0] && owner != players[1] {
                                debug!(%id, owner, "skipping label owned by another player");
                                continue;
                            }
                        }
                    }
                    debug!(%id, field_index, "found managed label");
                    scan.managed
                        .insert(id, ManagedLabel::new(piece, fields, field_index));
                }
                LabelKind::Legacy => {
                    debug!(%piece, "found legacy label");
                    scan.legacy.push(LegacyLabel::new(piece, fields));
                }
            }
        }
        info!(
            managed = scan.managed.len(),
            legacy = scan.legacy.len(),
            has_player_owned = scan.has_player_owned,
            "scanned scenario labels"
        );
        scan
    }

    /// Matches each snippet to a label and rewrites drifted content.
    /// Returns the snippets that matched nothing, in supplied order.
    fn update_labels(
        &mut self,
        snippets: Vec<Snippet>,
        fuzzy: bool,
        scan: &mut LabelScan,
        report: &mut LabelReport,
    ) -> Vec<Snippet> {
        info!("processing snippets");
        let mut pending = Vec::new();
        for snippet in snippets {
            debug!(id = %snippet.id, "processing snippet");
            match match_label(&snippet, scan) {
                LabelMatch::Managed(label) | LabelMatch::Legacy(label) => {
                    self.update_label(&snippet, &label, fuzzy, report);
                }
                LabelMatch::Unmatched => {
                    debug!(id = %snippet.id, "no matching label");
                    pending.push(snippet);
                }
            }
        }
        pending
    }

    /// Rewrites one matched label's content, unless it already matches.
    fn update_label(
        &mut self,
        snippet: &Snippet,
        label: &ManagedLabel,
        fuzzy: bool,
        report: &mut LabelReport,
    ) {
        let id = snippet.id.clone();
        let current_state = match self.store.piece_state(label.piece()) {
            Ok(state) => state,
            Err(err) => {
                report_failure(report, id, "update", &err.to_string());
                return;
            }
        };
        let content = snippet.content.replace('\n', " ");
        let new_state = label.state_with_content(&content);

        if states_equal(&current_state, &new_state, fuzzy) {
            info!(%id, "label unchanged");
            report.unchanged.push(ReportEntry::new(id));
            return;
        }

        info!(%id, field = label.content_field(), "updating label");
        debug!(state = %printable(&current_state), "current state");
        debug!(state = %printable(&new_state), "new state");
        match self.store.set_piece_state(label.piece(), &new_state) {
            Ok(()) => report.updated.push(ReportEntry::new(id)),
            Err(err) => report_failure(report, id, "update", &err.to_string()),
        }
    }

    /// Deletes every managed label no snippet consumed.
    ///
    /// Labels under `extras/` are exempt, and legacy labels never reach
    /// here at all.
    fn delete_labels(
        &mut self,
        unconsumed: HashMap<SnippetId, ManagedLabel>,
        report: &mut LabelReport,
    ) {
        let mut leftovers: Vec<_> = unconsumed.into_iter().collect();
        leftovers.sort_by(|(a, _), (b, _)| a.cmp(b));
        for (id, label) in leftovers {
            if id.is_extras() {
                debug!(%id, "leaving extras label in place");
                continue;
            }
            info!(%id, "deleting label");
            match self.store.remove_piece(label.piece()) {
                Ok(()) => report.deleted.push(ReportEntry::new(id)),
                Err(err) => report_failure(report, id, "delete", &err.to_string()),
            }
        }
    }

    /// Creates labels for the snippets nothing matched, in configured
    /// order.
    fn create_labels(
        &mut self,
        template: &str,
        pending: Vec<Snippet>,
        report: &mut LabelReport,
    ) -> EngineResult<()> {
        if pending.is_empty() {
            return Ok(());
        }

        let geometry = self.store.map_geometry();
        let mut areas = AreaSet::for_map(&geometry, self.config.x_margin, self.config.y_margin);

        let supplied_order: Vec<SnippetId> = pending.iter().map(|s| s.id.clone()).collect();
        let mut by_id: HashMap<SnippetId, Snippet> =
            pending.into_iter().map(|s| (s.id.clone(), s)).collect();

        info!("creating labels");
        for id in creation_order(&self.config.label_order, &supplied_order) {
            let Some(snippet) = by_id.remove(&id) else {
                warn!(%id, "no snippet for ordered id");
                continue;
            };
            if !snippet.auto_create {
                debug!(%id, "auto-create disabled");
                continue;
            }
            if snippet.content.is_empty() {
                info!(%id, "skipping label creation, no content");
                continue;
            }

            let position = self.place_label(&snippet, &mut areas)?;
            info!(%id, position = %position, "creating label");
            let state = compose_label_state(template, &snippet, position, &self.config);
            match self.store.insert_piece(&state) {
                Ok(piece) => {
                    debug!(%piece, %id, "created label");
                    report.created.push(ReportEntry::placed(id, position));
                }
                Err(err) => report_failure(report, id, "create", &err.to_string()),
            }
        }
        Ok(())
    }

    /// Finds a position for one label, falling back to the overflow
    /// area when its own area is full.
    fn place_label(&self, snippet: &Snippet, areas: &mut AreaSet) -> EngineResult<MapPoint> {
        let area = areas.resolve_mut(&snippet.label_area);
        if self.config.force_new_row.iter().any(|id| id == snippet.id.as_str()) {
            debug!(id = %snippet.id, area = area.name(), "forcing a new row");
            area.start_new_row();
        }
        let width = snippet.width as i32;
        let height = snippet.height as i32;
        if let Some(position) = area.next_position(width, height) {
            return Ok(position);
        }

        let area_name = area.name().to_string();
        if let Some(overflow) = areas.overflow_mut() {
            debug!(id = %snippet.id, area = %area_name, "area is full, trying overflow");
            if let Some(position) = overflow.next_position(width, height) {
                return Ok(position);
            }
        }
        Err(EngineError::AreasFull { area: area_name })
    }
}

/// Resolves one snippet against the scanned labels.
///
/// A managed match consumes the label from the index. A legacy match
/// leaves the label in the candidate list: legacy labels are never
/// deleted, so nothing downstream needs them removed.
fn match_label(snippet: &Snippet, scan: &mut LabelScan) -> LabelMatch {
    if let Some(label) = scan.managed.remove(&snippet.id) {
        debug!(id = %snippet.id, "found matching label");
        return LabelMatch::Managed(label);
    }
    match find_legacy_match(snippet, &scan.legacy) {
        Some(found) => {
            debug!(id = %snippet.id, "found matching legacy label");
            let label = scan.legacy[found.index].clone();
            LabelMatch::Legacy(label.resolve(found.field_index))
        }
        None => LabelMatch::Unmatched,
    }
}

/// Applies the extras scope filter, the owner filter, and (for saves
/// that predate owner prefixes) the prefix downgrade.
fn scope_snippets(
    snippets: Vec<Snippet>,
    players: &[String; 2],
    has_player_owned: bool,
) -> Vec<Snippet> {
    let mut scoped = Vec::with_capacity(snippets.len());
    for mut snippet in snippets {
        if snippet.id.is_extras() {
            info!(id = %snippet.id, "skipping extras snippet");
            continue;
        }
        if let Some(owner) = snippet.id.owner() {
            if owner != players[0] && owner != players[1] {
                debug!(id = %snippet.id, owner, "dropping snippet owned by another player");
                continue;
            }
            if !has_player_owned {
                // the save was made before labels carried owner
                // prefixes, so match and create with the bare id
                let bare = snippet.id.without_owner();
                debug!(from = %snippet.id, to = %bare, "downgrading snippet id");
                snippet.id = bare;
            }
        }
        scoped.push(snippet);
    }
    scoped
}

/// Records a failed store operation against the snippet's id.
fn report_failure(report: &mut LabelReport, id: SnippetId, operation: &str, message: &str) {
    let caption = format!("ERROR: Couldn't {operation} label '{id}'");
    warn!(%id, %message, "{caption}");
    report
        .failed
        .push(ReportEntry::failed(id, caption, message));
}
