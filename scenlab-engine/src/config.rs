//! Engine configuration.

/// Default creation order. Tokens ending in `*` collect every pending
/// id with that stem.
pub const DEFAULT_LABEL_ORDER: &str = "scenario players scenario_note* victory_conditions ssr \
     ob_setup_1* ob_note_1* ob_vehicles_1 ob_vehicles_ma_notes_1 ob_vehicle_note_1* \
     ob_ordnance_1 ob_ordnance_ma_notes_1 ob_ordnance_note_1* \
     ob_setup_2* ob_note_2* ob_vehicles_2 ob_vehicles_ma_notes_2 ob_vehicle_note_2* \
     ob_ordnance_2 ob_ordnance_ma_notes_2 ob_ordnance_note_2*";

/// Ids that open a fresh packing row by default: the first entry of
/// each player's OB group.
pub const DEFAULT_FORCE_NEW_ROW: &str =
    "ob_setup_1.1 ob_note_1.1 ob_vehicles_1 ob_ordnance_1 \
     ob_setup_2.1 ob_note_2.1 ob_vehicles_2 ob_ordnance_2";

/// Configuration for one reconciliation run.
///
/// The template defaults must match the label template the template
/// source hands out; creation rewrites exactly those values.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Horizontal gap between packed labels, and each area's left inset.
    pub x_margin: i32,
    /// Vertical gap between label rows, and each area's top inset.
    pub y_margin: i32,
    /// Creation-order tokens; `stem*` collects every id with that stem.
    pub label_order: Vec<String>,
    /// Ids that always open a fresh packing row.
    pub force_new_row: Vec<String>,
    /// Username value the label template ships with.
    pub template_username: String,
    /// First label line the template ships with.
    pub template_text1: String,
    /// Second label line the template ships with.
    pub template_text2: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            x_margin: 20,
            y_margin: 20,
            label_order: split_tokens(DEFAULT_LABEL_ORDER),
            force_new_row: split_tokens(DEFAULT_FORCE_NEW_ROW),
            template_username: "David Sullivan".to_string(),
            template_text1: "Label".to_string(),
            template_text2: "no background".to_string(),
        }
    }
}

fn split_tokens(value: &str) -> Vec<String> {
    value.split_whitespace().map(str::to_string).collect()
}
