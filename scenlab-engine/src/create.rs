//! New-label state composition.
//!
//! A new label starts from the template piece's pristine state. Rather
//! than rebuilding the state from scratch, the known default values the
//! template ships with are rewritten in place: the author name, the two
//! label lines, and the unset position. The rewrite only works while
//! the template's actual defaults match the ones in [`EngineConfig`].

use crate::config::EngineConfig;
use scenlab_types::{MapPoint, Snippet};

/// Author value marking a label as machine-managed.
const MANAGED_USERNAME: &str = "vasl-templates";
/// The map new labels are attached to.
const MAIN_MAP: &str = "Map0";
/// Position value the template ships with.
const UNSET_POSITION: &str = "null;0;0";

/// Builds the encoded state for a new label placed at `position`.
#[must_use]
pub(crate) fn compose_label_state(
    template: &str,
    snippet: &Snippet,
    position: MapPoint,
    config: &EngineConfig,
) -> String {
    let content = snippet.content.replace('\n', " ");
    template
        .replace(
            &format!("\t{}\\", config.template_username),
            &format!("\t{MANAGED_USERNAME}\\"),
        )
        .replace(
            &format!("\t{}\\", config.template_text1),
            &format!("\t{content}\\"),
        )
        .replace(&format!("\t{}\\", config.template_text2), "\t\\")
        .replace(
            &format!("\t{UNSET_POSITION}"),
            &format!("\t{MAIN_MAP};{}", coord_string(position, snippet)),
        )
}

/// The position encoded the way the game engine expects: the x/y of the
/// label's centre, not its top-left corner.
fn coord_string(position: MapPoint, snippet: &Snippet) -> String {
    let centre_x = position.x + (snippet.width / 2) as i32;
    let centre_y = position.y + (snippet.height / 2) as i32;
    format!("{centre_x};{centre_y}")
}
