//! The default label areas carved out of a map.
//!
//! With boards placed, the border around them is split into four areas:
//!
//! ```text
//! +----------------------------------+
//! |             general              |
//! +---------+--------------+---------+
//! | player1 |   board(s)   | player2 |
//! +---------+--------------+---------+
//! |             overflow             |
//! +----------------------------------+
//! ```
//!
//! A boardless map gets a single `general` area spanning one assumed
//! board width. The bottom strip and the boardless area have no real
//! height limit.

use crate::area::LabelArea;
use scenlab_types::{MapGeometry, MapPoint};
use std::collections::HashMap;

/// The default area above the boards.
pub const GENERAL_AREA: &str = "general";
/// The strip left of the boards.
pub const PLAYER1_AREA: &str = "player1";
/// The strip right of the boards.
pub const PLAYER2_AREA: &str = "player2";
/// The strip below the boards, used when another area fills up.
pub const OVERFLOW_AREA: &str = "overflow";

/// Effectively unlimited area height.
const UNBOUNDED_HEIGHT: i32 = 99_999;
/// Assumed usable width for a map with no boards.
const BOARDLESS_WIDTH: i32 = 2_500;

/// The label areas available to one reconciliation run.
///
/// Unknown (or empty) area names resolve to the `general` area, so a
/// label always has somewhere to go.
#[derive(Debug, Clone)]
pub struct AreaSet {
    general: LabelArea,
    named: HashMap<String, LabelArea>,
}

impl AreaSet {
    /// Carves the default areas out of a map.
    #[must_use]
    pub fn for_map(geometry: &MapGeometry, x_margin: i32, y_margin: i32) -> Self {
        if !geometry.has_boards() {
            // no boards to pack around: one area spanning an assumed
            // single board width, unlimited height
            let general = LabelArea::new(
                GENERAL_AREA,
                MapPoint::new(x_margin, y_margin),
                BOARDLESS_WIDTH,
                UNBOUNDED_HEIGHT,
                x_margin,
                y_margin,
            );
            return Self {
                general,
                named: HashMap::new(),
            };
        }

        let map_width = geometry.map_size.0 as i32;
        let map_height = geometry.map_size.1 as i32;
        let border_width = geometry.edge_buffer.0 as i32;
        let border_height = geometry.edge_buffer.1 as i32;

        let general = LabelArea::new(
            GENERAL_AREA,
            MapPoint::new(x_margin, y_margin),
            map_width - 2 * x_margin,
            border_height - 2 * y_margin,
            x_margin,
            y_margin,
        );
        let mut named = HashMap::new();
        named.insert(
            PLAYER1_AREA.to_string(),
            LabelArea::new(
                PLAYER1_AREA,
                MapPoint::new(x_margin, border_height),
                border_width - 2 * x_margin,
                map_height - 2 * border_height,
                x_margin,
                y_margin,
            ),
        );
        named.insert(
            PLAYER2_AREA.to_string(),
            LabelArea::new(
                PLAYER2_AREA,
                MapPoint::new(map_width - border_width + x_margin, border_height),
                border_width - 2 * x_margin,
                map_height - 2 * border_height,
                x_margin,
                y_margin,
            ),
        );
        named.insert(
            OVERFLOW_AREA.to_string(),
            LabelArea::new(
                OVERFLOW_AREA,
                MapPoint::new(x_margin, map_height - border_height + y_margin),
                map_width - 2 * x_margin,
                UNBOUNDED_HEIGHT,
                x_margin,
                y_margin,
            ),
        );
        Self { general, named }
    }

    /// Resolves an area by name, falling back to `general` for names no
    /// area carries.
    pub fn resolve_mut(&mut self, name: &str) -> &mut LabelArea {
        match self.named.get_mut(name) {
            Some(area) => area,
            None => &mut self.general,
        }
    }

    /// The overflow area, on maps that have one.
    pub fn overflow_mut(&mut self) -> Option<&mut LabelArea> {
        self.named.get_mut(OVERFLOW_AREA)
    }
}
