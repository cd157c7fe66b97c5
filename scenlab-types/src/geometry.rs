//! Map geometry reported by the state store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position on the map, in map pixels.
///
/// Coordinates may go negative: a label wider than its area is centered
/// and can start left of the area's edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MapPoint {
    pub x: i32,
    pub y: i32,
}

impl MapPoint {
    /// Creates a point from pixel coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Dimensions of the active map, as the state store reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapGeometry {
    /// Full pixel size of the map, boards included.
    pub map_size: (u32, u32),
    /// Width and height of the empty border around the board area.
    pub edge_buffer: (u32, u32),
    /// Number of boards placed on the map. Zero changes how label areas
    /// are carved out.
    pub board_count: usize,
}

impl MapGeometry {
    /// Creates the geometry for a map with boards.
    #[must_use]
    pub const fn new(map_size: (u32, u32), edge_buffer: (u32, u32), board_count: usize) -> Self {
        Self {
            map_size,
            edge_buffer,
            board_count,
        }
    }

    /// Creates the geometry for a map with no boards placed.
    #[must_use]
    pub const fn boardless() -> Self {
        Self {
            map_size: (0, 0),
            edge_buffer: (0, 0),
            board_count: 0,
        }
    }

    /// True when at least one board is placed.
    #[must_use]
    pub fn has_boards(&self) -> bool {
        self.board_count > 0
    }
}
