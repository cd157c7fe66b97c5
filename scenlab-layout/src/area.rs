//! Shelf packing for one label area.
//!
//! Labels are laid out greedily, left to right in rows, top to bottom.
//! The packer never reclaims space: each call hands out the next slot
//! and advances the cursor. A label may bleed past the area edge by up
//! to 40% of its own size, which still leaves its centre (the click
//! target) inside the area.

use scenlab_types::MapPoint;
use tracing::debug;

/// Fraction of a label's size allowed to hang past the area edge.
const BLEED_TOLERANCE: f64 = 0.4;

/// A named rectangle on the map that accepts shelf-packed labels.
///
/// All placement state lives here: the cursor (relative to the area's
/// top-left corner) and the height of the row being filled.
#[derive(Debug, Clone)]
pub struct LabelArea {
    name: String,
    top_left: MapPoint,
    width: i32,
    height: i32,
    x_margin: i32,
    y_margin: i32,
    cursor: MapPoint,
    row_height: i32,
}

impl LabelArea {
    /// Creates an empty area with its cursor at the top-left corner.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        top_left: MapPoint,
        width: i32,
        height: i32,
        x_margin: i32,
        y_margin: i32,
    ) -> Self {
        let name = name.into();
        debug!(
            area = %name,
            top_left = %top_left,
            width,
            height,
            x_margin,
            y_margin,
            "creating label area"
        );
        Self {
            name,
            top_left,
            width,
            height,
            x_margin,
            y_margin,
            cursor: MapPoint::new(0, 0),
            row_height: 0,
        }
    }

    /// The area's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the top-left position for a `width` x `height` label and
    /// advances the cursor past it, or `None` when the area is full.
    ///
    /// A label wider than the whole area is centered on it, which can
    /// push the position left of the area's edge.
    pub fn next_position(&mut self, width: i32, height: i32) -> Option<MapPoint> {
        debug!(
            area = %self.name,
            width,
            height,
            cursor = %self.cursor,
            "getting next label position"
        );
        let h_overflow = (self.cursor.x + width) - self.width;
        if f64::from(h_overflow) < BLEED_TOLERANCE * f64::from(width) {
            // enough horizontal space in the current row, check vertically
            let v_overflow = (self.cursor.y + height) - self.height;
            if f64::from(v_overflow) < BLEED_TOLERANCE * f64::from(height) {
                return Some(self.take_slot(width, height));
            }
            debug!(area = %self.name, "label area is full");
            return None;
        }

        // not enough horizontal space, start a new row
        self.advance_row();
        debug!(area = %self.name, y = self.cursor.y, "starting a new row");
        if width > self.width {
            self.cursor.x = (self.width - width) / 2;
        }
        let v_overflow = (self.cursor.y + height) - self.height;
        if f64::from(v_overflow) >= BLEED_TOLERANCE * f64::from(height) {
            debug!(area = %self.name, "label area is full");
            return None;
        }
        Some(self.take_slot(width, height))
    }

    /// Moves the cursor to the start of a fresh row. Does nothing when
    /// the cursor is already at the start of one.
    pub fn start_new_row(&mut self) {
        self.advance_row();
        debug!(area = %self.name, y = self.cursor.y, "started a new row");
    }

    fn take_slot(&mut self, width: i32, height: i32) -> MapPoint {
        let assigned = MapPoint::new(self.top_left.x + self.cursor.x, self.top_left.y + self.cursor.y);
        self.cursor.x += width + self.x_margin;
        self.row_height = self.row_height.max(height);
        debug!(area = %self.name, position = %assigned, "assigned label position");
        assigned
    }

    fn advance_row(&mut self) {
        if self.cursor.x == 0 {
            return;
        }
        self.cursor.x = 0;
        self.cursor.y += self.row_height + self.y_margin;
        self.row_height = 0;
    }
}
