//! Offset-row hex layout mapping tile coordinates to world space.
//!
//! Odd rows are shifted half a column to the right so that a square sampling
//! grid tiles as hexagons. Row parity uses the truncated remainder, so odd
//! negative rows shift half a column to the left instead.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Horizontal distance between neighbouring columns.
pub const HEX_SPACING_X: f64 = 1.77;

/// Distance between neighbouring rows along Z.
pub const HEX_SPACING_Z: f64 = 1.535;

/// One hexagon in the offset grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileCoord {
    /// Column index (`i`).
    pub col: i32,
    /// Row index (`j`).
    pub row: i32,
}

impl TileCoord {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Translate by a whole number of columns and rows, saturating at the
    /// `i32` range. Region validation rejects offsets that would saturate.
    pub fn offset(self, col: i32, row: i32) -> Self {
        Self::new(self.col.saturating_add(col), self.row.saturating_add(row))
    }

    /// World-space (x, z) center of this tile.
    pub fn to_world(self) -> DVec2 {
        tile_to_world(self.col, self.row)
    }
}

/// Map a tile to its world-space (x, z) center.
///
/// `x = (col + 0.5 * (row % 2)) * 1.77`, `z = row * 1.535`.
pub fn tile_to_world(col: i32, row: i32) -> DVec2 {
    let parity = f64::from(row % 2);
    DVec2::new(
        (f64::from(col) + 0.5 * parity) * HEX_SPACING_X,
        f64::from(row) * HEX_SPACING_Z,
    )
}
