//! Patch renderers: material classes and heights.

use super::image::DebugImage;
use crate::classify::MaterialClass;
use crate::layout::TileCoord;
use crate::patch::{PlacedTile, TerrainPatch};

/// Inclusive layout-coordinate rectangle covering a set of tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileRect {
    pub min: TileCoord,
    pub max: TileCoord,
}

impl TileRect {
    /// Smallest rectangle covering every tile, or `None` for no tiles.
    pub fn covering<'a>(tiles: impl IntoIterator<Item = &'a PlacedTile>) -> Option<Self> {
        tiles.into_iter().fold(None, |rect, tile| {
            let c = tile.coord;
            Some(match rect {
                None => Self { min: c, max: c },
                Some(Self { min, max }) => Self {
                    min: TileCoord::new(min.col.min(c.col), min.row.min(c.row)),
                    max: TileCoord::new(max.col.max(c.col), max.row.max(c.row)),
                },
            })
        })
    }

    pub fn width(&self) -> u32 {
        (i64::from(self.max.col) - i64::from(self.min.col) + 1) as u32
    }

    pub fn height(&self) -> u32 {
        (i64::from(self.max.row) - i64::from(self.min.row) + 1) as u32
    }

    /// Pixel position of a coordinate inside the rectangle.
    pub fn pixel(&self, coord: TileCoord) -> (u32, u32) {
        (
            (i64::from(coord.col) - i64::from(self.min.col)) as u32,
            (i64::from(coord.row) - i64::from(self.min.row)) as u32,
        )
    }
}

/// Display color of a material class.
pub fn class_color(class: MaterialClass) -> [u8; 4] {
    match class {
        MaterialClass::Snow => [240, 240, 245, 255],
        MaterialClass::Rock => [120, 110, 100, 255],
        MaterialClass::Grass => [60, 150, 50, 255],
    }
}

/// One pixel per tile colored by class. Cells without a prism stay transparent.
pub fn render_material_map(patch: &TerrainPatch) -> DebugImage {
    render(patch, |tile| class_color(tile.class))
}

/// One grayscale pixel per tile, brightest at the patch's tallest prism.
pub fn render_height_map(patch: &TerrainPatch) -> DebugImage {
    let peak = patch.tiles.iter().map(|t| t.height).fold(0.0_f64, f64::max);
    render(patch, |tile| {
        let level = if peak > 0.0 {
            (tile.height / peak * 255.0).round().clamp(0.0, 255.0) as u8
        } else {
            0
        };
        [level, level, level, 255]
    })
}

fn render(patch: &TerrainPatch, color: impl Fn(&PlacedTile) -> [u8; 4]) -> DebugImage {
    let Some(rect) = TileRect::covering(&patch.tiles) else {
        return DebugImage::new(0, 0);
    };
    let mut image = DebugImage::new(rect.width(), rect.height());
    for tile in &patch.tiles {
        let (x, y) = rect.pixel(tile.coord);
        image.set_pixel(x, y, color(tile));
    }
    image
}
