//! Region configuration: grid bounds, shaping policy, classification, materials,
//! and the post-finalization transform of one terrain patch.

use serde::{Deserialize, Serialize};

use crate::bands::{Band, BandTable, validate_divisor};
use crate::classify::{ClassThresholds, ClassificationMode, TileClassifier};
use crate::error::TerrainError;
use crate::layout::TileCoord;
use crate::material::MaterialSet;
use crate::transform::PatchTransform;

/// Half-open rectangle of local tile indices, `[col_start, col_end) x [row_start, row_end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBounds {
    pub col_start: i32,
    pub col_end: i32,
    pub row_start: i32,
    pub row_end: i32,
}

impl GridBounds {
    pub const fn new(col_start: i32, col_end: i32, row_start: i32, row_end: i32) -> Self {
        Self {
            col_start,
            col_end,
            row_start,
            row_end,
        }
    }

    /// `cols x rows` grid starting at the origin.
    pub const fn sized(cols: i32, rows: i32) -> Self {
        Self::new(0, cols, 0, rows)
    }

    /// Square grid `[-radius, radius]` on both axes.
    pub const fn centered(radius: i32) -> Self {
        Self::new(-radius, radius + 1, -radius, radius + 1)
    }

    pub fn cols(&self) -> i64 {
        i64::from(self.col_end) - i64::from(self.col_start)
    }

    pub fn rows(&self) -> i64 {
        i64::from(self.row_end) - i64::from(self.row_start)
    }

    pub fn is_empty(&self) -> bool {
        self.cols() <= 0 || self.rows() <= 0
    }

    pub fn tile_count(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.cols() * self.rows()) as usize
        }
    }

    /// Every local tile, column by column (rows vary fastest).
    pub fn tiles(&self) -> impl DoubleEndedIterator<Item = TileCoord> + '_ {
        (self.col_start..self.col_end).flat_map(move |col| {
            (self.row_start..self.row_end).map(move |row| TileCoord::new(col, row))
        })
    }

    pub fn contains(&self, coord: TileCoord) -> bool {
        coord.col >= self.col_start
            && coord.col < self.col_end
            && coord.row >= self.row_start
            && coord.row < self.row_end
    }
}

/// How a radial policy measures distance from the mountain center.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceMetric {
    /// Straight-line distance between the tile's world position and `center`
    /// (world units).
    #[default]
    Euclidean,
    /// `|col - center.x| + |row - center.y|` over local tile indices.
    Manhattan,
}

/// Circular mountain: height falls off with distance, tiles beyond the last
/// band are skipped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RadialPolicy {
    /// Mountain center, in world units for [`DistanceMetric::Euclidean`] and
    /// local tile units for [`DistanceMetric::Manhattan`].
    pub center: [f64; 2],
    pub metric: DistanceMetric,
    pub bands: BandTable,
}

/// Rectangular ridge: height falls off with the local row index; rows beyond
/// the last band use `outer_divisor` and are never skipped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BandedPolicy {
    pub bands: BandTable,
    pub outer_divisor: f64,
}

/// How noise heights are scaled across a region.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ShapingPolicy {
    Radial(RadialPolicy),
    Banded(BandedPolicy),
    /// Constant height, noise is ignored.
    Flat { height: f64 },
}

impl ShapingPolicy {
    fn validate(&self) -> Result<(), TerrainError> {
        match self {
            ShapingPolicy::Radial(radial) => {
                if radial.bands.is_empty() {
                    return Err(TerrainError::EmptyRadialBands);
                }
                radial.bands.validate()
            }
            ShapingPolicy::Banded(banded) => {
                banded.bands.validate()?;
                validate_divisor(banded.bands.len(), banded.outer_divisor)
            }
            ShapingPolicy::Flat { height } => {
                if height.is_finite() && *height >= 0.0 {
                    Ok(())
                } else {
                    Err(TerrainError::InvalidFlatHeight(*height))
                }
            }
        }
    }
}

/// Everything needed to generate one terrain patch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionConfig {
    /// Label used in logs and debug output.
    pub name: String,
    /// Local tile indices to sample. Noise is evaluated at these indices.
    pub grid: GridBounds,
    /// Added to every local index before the hex-to-world mapping.
    pub tile_offset: TileCoord,
    /// Height of a full-strength band before shaping.
    pub max_height: f64,
    /// Power-curve exponent applied to the offset noise.
    pub exponent: f64,
    pub policy: ShapingPolicy,
    pub thresholds: ClassThresholds,
    pub mode: ClassificationMode,
    pub materials: MaterialSet,
    /// Applied to all three surfaces after finalization.
    pub transform: PatchTransform,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self::ridge()
    }
}

impl RegionConfig {
    /// Fail fast on any contradictory or degenerate setting.
    pub fn validate(&self) -> Result<(), TerrainError> {
        if self.grid.is_empty() {
            return Err(TerrainError::EmptyGrid {
                cols: self.grid.cols(),
                rows: self.grid.rows(),
            });
        }
        self.check_tile_offset()?;
        if !(self.max_height.is_finite() && self.max_height > 0.0) {
            return Err(TerrainError::InvalidMaxHeight(self.max_height));
        }
        if !(self.exponent.is_finite() && self.exponent > 0.0) {
            return Err(TerrainError::InvalidExponent(self.exponent));
        }
        self.policy.validate()?;
        self.classifier().validate()?;
        if self.mode.needs_distance() && !matches!(self.policy, ShapingPolicy::Radial(_)) {
            return Err(TerrainError::DistanceGateWithoutRadialPolicy);
        }
        Ok(())
    }

    /// Every grid tile plus `tile_offset` must stay a valid layout coordinate.
    fn check_tile_offset(&self) -> Result<(), TerrainError> {
        let TileCoord { col, row } = self.tile_offset;
        let grid = &self.grid;
        let fits = grid.col_start.checked_add(col).is_some()
            && (grid.col_end - 1).checked_add(col).is_some()
            && grid.row_start.checked_add(row).is_some()
            && (grid.row_end - 1).checked_add(row).is_some();
        if fits {
            Ok(())
        } else {
            Err(TerrainError::TileOffsetOverflow { col, row })
        }
    }

    pub fn classifier(&self) -> TileClassifier {
        TileClassifier {
            thresholds: self.thresholds,
            mode: self.mode,
        }
    }

    /// Flat ground slab under the whole world: 57 x 50 tiles of height 0.5,
    /// lowered so its top sits at `y = 0`.
    pub fn ground() -> Self {
        Self {
            name: "ground".to_string(),
            grid: GridBounds::sized(57, 50),
            policy: ShapingPolicy::Flat { height: 0.5 },
            transform: PatchTransform::translation(0.0, -0.5, 0.0),
            ..Self::ridge()
        }
    }

    /// Rectangular mountain ridge, 57 x 17 tiles, fading into flat ground as
    /// rows move away from the edge.
    pub fn ridge() -> Self {
        Self {
            name: "ridge".to_string(),
            grid: GridBounds::sized(57, 17),
            tile_offset: TileCoord::new(0, 0),
            max_height: 10.0,
            exponent: 1.5,
            policy: ShapingPolicy::Banded(BandedPolicy {
                bands: BandTable::new(vec![
                    Band::new(6.0, 1.0),
                    Band::new(9.0, 1.2),
                    Band::new(12.0, 1.5),
                    Band::new(14.0, 3.0),
                    Band::new(16.0, 7.0),
                ]),
                outer_divisor: 20.0,
            }),
            thresholds: ClassThresholds::default(),
            mode: ClassificationMode::HeightOnly,
            materials: MaterialSet::default(),
            transform: PatchTransform::IDENTITY,
        }
    }

    /// Ridge along the far edge of the world.
    pub fn north_ridge() -> Self {
        Self {
            name: "north_ridge".to_string(),
            transform: PatchTransform::translation(-50.0, 0.0, -50.0),
            ..Self::ridge()
        }
    }

    /// Mirror of the north ridge on the opposite edge, built from the same
    /// generation routine by a half turn.
    pub fn south_ridge() -> Self {
        Self {
            name: "south_ridge".to_string(),
            transform: PatchTransform::new(180.0, [50.0, 0.0, 50.0]),
            ..Self::ridge()
        }
    }

    /// Circular mountain of radius 15 tiles centered on `center`.
    pub fn round_mountain(center: TileCoord) -> Self {
        let world = center.to_world();
        Self {
            name: "round_mountain".to_string(),
            grid: GridBounds::centered(15),
            tile_offset: center,
            max_height: 9.0,
            policy: ShapingPolicy::Radial(RadialPolicy {
                center: [world.x, world.y],
                metric: DistanceMetric::Euclidean,
                bands: BandTable::new(vec![
                    Band::new(12.0, 1.0),
                    Band::new(16.0, 1.5),
                    Band::new(17.0, 3.0),
                    Band::new(18.0, 7.0),
                ]),
            }),
            mode: ClassificationMode::mountain_gates(),
            ..Self::ridge()
        }
    }

    /// Corner mountain of 15 x 15 tiles peaking at its local origin, rotated
    /// by `quarter_turns * 90` degrees about the vertical axis.
    pub fn side_mountain(offset: TileCoord, quarter_turns: u8) -> Self {
        Self {
            name: format!("side_mountain_{}", quarter_turns % 4),
            grid: GridBounds::sized(15, 15),
            tile_offset: offset,
            policy: ShapingPolicy::Radial(RadialPolicy {
                center: [0.0, 0.0],
                metric: DistanceMetric::Manhattan,
                bands: BandTable::new(vec![
                    Band::new(15.0, 1.0),
                    Band::new(17.0, 1.5),
                    Band::new(18.0, 3.0),
                    Band::new(19.0, 7.0),
                ]),
            }),
            mode: ClassificationMode::mountain_gates(),
            transform: PatchTransform::new(f32::from(quarter_turns % 4) * 90.0, [0.0; 3]),
            ..Self::ridge()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_validate() {
        for config in [
            RegionConfig::ground(),
            RegionConfig::ridge(),
            RegionConfig::north_ridge(),
            RegionConfig::south_ridge(),
            RegionConfig::round_mountain(TileCoord::new(0, 0)),
            RegionConfig::side_mountain(TileCoord::new(-28, -32), 1),
        ] {
            assert!(config.validate().is_ok(), "{} failed validation", config.name);
        }
    }

    #[test]
    fn test_grid_iteration_covers_every_tile_once() {
        let grid = GridBounds::new(-2, 3, 1, 4);
        let tiles: Vec<_> = grid.tiles().collect();
        assert_eq!(tiles.len(), grid.tile_count());
        assert_eq!(tiles.len(), 15);
        assert_eq!(tiles[0], TileCoord::new(-2, 1));
        assert_eq!(tiles[1], TileCoord::new(-2, 2));
        assert!(tiles.iter().all(|t| grid.contains(*t)));
        assert_eq!(grid.tiles().next_back(), Some(TileCoord::new(2, 3)));
    }

    #[test]
    fn test_centered_grid() {
        let grid = GridBounds::centered(15);
        assert_eq!(grid.cols(), 31);
        assert_eq!(grid.rows(), 31);
        assert!(grid.contains(TileCoord::new(-15, 15)));
        assert!(!grid.contains(TileCoord::new(16, 0)));
    }

    #[test]
    fn test_empty_grid_rejected() {
        let config = RegionConfig {
            grid: GridBounds::sized(0, 10),
            ..RegionConfig::ridge()
        };
        assert_eq!(
            config.validate(),
            Err(TerrainError::EmptyGrid { cols: 0, rows: 10 })
        );
        assert_eq!(GridBounds::new(5, 2, 0, 1).tile_count(), 0);
    }

    #[test]
    fn test_tile_offset_overflow_rejected() {
        let config = RegionConfig {
            grid: GridBounds::sized(2, 2),
            tile_offset: TileCoord::new(i32::MAX, 0),
            ..RegionConfig::ridge()
        };
        assert_eq!(
            config.validate(),
            Err(TerrainError::TileOffsetOverflow { col: i32::MAX, row: 0 })
        );

        // The last column lands exactly on i32::MAX.
        let config = RegionConfig {
            grid: GridBounds::sized(2, 2),
            tile_offset: TileCoord::new(i32::MAX - 1, 0),
            ..RegionConfig::ridge()
        };
        assert!(config.validate().is_ok());

        let config = RegionConfig {
            grid: GridBounds::new(0, 1, -3, 0),
            tile_offset: TileCoord::new(0, i32::MIN + 2),
            ..RegionConfig::ridge()
        };
        assert!(matches!(
            config.validate(),
            Err(TerrainError::TileOffsetOverflow { .. })
        ));
    }

    #[test]
    fn test_empty_radial_table_rejected() {
        let mut config = RegionConfig::round_mountain(TileCoord::new(0, 0));
        if let ShapingPolicy::Radial(radial) = &mut config.policy {
            radial.bands = BandTable::default();
        }
        assert_eq!(config.validate(), Err(TerrainError::EmptyRadialBands));
    }

    #[test]
    fn test_bad_outer_divisor_rejected() {
        let mut config = RegionConfig::ridge();
        if let ShapingPolicy::Banded(banded) = &mut config.policy {
            banded.outer_divisor = 0.0;
        }
        assert!(matches!(
            config.validate(),
            Err(TerrainError::InvalidDivisor { index: 5, .. })
        ));
    }

    #[test]
    fn test_distance_gate_needs_radial_policy() {
        let config = RegionConfig {
            mode: ClassificationMode::mountain_gates(),
            ..RegionConfig::ridge()
        };
        assert_eq!(
            config.validate(),
            Err(TerrainError::DistanceGateWithoutRadialPolicy)
        );
    }

    #[test]
    fn test_invalid_scalars_rejected() {
        let config = RegionConfig {
            max_height: 0.0,
            ..RegionConfig::ridge()
        };
        assert_eq!(config.validate(), Err(TerrainError::InvalidMaxHeight(0.0)));

        let config = RegionConfig {
            exponent: f64::NAN,
            ..RegionConfig::ridge()
        };
        assert!(matches!(config.validate(), Err(TerrainError::InvalidExponent(_))));

        let config = RegionConfig {
            policy: ShapingPolicy::Flat { height: -1.0 },
            ..RegionConfig::ridge()
        };
        assert_eq!(config.validate(), Err(TerrainError::InvalidFlatHeight(-1.0)));
    }

    #[test]
    fn test_region_config_ron_roundtrip() {
        let config = RegionConfig::round_mountain(TileCoord::new(3, -4));
        let text = ron::to_string(&config).unwrap();
        let parsed: RegionConfig = ron::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_fields_fall_back_to_ridge() {
        let parsed: RegionConfig = ron::from_str("(name: \"custom\", max_height: 4.0)").unwrap();
        assert_eq!(parsed.name, "custom");
        assert_eq!(parsed.max_height, 4.0);
        assert_eq!(parsed.grid, RegionConfig::ridge().grid);
    }
}
