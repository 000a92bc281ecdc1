//! Terrain configuration errors.

/// Errors raised when a region configuration is rejected before generation.
///
/// Validation runs before any tile is sampled, so an error never leaves a
/// partially built patch behind.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TerrainError {
    /// The grid bounds contain no tiles.
    #[error("region grid is empty: {cols} columns x {rows} rows")]
    EmptyGrid { cols: i64, rows: i64 },

    /// Band upper bounds must strictly increase.
    #[error("band {index} bound {bound} does not exceed previous bound {previous}")]
    BandOrder {
        index: usize,
        bound: f64,
        previous: f64,
    },

    /// A band divisor is zero, negative, or not finite.
    #[error("band {index} has invalid divisor {divisor}")]
    InvalidDivisor { index: usize, divisor: f64 },

    /// A radial policy needs at least one band, or every tile would be skipped.
    #[error("radial policy has no bands")]
    EmptyRadialBands,

    /// The maximum height must be finite and positive.
    #[error("invalid max height {0}")]
    InvalidMaxHeight(f64),

    /// The shaping exponent must be finite and positive.
    #[error("invalid shaping exponent {0}")]
    InvalidExponent(f64),

    /// A flat policy height must be finite and non-negative.
    #[error("invalid flat height {0}")]
    InvalidFlatHeight(f64),

    /// Snow must sit at or above rock.
    #[error("snow threshold {snow} is below rock threshold {rock}")]
    InvalidThresholds { rock: f64, snow: f64 },

    /// Distance gates must be non-negative with the snow radius inside the rock radius.
    #[error("invalid distance gates: inner radius {inner}, mid radius {mid}")]
    InvalidRadii { inner: f64, mid: f64 },

    /// Some grid tile shifted by the tile offset falls outside the `i32` range.
    #[error("tile offset ({col}, {row}) moves the grid outside the i32 range")]
    TileOffsetOverflow { col: i32, row: i32 },

    /// Distance-gated classification needs a policy that measures distance.
    #[error("distance-gated classification requires a radial shaping policy")]
    DistanceGateWithoutRadialPolicy,
}
