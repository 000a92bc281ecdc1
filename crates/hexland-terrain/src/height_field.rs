//! Height field sampling: coherent noise shaped by a power curve and scaled
//! by the region's band policy.
//!
//! For a local tile `(i, j)`:
//!
//! ```text
//! shaped = max(noise(i * 0.1, j * 0.1) + 1.5, 0) ^ exponent
//! height = shaped * max_height / divisor(band)
//! ```

use glam::DVec2;
use noise::NoiseFn;

use crate::layout::TileCoord;
use crate::region::{DistanceMetric, RegionConfig, ShapingPolicy};

/// Noise coordinate scale. Adjacent tiles sample noise 0.1 apart so heights
/// stay correlated.
pub const NOISE_SCALE: f64 = 0.1;

/// Added to raw noise (nominally in `[-1, 1]`) before the power curve.
pub const SHAPE_OFFSET: f64 = 1.5;

/// Offset and power-shape one raw noise value.
///
/// The base is clamped to zero first, so any input (including NaN or values
/// far outside `[-1, 1]`) yields a non-negative result.
pub fn shape_noise(raw: f64, exponent: f64) -> f64 {
    (raw + SHAPE_OFFSET).max(0.0).powf(exponent)
}

/// One sampled tile, ready for classification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightSample {
    /// Index inside the region grid (where noise was evaluated).
    pub local: TileCoord,
    /// Index in the shared hex layout (`local + tile_offset`).
    pub coord: TileCoord,
    /// World-space (x, z) of the tile center.
    pub world: DVec2,
    /// Prism height, always `> 0`.
    pub height: f64,
    /// Distance from the mountain center, for radial policies only.
    pub distance: Option<f64>,
}

/// Samples heights for the tiles of one region.
pub struct HeightFieldSampler<'a, N> {
    noise: &'a N,
    region: &'a RegionConfig,
}

impl<'a, N: NoiseFn<f64, 2>> HeightFieldSampler<'a, N> {
    pub fn new(noise: &'a N, region: &'a RegionConfig) -> Self {
        Self { noise, region }
    }

    /// Raw noise at a local tile.
    pub fn raw_noise(&self, local: TileCoord) -> f64 {
        self.noise.get([
            f64::from(local.col) * NOISE_SCALE,
            f64::from(local.row) * NOISE_SCALE,
        ])
    }

    /// Sample a local tile.
    ///
    /// Returns `None` when the tile is cut off by a radial policy or when its
    /// height comes out as zero; such tiles produce no prism.
    pub fn sample(&self, local: TileCoord) -> Option<HeightSample> {
        let coord = local.offset(self.region.tile_offset.col, self.region.tile_offset.row);
        let world = coord.to_world();

        let (height, distance) = match &self.region.policy {
            ShapingPolicy::Flat { height } => (*height, None),
            ShapingPolicy::Radial(radial) => {
                let center = DVec2::from_array(radial.center);
                let distance = match radial.metric {
                    DistanceMetric::Euclidean => world.distance(center),
                    DistanceMetric::Manhattan => {
                        (f64::from(local.col) - center.x).abs()
                            + (f64::from(local.row) - center.y).abs()
                    }
                };
                let divisor = radial.bands.divisor_for(distance)?;
                (self.scaled(local, divisor), Some(distance))
            }
            ShapingPolicy::Banded(banded) => {
                let divisor = banded
                    .bands
                    .divisor_for(f64::from(local.row))
                    .unwrap_or(banded.outer_divisor);
                (self.scaled(local, divisor), None)
            }
        };

        (height > 0.0).then_some(HeightSample {
            local,
            coord,
            world,
            height,
            distance,
        })
    }

    fn scaled(&self, local: TileCoord, divisor: f64) -> f64 {
        shape_noise(self.raw_noise(local), self.region.exponent) * self.region.max_height / divisor
    }
}
