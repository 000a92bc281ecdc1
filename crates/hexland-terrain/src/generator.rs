//! Terrain patch generation: sample, classify, merge, finalize, transform.

use std::collections::HashSet;

use noise::{NoiseFn, Simplex};
use tracing::{debug, info, warn};

use crate::error::TerrainError;
use crate::height_field::HeightFieldSampler;
use crate::layout::TileCoord;
use crate::patch::{PatchBuilder, TerrainPatch};
use crate::region::RegionConfig;

/// Generates terrain patches from region configurations.
///
/// Each call to [`TerrainGenerator::generate`] runs a complete, independent
/// pass with fresh accumulators. The generator holds no mutable state, so
/// repeated calls with the same region produce identical patches.
pub struct TerrainGenerator<N = Simplex> {
    noise: N,
}

impl TerrainGenerator<Simplex> {
    /// Generator backed by seeded simplex noise.
    pub fn with_seed(seed: u32) -> Self {
        Self::new(Simplex::new(seed))
    }
}

impl<N: NoiseFn<f64, 2>> TerrainGenerator<N> {
    pub fn new(noise: N) -> Self {
        Self { noise }
    }

    pub fn noise(&self) -> &N {
        &self.noise
    }

    /// Generate one patch over the region's whole grid.
    pub fn generate(&self, region: &RegionConfig) -> Result<TerrainPatch, TerrainError> {
        self.generate_tiles(region, region.grid.tiles())
    }

    /// Generate one patch, visiting local tiles in the given order.
    ///
    /// Tiles outside the region grid are ignored, and a tile listed more than
    /// once is sampled only the first time. The resulting surfaces hold the
    /// same triangles whatever the order; only triangle order differs.
    pub fn generate_tiles(
        &self,
        region: &RegionConfig,
        tiles: impl IntoIterator<Item = TileCoord>,
    ) -> Result<TerrainPatch, TerrainError> {
        region.validate()?;

        let _span = tracing::debug_span!("generate_patch", region = %region.name).entered();
        let sampler = HeightFieldSampler::new(&self.noise, region);
        let mut builder = PatchBuilder::new(region.classifier());
        let mut visited = HashSet::with_capacity(region.grid.tile_count());
        let mut skipped = 0usize;

        for local in tiles.into_iter().filter(|t| region.grid.contains(*t)) {
            if !visited.insert(local) {
                continue;
            }
            match sampler.sample(local) {
                Some(sample) => {
                    builder.add(&sample);
                }
                None => skipped += 1,
            }
        }

        let patch = builder
            .finish(region.name.clone(), &region.materials)
            .transformed(&region.transform);

        let stats = patch.stats();
        if stats.total_tiles() == 0 {
            warn!(region = %region.name, skipped, "terrain patch has no prisms");
        }
        info!(
            region = %region.name,
            tiles = stats.total_tiles(),
            skipped,
            triangles = stats.total_triangles(),
            draw_calls = patch.draw_calls(),
            "generated terrain patch"
        );
        for class in stats.classes {
            debug!(
                region = %region.name,
                class = %class.class,
                tiles = class.tiles,
                triangles = class.triangles,
                "class surface"
            );
        }

        Ok(patch)
    }

    /// Generate several patches. Every region is validated before any
    /// generation starts, so a bad region yields no patches at all.
    pub fn generate_world(
        &self,
        regions: &[RegionConfig],
    ) -> Result<Vec<TerrainPatch>, TerrainError> {
        for region in regions {
            region.validate()?;
        }
        regions.iter().map(|region| self.generate(region)).collect()
    }
}

/// Generate one patch with seeded simplex noise.
pub fn generate_terrain_patch(
    region: &RegionConfig,
    seed: u32,
) -> Result<TerrainPatch, TerrainError> {
    TerrainGenerator::with_seed(seed).generate(region)
}
