//! Procedural hex terrain: noise-shaped height fields, material classification,
//! and per-material batched surfaces.
//!
//! Generation runs in three forward stages: a [`HeightFieldSampler`] turns tile
//! coordinates into heights, a [`TileClassifier`] assigns each tile a
//! [`MaterialClass`], and a [`PatchBuilder`] merges the prisms of each class into
//! one surface. [`TerrainGenerator`] drives all three for a [`RegionConfig`].

mod bands;
mod classify;
mod error;
mod generator;
mod height_field;
mod layout;
mod material;
mod patch;
mod region;
mod transform;

pub mod debug_viz;

pub use bands::{Band, BandTable};
pub use classify::{ClassThresholds, ClassificationMode, MaterialClass, TileClassifier};
pub use error::TerrainError;
pub use generator::{TerrainGenerator, generate_terrain_patch};
pub use height_field::{HeightFieldSampler, HeightSample, NOISE_SCALE, SHAPE_OFFSET, shape_noise};
pub use layout::{HEX_SPACING_X, HEX_SPACING_Z, TileCoord, tile_to_world};
pub use material::{MaterialBinding, MaterialSet};
pub use patch::{ClassStats, MaterialSurface, PatchBuilder, PatchStats, PlacedTile, TerrainPatch};
pub use region::{
    BandedPolicy, DistanceMetric, GridBounds, RadialPolicy, RegionConfig, ShapingPolicy,
};
pub use transform::PatchTransform;
