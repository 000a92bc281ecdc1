//! Per-class accumulation of hex prisms and the finalized terrain patch.

use glam::{Affine3A, Vec2, Vec3};
use hexland_mesh::{Aabb, HEX_RADIUS, SurfaceMesh, push_hex_prism};

use crate::classify::{MaterialClass, TileClassifier};
use crate::height_field::HeightSample;
use crate::layout::TileCoord;
use crate::material::{MaterialBinding, MaterialSet};
use crate::transform::PatchTransform;

/// A tile that produced a prism, with its final placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedTile {
    pub local: TileCoord,
    pub coord: TileCoord,
    /// Base center of the prism; follows whole-patch transforms.
    pub position: Vec3,
    pub height: f64,
    pub class: MaterialClass,
}

/// The three merge-only accumulators of one generation pass.
///
/// A builder is created per pass and consumed by [`PatchBuilder::finish`], so
/// no geometry carries over between patches.
pub struct PatchBuilder {
    classifier: TileClassifier,
    accumulators: [SurfaceMesh; 3],
    /// Transient prism, rebuilt for every tile and merged into its class.
    prism: SurfaceMesh,
    tile_counts: [usize; 3],
    tiles: Vec<PlacedTile>,
}

impl PatchBuilder {
    pub fn new(classifier: TileClassifier) -> Self {
        Self {
            classifier,
            accumulators: Default::default(),
            prism: SurfaceMesh::new(),
            tile_counts: [0; 3],
            tiles: Vec::new(),
        }
    }

    /// Classify one sampled tile and merge its prism into that class's accumulator.
    pub fn add(&mut self, sample: &HeightSample) -> MaterialClass {
        let class = self.classifier.classify(sample.height, sample.distance);
        let center = sample.world.as_vec2();

        self.prism.clear();
        push_hex_prism(&mut self.prism, center, sample.height as f32, HEX_RADIUS);
        self.accumulators[class.index()].merge(&self.prism);
        self.tile_counts[class.index()] += 1;
        self.tiles.push(PlacedTile {
            local: sample.local,
            coord: sample.coord,
            position: Vec3::new(center.x, 0.0, center.y),
            height: sample.height,
            class,
        });
        class
    }

    /// Number of tiles merged so far.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Wrap each accumulator in one surface bound to its material.
    ///
    /// Classes that received no tiles finalize to empty surfaces.
    pub fn finish(self, name: impl Into<String>, materials: &MaterialSet) -> TerrainPatch {
        let mut accumulators = self.accumulators;
        let tile_counts = self.tile_counts;
        let surfaces = MaterialClass::ALL.map(|class| MaterialSurface {
            class,
            material: materials.for_class(class).clone(),
            mesh: std::mem::take(&mut accumulators[class.index()]),
            tile_count: tile_counts[class.index()],
        });

        TerrainPatch {
            name: name.into(),
            surfaces,
            tiles: self.tiles,
            placement: Affine3A::IDENTITY,
        }
    }
}

/// One merged, textured surface: every prism of a single class.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialSurface {
    pub class: MaterialClass,
    pub material: MaterialBinding,
    pub mesh: SurfaceMesh,
    pub tile_count: usize,
}

impl MaterialSurface {
    pub fn is_empty(&self) -> bool {
        self.mesh.is_empty()
    }
}

/// Output of one generation pass: three surfaces moved as a rigid unit.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainPatch {
    pub name: String,
    /// Indexed by [`MaterialClass::index`].
    pub surfaces: [MaterialSurface; 3],
    /// Every tile that produced a prism, in traversal order.
    pub tiles: Vec<PlacedTile>,
    /// Accumulated whole-patch transform.
    pub placement: Affine3A,
}

impl TerrainPatch {
    pub fn surface(&self, class: MaterialClass) -> &MaterialSurface {
        &self.surfaces[class.index()]
    }

    pub fn snow(&self) -> &MaterialSurface {
        self.surface(MaterialClass::Snow)
    }

    pub fn rock(&self) -> &MaterialSurface {
        self.surface(MaterialClass::Rock)
    }

    pub fn grass(&self) -> &MaterialSurface {
        self.surface(MaterialClass::Grass)
    }

    /// Apply one rigid transform to all three surfaces and every tile.
    pub fn apply_transform(&mut self, transform: &PatchTransform) {
        if transform.is_identity() {
            return;
        }
        let affine = transform.to_affine();
        for surface in &mut self.surfaces {
            surface.mesh.transform(&affine);
        }
        for tile in &mut self.tiles {
            tile.position = affine.transform_point3(tile.position);
        }
        self.placement = affine * self.placement;
    }

    /// Builder-style [`TerrainPatch::apply_transform`].
    pub fn transformed(mut self, transform: &PatchTransform) -> Self {
        self.apply_transform(transform);
        self
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.surfaces.iter().map(|s| s.mesh.triangle_count()).sum()
    }

    /// Number of non-empty surfaces, i.e. draw calls needed.
    pub fn draw_calls(&self) -> usize {
        self.surfaces.iter().filter(|s| !s.is_empty()).count()
    }

    pub fn bounds(&self) -> Option<Aabb> {
        self.surfaces
            .iter()
            .filter_map(|s| s.mesh.bounds())
            .reduce(|a, b| a.union(&b))
    }

    pub fn stats(&self) -> PatchStats {
        PatchStats {
            classes: self.surfaces.each_ref().map(|s| ClassStats {
                class: s.class,
                tiles: s.tile_count,
                triangles: s.mesh.triangle_count(),
                bounds: s.mesh.bounds(),
            }),
        }
    }

    /// Tile centers projected to the ground plane.
    pub fn tile_centers(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.tiles.iter().map(|t| Vec2::new(t.position.x, t.position.z))
    }
}

/// Summary of one class's surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassStats {
    pub class: MaterialClass,
    pub tiles: usize,
    pub triangles: usize,
    pub bounds: Option<Aabb>,
}

/// Per-class summary of a patch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PatchStats {
    pub classes: [ClassStats; 3],
}

impl PatchStats {
    pub fn total_tiles(&self) -> usize {
        self.classes.iter().map(|c| c.tiles).sum()
    }

    pub fn total_triangles(&self) -> usize {
        self.classes.iter().map(|c| c.triangles).sum()
    }

    pub fn class(&self, class: MaterialClass) -> &ClassStats {
        &self.classes[class.index()]
    }
}
