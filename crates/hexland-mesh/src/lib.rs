//! Mesh data structures for batched hex terrain: vertex format, prism geometry,
//! merge-only surface buffers, and bounding boxes.

pub mod bounds;
pub mod hex_prism;
pub mod surface_mesh;
pub mod vertex;

pub use bounds::Aabb;
pub use hex_prism::{
    HEX_PRISM_INDICES, HEX_PRISM_TRIANGLES, HEX_PRISM_VERTICES, HEX_RADIUS, HEX_SIDES,
    push_hex_prism,
};
pub use surface_mesh::SurfaceMesh;
pub use vertex::TerrainVertex;
