//! Interleaved vertex format for merged terrain surfaces.
//!
//! Layout (32 bytes total):
//!
//! | Offset | Size | Field    |
//! |--------|------|----------|
//! | 0      | 12   | position |
//! | 12     | 12   | normal   |
//! | 24     | 8    | uv       |

use glam::{Affine3A, Vec3};

/// A single vertex of a merged terrain surface, ready for GPU upload.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TerrainVertex {
    /// Position in patch (or world, after transform) coordinates.
    pub position: [f32; 3],
    /// Unit face normal.
    pub normal: [f32; 3],
    /// Texture coordinates in `[0, 1]`; the material's repeat factor tiles them.
    pub uv: [f32; 2],
}

static_assertions::assert_eq_size!(TerrainVertex, [u8; 32]);

impl TerrainVertex {
    /// Construct a vertex from glam vectors.
    pub fn new(position: Vec3, normal: Vec3, uv: [f32; 2]) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            uv,
        }
    }

    /// Position as a glam vector.
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    /// Normal as a glam vector.
    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }

    /// Apply a rigid transform. Normals are rotated and renormalized.
    pub fn transform(&mut self, transform: &Affine3A) {
        self.position = transform.transform_point3(self.position()).to_array();
        self.normal = transform
            .transform_vector3(self.normal())
            .normalize_or_zero()
            .to_array();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_vertex_casts_to_bytes() {
        let verts = [TerrainVertex::new(Vec3::ONE, Vec3::Y, [0.5, 0.5]); 3];
        let bytes: &[u8] = bytemuck::cast_slice(&verts);
        assert_eq!(bytes.len(), 96);
    }

    #[test]
    fn test_transform_rotates_normal() {
        let mut v = TerrainVertex::new(Vec3::new(1.0, 0.0, 0.0), Vec3::X, [0.0, 0.0]);
        let t = Affine3A::from_rotation_y(PI);
        v.transform(&t);
        assert!((v.position() - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-5);
        assert!((v.normal() - Vec3::NEG_X).length() < 1e-5);
    }

    #[test]
    fn test_translation_leaves_normal_unchanged() {
        let mut v = TerrainVertex::new(Vec3::ZERO, Vec3::Y, [0.0, 0.0]);
        v.transform(&Affine3A::from_translation(Vec3::new(3.0, 4.0, 5.0)));
        assert_eq!(v.position, [3.0, 4.0, 5.0]);
        assert_eq!(v.normal, [0.0, 1.0, 0.0]);
    }
}
