//! Hexagonal prism geometry.
//!
//! A prism is a flat-shaded 6-sided cylinder whose base sits at `y = 0` and
//! whose top sits at `y = height`. Ring vertices lie at angles `k * 60°`
//! measured from +Z towards +X, so a vertex (not an edge) points along +Z.
//!
//! Each prism emits 6 side quads plus a triangle fan per cap:
//!
//! | Part   | Vertices | Triangles |
//! |--------|----------|-----------|
//! | sides  | 24       | 12        |
//! | top    | 7        | 6         |
//! | bottom | 7        | 6         |

use std::f32::consts::TAU;

use glam::{Vec2, Vec3};

use crate::surface_mesh::SurfaceMesh;
use crate::vertex::TerrainVertex;

/// Number of sides of every terrain prism.
pub const HEX_SIDES: usize = 6;

/// Circumradius of a terrain prism in world units.
pub const HEX_RADIUS: f32 = 1.0;

/// Vertices emitted per prism.
pub const HEX_PRISM_VERTICES: usize = HEX_SIDES * 4 + 2 * (HEX_SIDES + 1);

/// Triangles emitted per prism.
pub const HEX_PRISM_TRIANGLES: usize = HEX_SIDES * 2 + 2 * HEX_SIDES;

/// Indices emitted per prism.
pub const HEX_PRISM_INDICES: usize = HEX_PRISM_TRIANGLES * 3;

fn ring_direction(k: usize) -> Vec3 {
    let theta = k as f32 * TAU / HEX_SIDES as f32;
    Vec3::new(theta.sin(), 0.0, theta.cos())
}

fn cap_uv(dir: Vec3) -> [f32; 2] {
    [dir.x * 0.5 + 0.5, dir.z * 0.5 + 0.5]
}

/// Append one hex prism standing on `y = 0` at horizontal position `center`
/// (x, z) to `mesh`.
///
/// Degenerate heights are emitted as-is; callers skip zero-height tiles.
pub fn push_hex_prism(mesh: &mut SurfaceMesh, center: Vec2, height: f32, radius: f32) {
    let origin = Vec3::new(center.x, 0.0, center.y);
    let up = Vec3::new(0.0, height, 0.0);

    mesh.reserve(HEX_PRISM_VERTICES, HEX_PRISM_INDICES);

    // Sides: one flat quad per edge.
    for k in 0..HEX_SIDES {
        let d0 = ring_direction(k);
        let d1 = ring_direction(k + 1);
        let normal = ((d0 + d1) * 0.5).normalize();
        let u0 = k as f32 / HEX_SIDES as f32;
        let u1 = (k + 1) as f32 / HEX_SIDES as f32;

        let top0 = origin + d0 * radius + up;
        let bottom0 = origin + d0 * radius;
        let bottom1 = origin + d1 * radius;
        let top1 = origin + d1 * radius + up;

        let base = mesh.vertex_count() as u32;
        mesh.push_vertex(TerrainVertex::new(top0, normal, [u0, 1.0]));
        mesh.push_vertex(TerrainVertex::new(bottom0, normal, [u0, 0.0]));
        mesh.push_vertex(TerrainVertex::new(bottom1, normal, [u1, 0.0]));
        mesh.push_vertex(TerrainVertex::new(top1, normal, [u1, 1.0]));
        mesh.push_triangle(base, base + 1, base + 3);
        mesh.push_triangle(base + 1, base + 2, base + 3);
    }

    // Caps: a fan around a center vertex.
    for (y_offset, normal) in [(up, Vec3::Y), (Vec3::ZERO, Vec3::NEG_Y)] {
        let center_index = mesh.vertex_count() as u32;
        mesh.push_vertex(TerrainVertex::new(origin + y_offset, normal, [0.5, 0.5]));
        for k in 0..HEX_SIDES {
            let dir = ring_direction(k);
            mesh.push_vertex(TerrainVertex::new(
                origin + y_offset + dir * radius,
                normal,
                cap_uv(dir),
            ));
        }
        for k in 0..HEX_SIDES as u32 {
            let a = center_index + 1 + k;
            let b = center_index + 1 + (k + 1) % HEX_SIDES as u32;
            if normal.y > 0.0 {
                mesh.push_triangle(center_index, a, b);
            } else {
                mesh.push_triangle(center_index, b, a);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_normal(mesh: &SurfaceMesh, tri: usize) -> Vec3 {
        let i = &mesh.indices[tri * 3..tri * 3 + 3];
        let a = mesh.vertices[i[0] as usize].position();
        let b = mesh.vertices[i[1] as usize].position();
        let c = mesh.vertices[i[2] as usize].position();
        (b - a).cross(c - a)
    }

    #[test]
    fn test_prism_counts() {
        let mut mesh = SurfaceMesh::new();
        push_hex_prism(&mut mesh, Vec2::ZERO, 2.0, HEX_RADIUS);
        assert_eq!(mesh.vertex_count(), HEX_PRISM_VERTICES);
        assert_eq!(mesh.triangle_count(), HEX_PRISM_TRIANGLES);
        assert_eq!(mesh.indices.len(), HEX_PRISM_INDICES);
        assert_eq!(HEX_PRISM_TRIANGLES, 24);
    }

    #[test]
    fn test_prism_spans_ground_to_height() {
        let mut mesh = SurfaceMesh::new();
        push_hex_prism(&mut mesh, Vec2::new(10.0, 5.0), 3.5, HEX_RADIUS);
        let bounds = mesh.bounds().unwrap();
        assert!((bounds.min.y - 0.0).abs() < 1e-6);
        assert!((bounds.max.y - 3.5).abs() < 1e-6);
        // Vertex points along +Z, flat edges face +/-X.
        assert!((bounds.max.z - 6.0).abs() < 1e-5);
        assert!((bounds.min.z - 4.0).abs() < 1e-5);
        let half_width = 3.0_f32.sqrt() / 2.0;
        assert!((bounds.max.x - (10.0 + half_width)).abs() < 1e-5);
    }

    #[test]
    fn test_all_triangles_face_outward() {
        let mut mesh = SurfaceMesh::new();
        push_hex_prism(&mut mesh, Vec2::ZERO, 1.0, HEX_RADIUS);
        let centroid = Vec3::new(0.0, 0.5, 0.0);
        for tri in 0..mesh.triangle_count() {
            let i = &mesh.indices[tri * 3..tri * 3 + 3];
            let face_center = (mesh.vertices[i[0] as usize].position()
                + mesh.vertices[i[1] as usize].position()
                + mesh.vertices[i[2] as usize].position())
                / 3.0;
            let n = triangle_normal(&mesh, tri);
            assert!(
                n.dot(face_center - centroid) > 0.0,
                "triangle {tri} winds inward"
            );
        }
    }

    #[test]
    fn test_stored_normals_match_winding() {
        let mut mesh = SurfaceMesh::new();
        push_hex_prism(&mut mesh, Vec2::ZERO, 1.0, HEX_RADIUS);
        for tri in 0..mesh.triangle_count() {
            let n = triangle_normal(&mesh, tri).normalize();
            let stored = mesh.vertices[mesh.indices[tri * 3] as usize].normal();
            assert!(n.dot(stored) > 0.99, "triangle {tri}: {n} vs {stored}");
        }
    }
}
