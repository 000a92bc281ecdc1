//! Rigid whole-patch transform applied after finalization.

use glam::{Affine3A, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Rotation about the vertical axis followed by a translation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatchTransform {
    /// Counter-clockwise rotation about +Y, in degrees.
    pub rotation_y_degrees: f32,
    /// Translation applied after the rotation.
    pub translation: [f32; 3],
}

impl Default for PatchTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PatchTransform {
    pub const IDENTITY: Self = Self {
        rotation_y_degrees: 0.0,
        translation: [0.0; 3],
    };

    pub const fn new(rotation_y_degrees: f32, translation: [f32; 3]) -> Self {
        Self {
            rotation_y_degrees,
            translation,
        }
    }

    pub const fn translation(x: f32, y: f32, z: f32) -> Self {
        Self::new(0.0, [x, y, z])
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    pub fn to_affine(&self) -> Affine3A {
        Affine3A::from_rotation_translation(
            Quat::from_rotation_y(self.rotation_y_degrees.to_radians()),
            Vec3::from_array(self.translation),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_turn_then_translate() {
        let t = PatchTransform::new(180.0, [50.0, 0.0, 50.0]);
        let p = t.to_affine().transform_point3(Vec3::new(10.0, 0.0, 5.0));
        assert!(p.abs_diff_eq(Vec3::new(40.0, 0.0, 45.0), 1e-4), "{p}");
    }

    #[test]
    fn test_quarter_turn_maps_x_to_negative_z() {
        let t = PatchTransform::new(90.0, [0.0; 3]);
        let p = t.to_affine().transform_point3(Vec3::X);
        assert!(p.abs_diff_eq(Vec3::NEG_Z, 1e-6), "{p}");
    }

    #[test]
    fn test_identity() {
        assert!(PatchTransform::default().is_identity());
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(PatchTransform::IDENTITY.to_affine().transform_point3(p), p);
    }
}
