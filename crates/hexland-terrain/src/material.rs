//! Per-class material bindings passed through to the renderer.

use serde::{Deserialize, Serialize};

use crate::classify::MaterialClass;

/// One textured material. The texture path is opaque: it is never opened here,
/// so a missing or still-loading texture never blocks finalization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialBinding {
    /// Texture asset path.
    pub texture: String,
    /// Texture repeat factors (u, v).
    pub repeat: [f32; 2],
}

impl MaterialBinding {
    pub fn new(texture: impl Into<String>, repeat: f32) -> Self {
        Self {
            texture: texture.into(),
            repeat: [repeat, repeat],
        }
    }
}

/// Material bindings for all three classes of a patch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialSet {
    pub snow: MaterialBinding,
    pub rock: MaterialBinding,
    pub grass: MaterialBinding,
}

impl Default for MaterialSet {
    fn default() -> Self {
        Self {
            snow: MaterialBinding::new("textures/snow.jpg", 7.0),
            rock: MaterialBinding::new("textures/rock.jpg", 6.0),
            grass: MaterialBinding::new("textures/grass.jpg", 1.0),
        }
    }
}

impl MaterialSet {
    pub fn for_class(&self, class: MaterialClass) -> &MaterialBinding {
        match class {
            MaterialClass::Snow => &self.snow,
            MaterialClass::Rock => &self.rock,
            MaterialClass::Grass => &self.grass,
        }
    }
}
