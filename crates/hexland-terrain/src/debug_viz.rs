//! Debug visualization: top-down 2D images of generated patches.
//!
//! Each tile of a patch becomes one pixel, indexed by its layout coordinate,
//! so a patch can be inspected without a renderer.

mod image;
mod renderers;

pub use self::image::DebugImage;
pub use renderers::{TileRect, class_color, render_height_map, render_material_map};
