//! PNG export of debug images.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use hexland_terrain::TerrainPatch;
use hexland_terrain::debug_viz::{DebugImage, render_height_map, render_material_map};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to create {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: png::EncodingError,
    },
}

/// Encode an RGBA debug image as an 8-bit PNG.
pub fn write_png(image: &DebugImage, path: &Path) -> Result<(), ExportError> {
    let encode_err = |source| ExportError::Encode {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut encoder = png::Encoder::new(BufWriter::new(file), image.width, image.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().map_err(encode_err)?;
    writer.write_image_data(&image.pixels).map_err(encode_err)?;
    writer.finish().map_err(encode_err)
}

/// File stem for a patch: its position in the scene plus its name reduced to
/// `[A-Za-z0-9_-]`, so every patch gets its own file inside the output dir.
pub fn file_stem(index: usize, name: &str) -> String {
    let safe: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{index:02}_{safe}")
}

/// Write `<stem>_materials.png` (and optionally `<stem>_heights.png`) for the
/// `index`-th patch. Patches without tiles produce no files.
pub fn export_patch_maps(
    patch: &TerrainPatch,
    index: usize,
    dir: &Path,
    height_map: bool,
) -> Result<Vec<PathBuf>, ExportError> {
    if patch.tile_count() == 0 {
        return Ok(Vec::new());
    }
    std::fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let stem = file_stem(index, &patch.name);
    let mut written = Vec::new();
    let materials = dir.join(format!("{stem}_materials.png"));
    write_png(&render_material_map(patch), &materials)?;
    written.push(materials);

    if height_map {
        let heights = dir.join(format!("{stem}_heights.png"));
        write_png(&render_height_map(patch), &heights)?;
        written.push(heights);
    }
    Ok(written)
}
