//! Generates the configured hex terrain scene and reports per-material stats.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p hexland-demo -- --seed 7 --debug-map ./maps` to also
//! write a material map PNG per patch.

mod export;

use std::process::ExitCode;

use clap::Parser;
use hexland_config::{CliArgs, Config, default_config_dir};
use hexland_terrain::{MaterialClass, TerrainGenerator, TerrainPatch};
use tracing::{error, info};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    hexland_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    if let Err(e) = config.validate() {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    info!(
        seed = config.terrain.seed,
        regions = config.terrain.regions.len(),
        "generating terrain"
    );
    let generator = TerrainGenerator::with_seed(config.terrain.seed);
    let patches = match generator.generate_world(&config.terrain.regions) {
        Ok(patches) => patches,
        Err(e) => {
            error!("terrain generation failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    for patch in &patches {
        report_patch(patch);
    }

    if let Some(dir) = &config.debug.material_map_dir {
        for (index, patch) in patches.iter().enumerate() {
            match export::export_patch_maps(patch, index, dir, config.debug.height_maps) {
                Ok(paths) => {
                    for path in paths {
                        info!("wrote {}", path.display());
                    }
                }
                Err(e) => {
                    error!("{e}");
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    let total_triangles: usize = patches.iter().map(TerrainPatch::triangle_count).sum();
    let draw_calls: usize = patches.iter().map(TerrainPatch::draw_calls).sum();
    info!(
        patches = patches.len(),
        triangles = total_triangles,
        draw_calls,
        "scene ready"
    );
    ExitCode::SUCCESS
}

fn report_patch(patch: &TerrainPatch) {
    let stats = patch.stats();
    for class in MaterialClass::ALL {
        let class_stats = stats.class(class);
        let surface = patch.surface(class);
        match class_stats.bounds {
            Some(bounds) => info!(
                patch = %patch.name,
                class = %class,
                tiles = class_stats.tiles,
                triangles = class_stats.triangles,
                vertex_bytes = surface.mesh.vertex_bytes().len(),
                texture = %surface.material.texture,
                "surface spans {:?}..{:?} (size {:?})",
                bounds.min,
                bounds.max,
                bounds.size()
            ),
            None => info!(patch = %patch.name, class = %class, "surface empty"),
        }
    }
}
