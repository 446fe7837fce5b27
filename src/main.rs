//! Wavefield - headless procedural water-surface simulator
//!
//! Displaces a plane-mesh grid once per frame with two sine oscillators
//! whose phase is modulated by hash, modulo-sine, and 1-D Perlin noise,
//! and optionally captures grayscale heightmaps of the animated surface.

mod cli;

use std::time::Instant;

use clap::Parser;
use image::{GrayImage, Luma};

use cli::Args;
use wavefield::surface::{SurfaceGrid, SurfaceSystem};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();

    println!("Wavefield - procedural water-surface simulator");
    let params = args.parse_surface_preset();
    let grid_params = args.grid_params();
    grid_params.validate()?;

    if !grid_params.is_fully_covered() {
        log::warn!(
            "vertex count {} is not a perfect square; trailing vertices stay unsampled",
            grid_params.vertex_count()
        );
    }

    let export = args.create_export_config();

    println!(
        "  Grid: {0}x{0} segments ({1} vertices)",
        args.segments,
        grid_params.vertex_count()
    );
    println!("  Frames: {}", args.frames);

    // Heights never exceed amplitude * (amplitude1 * amplitude2 + 1/5).
    let amp_bound = (params.amplitude * (params.amplitude1 * params.amplitude2 + 0.2))
        .max(f64::EPSILON) as f32;

    let mut system = SurfaceSystem::new(&grid_params, params);
    let mut min_height = f32::INFINITY;
    let mut max_height = f32::NEG_INFINITY;
    let mut exported = 0usize;

    let start = Instant::now();
    for n in 0..args.frames {
        system.advance();

        let (lo, hi) = system.grid.height_range();
        min_height = min_height.min(lo);
        max_height = max_height.max(hi);

        if system.grid.needs_upload() {
            if let Some(ref config) = export {
                if n % config.stride == 0 {
                    write_heightmap(&system.grid, amp_bound, &config.frame_path(n))?;
                    exported += 1;
                }
            }
            system.grid.clear_needs_upload();
        }

        if (n + 1) % 100 == 0 {
            log::info!("frame {} / {}", n + 1, args.frames);
        }
    }

    let elapsed = start.elapsed();
    println!("  Height range: [{:.5}, {:.5}]", min_height, max_height);
    if let Some(ref config) = export {
        println!("  Exported {} heightmaps to {}", exported, config.frames_dir());
    }
    println!("  Time: {:.2}ms", elapsed.as_secs_f64() * 1000.0);

    Ok(())
}

/// Write the grid's current heights as a grayscale PNG heightmap.
///
/// Maps [-amp_bound, amp_bound] to [0, 255]; pixel (ix, iy) reads the
/// vertex the sampler wrote at index `ix * side + iy`.
fn write_heightmap(
    grid: &SurfaceGrid,
    amp_bound: f32,
    path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let side = (grid.vertex_count() as f64).sqrt().floor() as u32;
    let mut img = GrayImage::new(side, side);

    for ix in 0..side {
        for iy in 0..side {
            let z = grid.vertices()[(ix * side + iy) as usize].position[2];
            let gray = ((z / amp_bound + 1.0) * 127.5).clamp(0.0, 255.0) as u8;
            img.put_pixel(ix, iy, Luma([gray]));
        }
    }

    img.save(path)?;
    Ok(())
}
