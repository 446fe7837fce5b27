//! Command-line argument parsing.

use clap::Parser;

use wavefield::params::{ExportConfig, GridParams, SurfacePreset, WaveParams};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "Wavefield")]
#[command(about = "Headless procedural water-surface simulator", long_about = None)]
pub struct Args {
    /// Surface preset: glass, perlin (default), hashed, modsine, jitter, chop
    #[arg(long, value_name = "PRESET", default_value = "perlin")]
    pub preset: String,

    /// Number of frames to simulate
    #[arg(long, value_name = "N", default_value_t = 100)]
    pub frames: usize,

    /// Plane segments per side (vertices per side = this + 1)
    #[arg(long, value_name = "N", default_value_t = 100)]
    pub segments: usize,

    /// Plane extent in world units (width = height)
    #[arg(long, value_name = "UNITS", default_value_t = 5.0)]
    pub extent: f32,

    /// Seed for the per-vertex jitter table
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Export grayscale heightmaps under this directory
    #[arg(long, value_name = "DIR")]
    pub export: Option<String>,

    /// Write every Nth frame when exporting
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub stride: usize,
}

impl Args {
    /// Parse the surface preset from command-line arguments.
    pub fn parse_surface_preset(&self) -> WaveParams {
        let preset = match self.preset.to_lowercase().as_str() {
            "glass" => {
                println!("Surface: Glass (noise terms off)");
                SurfacePreset::Glass
            }
            "perlin" => {
                println!("Surface: Perlin (1-D Perlin phase modulation)");
                SurfacePreset::Perlin
            }
            "hashed" => {
                println!("Surface: Hashed (lattice-hash phase modulation)");
                SurfacePreset::Hashed
            }
            "modsine" => {
                println!("Surface: ModSine (modulo-sine phase modulation)");
                SurfacePreset::ModSine
            }
            "jitter" => {
                println!("Surface: Jitter (per-vertex desynchronization)");
                SurfacePreset::Jitter
            }
            "chop" => {
                println!("Surface: Chop (hash + perlin + jitter)");
                SurfacePreset::Chop
            }
            other => {
                eprintln!("Warning: Unknown preset '{}', using perlin", other);
                SurfacePreset::Perlin
            }
        };
        preset.params()
    }

    /// Grid geometry from the command-line arguments.
    pub fn grid_params(&self) -> GridParams {
        GridParams {
            width: self.extent,
            height: self.extent,
            width_segments: self.segments,
            height_segments: self.segments,
            jitter_seed: self.seed,
        }
    }

    /// Create export configuration if an output directory was given.
    pub fn create_export_config(&self) -> Option<ExportConfig> {
        self.export.as_ref().map(|dir| {
            let mut config = ExportConfig::new(self.frames);
            config.output_dir = dir.clone();
            config.stride = self.stride.max(1);

            std::fs::create_dir_all(config.frames_dir())
                .expect("Failed to create frames directory");

            config
        })
    }
}
