//! Parameter definitions with documented semantics and defaults.
//!
//! All magic numbers of the surface simulation are extracted here with
//! documented meanings and tuned values as defaults.

mod export;
mod grid;
mod wave;

// Re-export all types
pub use export::ExportConfig;
pub use grid::GridParams;
pub use wave::{ModSineVariant, SurfacePreset, WaveParams};
