//! Per-vertex displacement field.
//!
//! Maps grid coordinates and the frame accumulator to a height offset:
//! two time-varying sine oscillators share a phase multiplier assembled
//! from whichever noise terms are enabled.

use crate::noise;
use crate::params::{ModSineVariant, WaveParams};

/// Divisor applied to the lattice hash before it feeds the noise terms.
const NOISE_INPUT_SCALE: f64 = 100.0;

/// Multiplier restoring Perlin output to the oscillators' phase range.
const PERLIN_PHASE_SCALE: f64 = 100.0;

/// Divisor applied to both oscillator speeds.
const SPEED_SCALE: f64 = 10.0;

/// Divisor applied to the per-vertex jitter term.
const JITTER_SCALE: f64 = 5.0;

/// Spread a 2-D lattice point into the hash sequence.
#[inline]
fn lattice_hash(ix: usize, iy: usize) -> i64 {
    noise::hash(noise::hash(iy as i64) + ix as i64)
}

/// Height of vertex `(ix, iy)` at frame time `t`.
///
/// Disabled noise terms contribute the neutral value 1, so with every flag
/// off both oscillators run at a fixed phase multiplier of 3. `jitter` is
/// the vertex's fixed random amplitude, read only when the jitter term is
/// enabled. Pure: identical inputs produce bit-identical output.
pub fn height_at(ix: usize, iy: usize, t: f64, jitter: f32, params: &WaveParams) -> f64 {
    let mods = if params.mod_sine_enabled {
        match params.mod_sine_variant {
            ModSineVariant::ScaledFract => noise::mod_sine((ix * iy) as f64),
            ModSineVariant::Degrees => {
                noise::mod_sine_deg(ix as f64, iy as f64, params.sine_freq_deg)
            }
        }
    } else {
        1.0
    };

    let hashed = if params.hash_enabled {
        lattice_hash(ix, iy) as f64 * params.noise_scale / NOISE_INPUT_SCALE
    } else {
        1.0
    };

    let perlin = if params.perlin_enabled {
        noise::perlin_1d(lattice_hash(ix, iy) as f64 * params.noise_scale / NOISE_INPUT_SCALE)
            * PERLIN_PHASE_SCALE
    } else {
        1.0
    };

    let phase = mods + hashed + perlin;
    let mut height = params.amplitude
        * (params.amplitude1 * (t * params.speed / SPEED_SCALE * phase).sin()
            * params.amplitude2
            * (t * params.speed2 / SPEED_SCALE * phase).sin());

    if params.jitter_enabled {
        height += params.amplitude * jitter as f64 * (t * params.speed).sin() / JITTER_SCALE;
    }

    height
}
