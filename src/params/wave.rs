//! Wave displacement parameters and named surface presets.

/// Which modulo-sine formula the mod-sine term uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModSineVariant {
    /// Fractional part of `1e6 * sin(ix * iy)`, stretched to [0, 10).
    ScaledFract,

    /// `|sin((ix + iy) * sine_freq_deg / 57.29577951)|` minus its
    /// truncation.
    Degrees,
}

/// Tunable displacement parameters.
///
/// A control surface may mutate these freely between frames; the driver
/// reads one immutable snapshot per frame, so a pass can never observe a
/// half-applied change.
#[derive(Debug, Clone)]
pub struct WaveParams {
    /// Frequency multiplier of the first oscillator (dimensionless)
    pub speed: f64,

    /// Frequency multiplier of the second oscillator
    pub speed2: f64,

    /// Scale applied to the lattice hash before it feeds the noise terms
    pub noise_scale: f64,

    /// Global height amplitude (world units)
    pub amplitude: f64,

    /// Amplitude of the first oscillator
    pub amplitude1: f64,

    /// Amplitude of the second oscillator
    pub amplitude2: f64,

    /// Spatial frequency of the degree-based mod-sine variant (degrees)
    pub sine_freq_deg: f64,

    /// Mix the lattice-hash term into the oscillator phase
    pub hash_enabled: bool,

    /// Mix the mod-sine term into the oscillator phase
    pub mod_sine_enabled: bool,

    /// Mix the 1-D Perlin term into the oscillator phase
    pub perlin_enabled: bool,

    /// Add the fixed per-vertex jitter oscillation
    pub jitter_enabled: bool,

    /// Formula used by the mod-sine term
    pub mod_sine_variant: ModSineVariant,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            speed: 2.0,
            speed2: 1.0,
            noise_scale: 1.0,
            amplitude: 1.0 / 50.0,
            amplitude1: 1.0,
            amplitude2: 1.0,
            sine_freq_deg: 1.0,
            hash_enabled: false,
            mod_sine_enabled: false,
            perlin_enabled: true,
            jitter_enabled: false,
            mod_sine_variant: ModSineVariant::ScaledFract,
        }
    }
}

/// Named parameter presets reproducing the observed surface behaviors.
///
/// Each preset is a knob subset of the one generalized field, not its own
/// code path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfacePreset {
    /// Every noise term off: two phase-locked sines, a glassy swell
    Glass,

    /// 1-D Perlin phase modulation only (the default surface)
    Perlin,

    /// Lattice-hash phase modulation only: cell-by-cell chop
    Hashed,

    /// Mod-sine phase modulation only
    ModSine,

    /// Glassy swell plus per-vertex jitter desynchronization
    Jitter,

    /// Hash + perlin + jitter together: the roughest surface
    Chop,
}

impl SurfacePreset {
    /// Build the parameter set for this preset.
    pub fn params(self) -> WaveParams {
        let mut p = WaveParams {
            perlin_enabled: false,
            ..WaveParams::default()
        };
        match self {
            SurfacePreset::Glass => {}
            SurfacePreset::Perlin => p.perlin_enabled = true,
            SurfacePreset::Hashed => p.hash_enabled = true,
            SurfacePreset::ModSine => p.mod_sine_enabled = true,
            SurfacePreset::Jitter => p.jitter_enabled = true,
            SurfacePreset::Chop => {
                p.hash_enabled = true;
                p.perlin_enabled = true;
                p.jitter_enabled = true;
            }
        }
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let p = WaveParams::default();
        assert_eq!(p.speed, 2.0);
        assert_eq!(p.speed2, 1.0);
        assert_eq!(p.noise_scale, 1.0);
        assert_eq!(p.amplitude, 0.02);
        assert!(p.perlin_enabled);
        assert!(!p.hash_enabled);
        assert!(!p.mod_sine_enabled);
        assert!(!p.jitter_enabled);
    }

    #[test]
    fn test_presets_toggle_expected_terms() {
        let glass = SurfacePreset::Glass.params();
        assert!(!glass.hash_enabled && !glass.mod_sine_enabled && !glass.perlin_enabled);

        let perlin = SurfacePreset::Perlin.params();
        assert!(perlin.perlin_enabled && !perlin.hash_enabled);

        let hashed = SurfacePreset::Hashed.params();
        assert!(hashed.hash_enabled && !hashed.perlin_enabled);

        let modsine = SurfacePreset::ModSine.params();
        assert!(modsine.mod_sine_enabled);

        let jitter = SurfacePreset::Jitter.params();
        assert!(jitter.jitter_enabled && !jitter.perlin_enabled);

        let chop = SurfacePreset::Chop.params();
        assert!(chop.hash_enabled && chop.perlin_enabled && chop.jitter_enabled);
    }
}
