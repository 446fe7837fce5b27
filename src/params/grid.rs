//! Grid geometry parameters.

/// Plane-grid construction parameters.
#[derive(Debug, Clone)]
pub struct GridParams {
    /// Plane width in world units
    pub width: f32,

    /// Plane height in world units
    pub height: f32,

    /// Segment count along X (vertices per row = this + 1)
    pub width_segments: usize,

    /// Segment count along Y (vertices per column = this + 1)
    pub height_segments: usize,

    /// Seed for the per-vertex jitter table
    pub jitter_seed: u64,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            width: 5.0,
            height: 5.0,
            width_segments: 100,
            height_segments: 100,
            jitter_seed: 42,
        }
    }
}

impl GridParams {
    /// Total vertex count of the plane grid.
    pub fn vertex_count(&self) -> usize {
        (self.width_segments + 1) * (self.height_segments + 1)
    }

    /// True when the resampling traversal covers every vertex, i.e. the
    /// vertex count is a perfect square. Unequal segment counts leave the
    /// tail of the buffer at its last-set heights.
    pub fn is_fully_covered(&self) -> bool {
        let count = self.vertex_count();
        let side = (count as f64).sqrt().floor() as usize;
        side * side == count
    }

    /// Validate construction parameters.
    pub fn validate(&self) -> Result<(), String> {
        if self.width_segments == 0 || self.height_segments == 0 {
            return Err(format!(
                "segment counts must be > 0, got {}x{}",
                self.width_segments, self.height_segments
            ));
        }
        if !(self.width > 0.0) || !(self.height > 0.0) {
            return Err(format!(
                "plane extent must be > 0, got {}x{}",
                self.width, self.height
            ));
        }
        Ok(())
    }
}
