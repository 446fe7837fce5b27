//! Surface grid mesh with per-frame procedural displacement.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::field;
use crate::params::{GridParams, WaveParams};

/// Vertex data for the surface mesh (position only; everything else is
/// owned by the rendering collaborator).
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

/// Write access to the Z channel of a stride-3 position buffer.
///
/// The sampler never owns vertex storage; it borrows Z-slot access through
/// this capability. [`FlatPositions`] adapts any flat float slice, and
/// [`SurfaceGrid`] implements it over its own vertices.
pub trait PositionBuffer {
    fn vertex_count(&self) -> usize;
    fn z(&self, index: usize) -> f32;
    fn set_z(&mut self, index: usize, z: f32);
}

/// Adapter over a flat `[x0, y0, z0, x1, y1, z1, ...]` float slice.
pub struct FlatPositions<'a>(pub &'a mut [f32]);

impl PositionBuffer for FlatPositions<'_> {
    fn vertex_count(&self) -> usize {
        self.0.len() / 3
    }

    fn z(&self, index: usize) -> f32 {
        self.0[3 * index + 2]
    }

    fn set_z(&mut self, index: usize, z: f32) {
        self.0[3 * index + 2] = z;
    }
}

/// Resample every height of `buffer` for frame time `t`.
///
/// Traverses a side x side grid, side = floor(sqrt(vertex count)), in
/// row-major order (`ix` outer, `iy` inner, vertex index `ix*side + iy`).
/// A non-square vertex count leaves the trailing vertices at their
/// last-set heights; downstream visuals depend on that truncation.
pub fn sample_into(
    buffer: &mut impl PositionBuffer,
    t: f64,
    jitter: &[f32],
    params: &WaveParams,
) {
    let side = (buffer.vertex_count() as f64).sqrt().floor() as usize;
    for ix in 0..side {
        for iy in 0..side {
            let idx = ix * side + iy;
            let j = jitter.get(idx).copied().unwrap_or(0.0);
            buffer.set_z(idx, field::height_at(ix, iy, t, j, params) as f32);
        }
    }
}

/// Square plane grid whose Z channel is rewritten in place each frame.
pub struct SurfaceGrid {
    vertices: Vec<Vertex>,
    jitter: Vec<f32>,
    dirty: bool,
}

impl SurfaceGrid {
    /// Create a centered plane grid and its per-vertex jitter table.
    pub fn new(params: &GridParams) -> Self {
        let cols = params.width_segments + 1;
        let rows = params.height_segments + 1;
        let dx = params.width / params.width_segments as f32;
        let dy = params.height / params.height_segments as f32;
        let half_w = params.width / 2.0;
        let half_h = params.height / 2.0;

        // Row-major to match the sampler's index math: ix walks X, iy
        // walks Y downward from the top edge.
        let mut vertices = Vec::with_capacity(cols * rows);
        for ix in 0..cols {
            for iy in 0..rows {
                let x = ix as f32 * dx - half_w;
                let y = half_h - iy as f32 * dy;
                vertices.push(Vertex {
                    position: [x, y, 0.0],
                });
            }
        }

        // Drawn once, fixed for the grid's lifetime.
        let mut rng = StdRng::seed_from_u64(params.jitter_seed);
        let jitter = (0..vertices.len()).map(|_| rng.gen::<f32>()).collect();

        Self {
            vertices,
            jitter,
            dirty: false,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Fixed per-vertex jitter amplitudes in [0, 1).
    pub fn jitter(&self) -> &[f32] {
        &self.jitter
    }

    pub fn position(&self, index: usize) -> Vec3 {
        Vec3::from_array(self.vertices[index].position)
    }

    /// Recompute every height for frame time `t` and raise the dirty flag.
    pub fn resample(&mut self, t: f64, params: &WaveParams) {
        let mut buffer = FlatPositions(bytemuck::cast_slice_mut(&mut self.vertices));
        sample_into(&mut buffer, t, &self.jitter, params);
        self.dirty = true;
    }

    /// True when a rendering collaborator still has to re-upload the
    /// positions written by the last resampling pass.
    pub fn needs_upload(&self) -> bool {
        self.dirty
    }

    pub fn clear_needs_upload(&mut self) {
        self.dirty = false;
    }

    /// Min and max height currently in the buffer.
    pub fn height_range(&self) -> (f32, f32) {
        let mut lo = f32::INFINITY;
        let mut hi = f32::NEG_INFINITY;
        for v in &self.vertices {
            lo = lo.min(v.position[2]);
            hi = hi.max(v.position[2]);
        }
        (lo, hi)
    }
}

impl PositionBuffer for SurfaceGrid {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn z(&self, index: usize) -> f32 {
        self.vertices[index].position[2]
    }

    fn set_z(&mut self, index: usize, z: f32) {
        self.vertices[index].position[2] = z;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SurfacePreset;

    fn small_grid() -> GridParams {
        GridParams {
            width: 4.0,
            height: 4.0,
            width_segments: 9,
            height_segments: 9,
            jitter_seed: 7,
        }
    }

    #[test]
    fn test_grid_construction() {
        let params = small_grid();
        let grid = SurfaceGrid::new(&params);

        assert_eq!(grid.vertex_count(), 100);
        assert_eq!(grid.jitter().len(), 100);

        // Centered plane: first vertex at the top-left corner, last at the
        // bottom-right, all heights flat.
        assert_eq!(grid.position(0), Vec3::new(-2.0, 2.0, 0.0));
        assert_eq!(grid.position(99), Vec3::new(2.0, -2.0, 0.0));
        assert!(grid.vertices().iter().all(|v| v.position[2] == 0.0));
    }

    #[test]
    fn test_jitter_is_seeded() {
        let params = small_grid();
        let a = SurfaceGrid::new(&params);
        let b = SurfaceGrid::new(&params);
        assert_eq!(a.jitter(), b.jitter());
        assert!(a.jitter().iter().all(|&j| (0.0..1.0).contains(&j)));

        let other = SurfaceGrid::new(&GridParams {
            jitter_seed: 8,
            ..params
        });
        assert_ne!(a.jitter(), other.jitter());
    }

    #[test]
    fn test_resample_covers_every_vertex() {
        let mut grid = SurfaceGrid::new(&small_grid());
        let sentinel = 777.0;
        for idx in 0..grid.vertex_count() {
            grid.set_z(idx, sentinel);
        }

        grid.resample(0.25, &SurfacePreset::Chop.params());
        for idx in 0..grid.vertex_count() {
            assert_ne!(grid.z(idx), sentinel, "vertex {} not rewritten", idx);
        }
    }

    #[test]
    fn test_resample_matches_field() {
        let mut grid = SurfaceGrid::new(&small_grid());
        let params = SurfacePreset::Perlin.params();
        grid.resample(0.33, &params);

        let side = 10;
        for ix in 0..side {
            for iy in 0..side {
                let idx = ix * side + iy;
                let expected =
                    field::height_at(ix, iy, 0.33, grid.jitter()[idx], &params) as f32;
                assert_eq!(grid.z(idx), expected);
            }
        }
    }

    #[test]
    fn test_resample_is_idempotent() {
        let mut grid = SurfaceGrid::new(&small_grid());
        let params = SurfacePreset::Chop.params();

        grid.resample(0.5, &params);
        let first: Vec<f32> = grid.vertices().iter().map(|v| v.position[2]).collect();
        grid.resample(0.5, &params);
        let second: Vec<f32> = grid.vertices().iter().map(|v| v.position[2]).collect();
        assert_eq!(first, second);
    }

    struct CountingBuffer {
        zs: Vec<f32>,
        writes: Vec<u32>,
    }

    impl PositionBuffer for CountingBuffer {
        fn vertex_count(&self) -> usize {
            self.zs.len()
        }

        fn z(&self, index: usize) -> f32 {
            self.zs[index]
        }

        fn set_z(&mut self, index: usize, z: f32) {
            self.zs[index] = z;
            self.writes[index] += 1;
        }
    }

    #[test]
    fn test_each_vertex_written_exactly_once() {
        let mut buffer = CountingBuffer {
            zs: vec![0.0; 100],
            writes: vec![0; 100],
        };
        let jitter = vec![0.5; 100];

        sample_into(&mut buffer, 0.4, &jitter, &SurfacePreset::Chop.params());
        assert!(buffer.writes.iter().all(|&w| w == 1));
    }

    #[test]
    fn test_non_square_count_leaves_tail_unsampled() {
        // 10 vertices: side = floor(sqrt(10)) = 3, so only the first 9 are
        // rewritten and the tail keeps its previous height.
        let sentinel = 777.0;
        let mut data = vec![sentinel; 30];
        let mut buffer = FlatPositions(&mut data);
        let jitter = vec![0.0; 10];

        sample_into(&mut buffer, 0.25, &jitter, &SurfacePreset::Perlin.params());

        for idx in 0..9 {
            assert_ne!(buffer.z(idx), sentinel);
        }
        assert_eq!(buffer.z(9), sentinel);
    }

    #[test]
    fn test_dirty_flag_cycle() {
        let mut grid = SurfaceGrid::new(&small_grid());
        assert!(!grid.needs_upload());

        grid.resample(0.1, &SurfacePreset::Glass.params());
        assert!(grid.needs_upload());

        grid.clear_needs_upload();
        assert!(!grid.needs_upload());
    }
}
