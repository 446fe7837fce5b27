//! Water surface simulation: displacement field, grid mesh, frame driver.

mod field;
mod mesh;
mod system;

// Re-export public types
pub use field::height_at;
pub use mesh::{sample_into, FlatPositions, PositionBuffer, SurfaceGrid, Vertex};
pub use system::{SurfaceSystem, FRAME_STEP};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::GridParams;

    #[test]
    fn test_surface_grid_creation() {
        let params = GridParams::default();
        let grid = SurfaceGrid::new(&params);

        // Check vertex count: (segments + 1)^2
        assert_eq!(grid.vertex_count(), (params.width_segments + 1).pow(2));
        assert_eq!(grid.jitter().len(), grid.vertex_count());
    }
}
