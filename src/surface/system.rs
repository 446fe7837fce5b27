//! Frame-driven animation of the surface grid.

use super::mesh::SurfaceGrid;
use crate::params::{GridParams, WaveParams};

/// Fixed step added to the frame accumulator once per tick. Frame time is
/// accumulated, never derived from the wall clock.
pub const FRAME_STEP: f64 = 0.01;

/// Owns the grid, the tunable parameters, and the frame accumulator.
///
/// One tick is one full resampling pass, strictly sequential: the pass for
/// frame N+1 always observes the accumulator written at the end of frame N.
/// Parameters are snapshotted at the top of each tick, so mutation by a
/// control surface between ticks can never tear a frame.
pub struct SurfaceSystem {
    pub grid: SurfaceGrid,
    pub params: WaveParams,
    frame: f64,
}

impl SurfaceSystem {
    pub fn new(grid_params: &GridParams, params: WaveParams) -> Self {
        Self {
            grid: SurfaceGrid::new(grid_params),
            params,
            frame: 0.0,
        }
    }

    /// Current frame-time accumulator.
    pub fn frame(&self) -> f64 {
        self.frame
    }

    /// Advance one frame: bump the accumulator, then resample the grid.
    pub fn advance(&mut self) {
        self.frame += FRAME_STEP;
        let params = self.params.clone();
        self.grid.resample(self.frame, &params);
    }
}
