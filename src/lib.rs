//! Wavefield library - procedurally displaced water surface simulation

pub mod noise;
pub mod params;
pub mod surface;
