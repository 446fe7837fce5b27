//! Headless frame-export configuration.

/// Heightmap capture configuration for the demo binary.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Number of simulated frames to run
    pub frames: usize,

    /// Output directory for captured frames
    pub output_dir: String,

    /// Write every Nth frame (1 = every frame)
    pub stride: usize,
}

impl ExportConfig {
    pub fn new(frames: usize) -> Self {
        Self {
            frames,
            output_dir: "export".to_string(),
            stride: 1,
        }
    }

    /// Directory the heightmap PNGs land in.
    pub fn frames_dir(&self) -> String {
        format!("{}/frames", self.output_dir)
    }

    /// Path of the heightmap written for frame `n`.
    pub fn frame_path(&self, n: usize) -> String {
        format!("{}/frame_{:04}.png", self.frames_dir(), n)
    }

    /// Number of PNGs a full run writes.
    pub fn exported_frames(&self) -> usize {
        if self.stride == 0 {
            return 0;
        }
        self.frames.div_ceil(self.stride)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_paths() {
        let mut config = ExportConfig::new(100);
        config.output_dir = "out".to_string();
        assert_eq!(config.frames_dir(), "out/frames");
        assert_eq!(config.frame_path(7), "out/frames/frame_0007.png");
    }

    #[test]
    fn test_exported_frame_count() {
        let mut config = ExportConfig::new(100);
        assert_eq!(config.exported_frames(), 100);
        config.stride = 10;
        assert_eq!(config.exported_frames(), 10);
        config.stride = 30;
        assert_eq!(config.exported_frames(), 4);
    }
}
