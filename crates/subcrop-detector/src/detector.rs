use subcrop_types::{Region, RgbFrame};

use crate::band::detect_band;
use crate::config::DetectorConfig;
use crate::flood::RegionWorkspace;

/// Frame-level driver: sweeps candidate seed rows across the frame height and
/// collects every accepted crop.
///
/// Owns the flood-fill workspace, sized once at construction for the largest
/// window the configured radius can produce. Detection is deterministic and
/// single-threaded; run one detector per frame, or reuse it across frames of
/// the same geometry.
pub struct OverlayDetector {
    config: DetectorConfig,
    workspace: RegionWorkspace,
}

impl OverlayDetector {
    pub fn new(config: DetectorConfig) -> Self {
        let mut workspace = RegionWorkspace::new();
        workspace.ensure_capacity(config.max_window_cells());
        Self { config, workspace }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Accepted crops in scan order, top of the frame first. An accepted band
    /// moves the cursor past its bottom edge; a rejected band advances by the
    /// band stride.
    pub fn detect(&mut self, frame: &RgbFrame) -> Vec<Region> {
        let mut regions = Vec::new();
        let radius = self.config.search_radius;
        let stride = self.config.band_stride();
        if frame.height() <= radius * 2 {
            return regions;
        }

        let mut row = radius;
        while row < frame.height() - radius {
            if let Some(crop) = detect_band(frame, &self.config, &mut self.workspace, row) {
                row = crop.bottom;
                regions.push(crop);
            }
            row += stride;
        }
        regions
    }
}
