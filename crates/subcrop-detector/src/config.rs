// Fraction of the frame width covered by the widest expected glyph box; the
// search window diameter is `frame_width / WINDOW_DIVISOR`.
pub const DEFAULT_WINDOW_DIVISOR: usize = 32;
// Squared-distance contrast required between the paired row samples.
pub const DEFAULT_CONTRAST_THRESHOLD: u32 = 10_000;
// Column offset between the outer and inner row samples.
pub const DEFAULT_SAMPLE_OFFSET: usize = 5;
// Vertical stride of the in-band widening sweep.
pub const DEFAULT_ROW_STRIDE: usize = 3;

/// Geometry and thresholds for one detection session, derived once from the
/// frame dimensions and threaded by reference through every component call.
#[derive(Debug, Clone, Copy)]
pub struct DetectorConfig {
    pub frame_width: usize,
    pub frame_height: usize,
    /// Half-extent of the flood-fill search window.
    pub search_radius: usize,
    pub contrast_threshold: u32,
    pub sample_offset: usize,
    pub row_stride: usize,
}

impl DetectorConfig {
    pub fn for_frame(frame_width: usize, frame_height: usize) -> Self {
        let search_radius = (frame_width / DEFAULT_WINDOW_DIVISOR / 2).max(1);
        Self {
            frame_width,
            frame_height,
            search_radius,
            contrast_threshold: DEFAULT_CONTRAST_THRESHOLD,
            sample_offset: DEFAULT_SAMPLE_OFFSET,
            row_stride: DEFAULT_ROW_STRIDE,
        }
    }

    pub fn with_search_radius(mut self, radius: usize) -> Self {
        self.search_radius = radius.max(1);
        self
    }

    /// Stride between candidate seed rows in the frame sweep.
    pub fn band_stride(&self) -> usize {
        (self.search_radius / 2).max(1)
    }

    /// Cell count of the widest window a flood fill can touch, used to size
    /// the workspace once per session.
    pub fn max_window_cells(&self) -> usize {
        let diameter = self.search_radius * 2;
        diameter.min(self.frame_width) * diameter.min(self.frame_height)
    }
}
