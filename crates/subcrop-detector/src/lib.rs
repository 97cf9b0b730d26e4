//! Subtitle-overlay region detection over a single decoded RGB frame.
//!
//! The core is a bounded flood fill confined to a window around each seed
//! pixel, a nesting heuristic that pairs an outer blob with a contrasting
//! inner blob to recognize a subtitle box, and a scan/aggregation driver
//! that sweeps row bands and grows a bounding crop. Decoding and crop export
//! live in `subcrop-codec`; this crate only reads pixels.

mod band;
mod config;
mod detector;
mod flood;
mod scan;

pub use band::detect_band;
pub use config::{
    DEFAULT_CONTRAST_THRESHOLD, DEFAULT_ROW_STRIDE, DEFAULT_SAMPLE_OFFSET, DEFAULT_WINDOW_DIVISOR,
    DetectorConfig,
};
pub use detector::OverlayDetector;
pub use flood::{RegionWorkspace, find_region};
pub use scan::{ScanDirection, scan_row};
