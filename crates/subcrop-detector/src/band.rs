use subcrop_types::{Region, RgbFrame};

use crate::config::DetectorConfig;
use crate::flood::RegionWorkspace;
use crate::scan::{ScanDirection, scan_row};

/// Evaluate one candidate row band.
///
/// A forward scan of the seed row either produces the first evidence or
/// rejects the band outright. The rows spanned by that evidence are then
/// re-scanned at `row_stride` in both directions so the rest of the overlay
/// can widen the crop, and the result is padded outward by the search radius
/// where the margins allow, recovering columns the strided sweep skipped.
pub fn detect_band(
    frame: &RgbFrame,
    config: &DetectorConfig,
    workspace: &mut RegionWorkspace,
    seed_row: usize,
) -> Option<Region> {
    let mut crop = None;
    scan_row(
        frame,
        config,
        workspace,
        seed_row,
        ScanDirection::Forward,
        &mut crop,
    );
    let seeded = crop?;

    let mut row = seeded.top;
    while row < seeded.bottom {
        scan_row(frame, config, workspace, row, ScanDirection::Forward, &mut crop);
        scan_row(frame, config, workspace, row, ScanDirection::Backward, &mut crop);
        row += config.row_stride;
    }

    let mut grown = crop?;
    if grown.left > config.search_radius {
        grown.left -= config.search_radius;
    }
    if frame.width() - grown.right > config.search_radius {
        grown.right += config.search_radius;
    }
    Some(grown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{fill_rect, overlay_frame, solid_frame, GROUND, INK, PADDED_REGION};

    fn config() -> DetectorConfig {
        DetectorConfig::for_frame(100, 100).with_search_radius(30)
    }

    #[test]
    fn uniform_frame_rejects_the_band() {
        let frame = solid_frame(100, 100, GROUND);
        let mut workspace = RegionWorkspace::new();
        assert_eq!(detect_band(&frame, &config(), &mut workspace, 45), None);
    }

    #[test]
    fn overlay_band_grows_and_pads() {
        let frame = overlay_frame();
        let mut workspace = RegionWorkspace::new();
        let crop = detect_band(&frame, &config(), &mut workspace, 45);
        assert_eq!(crop, Some(PADDED_REGION));
    }

    #[test]
    fn thin_contrasting_feature_rejects_the_band() {
        // a one-pixel-wide stroke never produces a coherent inner region
        let mut frame = solid_frame(100, 100, GROUND);
        fill_rect(&mut frame, 50, 51, 35, 65, INK);
        let mut workspace = RegionWorkspace::new();
        assert_eq!(detect_band(&frame, &config(), &mut workspace, 45), None);
    }

    #[test]
    fn padding_respects_the_frame_margins() {
        // overlay flush with the left scan margin: no room to pad that side
        let mut frame = solid_frame(100, 100, GROUND);
        fill_rect(&mut frame, 30, 60, 40, 50, crate::testutil::PLATE);
        fill_rect(&mut frame, 36, 54, 44, 48, INK);
        let mut workspace = RegionWorkspace::new();
        let crop = detect_band(&frame, &config(), &mut workspace, 45)
            .expect("band should be accepted");
        assert_eq!(crop, subcrop_types::Region::new(30, 90, 40, 50));
    }
}
