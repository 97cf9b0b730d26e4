use subcrop_types::{Region, RgbFrame};

use crate::config::DetectorConfig;
use crate::flood::{RegionWorkspace, find_region};

/// Direction a row is walked. Decides which side the inner sample is taken
/// from and which way the cursor advances; the acceptance logic is symmetric.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanDirection {
    Forward,
    Backward,
}

/// Walk `row` between the scan margins, pairing each pixel with the sample
/// `sample_offset` columns along the scan direction.
///
/// A pair that is not visually different advances one column (the cheap
/// common case). A contrasting pair triggers two bounded flood fills; when
/// the outer component's region strictly contains the inner one, the outer
/// region is folded into `crop` and the cursor skips past it so the same
/// component is not rediscovered pixel by pixel. The scan never fails; it
/// either accumulates evidence into `crop` or leaves it unchanged.
pub fn scan_row(
    frame: &RgbFrame,
    config: &DetectorConfig,
    workspace: &mut RegionWorkspace,
    row: usize,
    direction: ScanDirection,
    crop: &mut Option<Region>,
) {
    let width = frame.width();
    let radius = config.search_radius;
    if row >= frame.height() || width <= radius * 2 {
        return;
    }
    let start = radius;
    let end = width - radius;

    match direction {
        ScanDirection::Forward => {
            let mut i = start;
            while i < end {
                let inner_x = i + config.sample_offset;
                if inner_x >= width {
                    break;
                }
                match probe(frame, config, workspace, i, inner_x, row) {
                    Some(outer) => {
                        fold(crop, outer);
                        i = outer.right.max(i + 1);
                    }
                    None => i += 1,
                }
            }
        }
        ScanDirection::Backward => {
            let mut i = end;
            while i > start {
                i -= 1;
                if i < config.sample_offset {
                    break;
                }
                let inner_x = i - config.sample_offset;
                if let Some(outer) = probe(frame, config, workspace, i, inner_x, row) {
                    fold(crop, outer);
                    // resume just past the component's near edge
                    i = outer.left.min(i);
                }
            }
        }
    }
}

/// Outer/inner nesting test at one scan position. `Some(outer)` only when
/// both samples resolve to coherent regions and the outer one strictly
/// contains the inner one.
fn probe(
    frame: &RgbFrame,
    config: &DetectorConfig,
    workspace: &mut RegionWorkspace,
    outer_x: usize,
    inner_x: usize,
    row: usize,
) -> Option<Region> {
    let outer_color = frame.pixel(outer_x, row);
    let inner_color = frame.pixel(inner_x, row);
    if outer_color.distance_sq(inner_color) <= config.contrast_threshold {
        return None;
    }
    let outer = find_region(frame, config, workspace, outer_x, row, outer_color)?;
    let inner = find_region(frame, config, workspace, inner_x, row, inner_color)?;
    outer.contains_strict(&inner).then_some(outer)
}

fn fold(crop: &mut Option<Region>, outer: Region) {
    *crop = Some(match *crop {
        Some(current) => current.union(&outer),
        None => outer,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{overlay_frame, solid_frame, GROUND, OVERLAY_REGION};
    use subcrop_types::Pixel;

    #[test]
    fn uniform_row_accumulates_nothing() {
        let frame = solid_frame(100, 100, GROUND);
        let config = DetectorConfig::for_frame(100, 100).with_search_radius(30);
        let mut workspace = RegionWorkspace::new();
        let mut crop = None;
        scan_row(&frame, &config, &mut workspace, 45, ScanDirection::Forward, &mut crop);
        scan_row(&frame, &config, &mut workspace, 45, ScanDirection::Backward, &mut crop);
        assert_eq!(crop, None);
    }

    #[test]
    fn nested_overlay_folds_the_outer_box() {
        let frame = overlay_frame();
        let config = DetectorConfig::for_frame(100, 100).with_search_radius(30);
        let mut workspace = RegionWorkspace::new();
        let mut crop = None;
        scan_row(&frame, &config, &mut workspace, 45, ScanDirection::Forward, &mut crop);
        assert_eq!(crop, Some(OVERLAY_REGION));
    }

    #[test]
    fn backward_scan_finds_the_same_box() {
        let frame = overlay_frame();
        let config = DetectorConfig::for_frame(100, 100).with_search_radius(30);
        let mut workspace = RegionWorkspace::new();
        let mut crop = None;
        scan_row(&frame, &config, &mut workspace, 45, ScanDirection::Backward, &mut crop);
        assert_eq!(crop, Some(OVERLAY_REGION));
    }

    #[test]
    fn low_contrast_pairs_never_trigger_a_fill() {
        // box against ground below the distance threshold on every sample pair
        let mut frame = solid_frame(100, 100, GROUND);
        crate::testutil::fill_rect(&mut frame, 40, 60, 40, 50, Pixel::splat(150));
        let config = DetectorConfig::for_frame(100, 100).with_search_radius(30);
        let mut workspace = RegionWorkspace::new();
        let mut crop = None;
        scan_row(&frame, &config, &mut workspace, 45, ScanDirection::Forward, &mut crop);
        assert_eq!(crop, None);
    }

    #[test]
    fn rows_outside_the_frame_are_ignored() {
        let frame = overlay_frame();
        let config = DetectorConfig::for_frame(100, 100).with_search_radius(30);
        let mut workspace = RegionWorkspace::new();
        let mut crop = None;
        scan_row(&frame, &config, &mut workspace, 500, ScanDirection::Forward, &mut crop);
        assert_eq!(crop, None);
    }
}
