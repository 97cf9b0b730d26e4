use std::path::{Path, PathBuf};

use log::{debug, info};
use subcrop_codec::{
    annotate_frame, annotated_output_path, cropped_output_path, load_frame, write_cropped,
};
use subcrop_detector::{DetectorConfig, OverlayDetector};
use subcrop_types::Region;

use crate::error::CliError;
use crate::report::{FrameRecord, RegionRecord};

#[derive(Debug, Default, Clone)]
pub struct SessionOptions {
    /// Redirect exported files here instead of the input's directory.
    pub out_dir: Option<PathBuf>,
    /// Override the width-derived search radius.
    pub search_radius: Option<usize>,
    /// Also export a full-frame copy with the regions outlined.
    pub annotate: bool,
}

/// Run one detection session: load the frame, sweep it for subtitle overlay
/// regions, and export every accepted crop under an auto-numbered name.
///
/// Decode and encode failures are fatal; a frame with no detections is a
/// normal outcome with an empty region list.
pub fn process_frame(input: &Path, options: &SessionOptions) -> Result<FrameRecord, CliError> {
    let frame = load_frame(input)?;
    let mut config = DetectorConfig::for_frame(frame.width(), frame.height());
    if let Some(radius) = options.search_radius {
        config = config.with_search_radius(radius);
    }
    debug!(
        "scanning {} ({}x{}, search radius {})",
        input.display(),
        frame.width(),
        frame.height(),
        config.search_radius
    );

    let mut detector = OverlayDetector::new(config);
    let regions = detector.detect(&frame);

    let mut crops = Vec::with_capacity(regions.len());
    for (index, region) in regions.iter().enumerate() {
        let target = redirect(cropped_output_path(input, index), options.out_dir.as_deref());
        write_cropped(&frame, region, &target)?;
        info!(
            "exported {}x{} crop to {}",
            region.width(),
            region.height(),
            target.display()
        );
        crops.push(target);
    }

    if options.annotate && !regions.is_empty() {
        let annotated = annotate_frame(&frame, &regions);
        let full = Region::new(0, frame.width(), 0, frame.height());
        let target = redirect(annotated_output_path(input), options.out_dir.as_deref());
        write_cropped(&annotated, &full, &target)?;
        info!("wrote annotated frame to {}", target.display());
    }

    Ok(FrameRecord {
        input: input.to_path_buf(),
        width: frame.width(),
        height: frame.height(),
        regions: regions.iter().map(RegionRecord::from).collect(),
        crops,
    })
}

fn redirect(path: PathBuf, out_dir: Option<&Path>) -> PathBuf {
    match (out_dir, path.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => path,
    }
}
