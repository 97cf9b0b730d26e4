use std::path::Path;

use image::io::Reader as ImageReader;
use subcrop_types::{FrameError, FrameResult, RgbFrame};

/// Load `path` into an RGB8 frame.
///
/// The container format is sniffed from the file signature rather than the
/// extension; grayscale, indexed, and alpha layouts are collapsed to plain
/// RGB so the detection core only ever sees three channels.
pub fn load_frame(path: &Path) -> FrameResult<RgbFrame> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let decoded = reader
        .decode()
        .map_err(|err| FrameError::decode(path, err.to_string()))?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    RgbFrame::from_rgb8(width as usize, height as usize, rgb.into_raw())
}
