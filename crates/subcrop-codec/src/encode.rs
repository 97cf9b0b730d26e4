use std::fs;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::codecs::webp::WebPEncoder;
use image::{ColorType, ImageEncoder};
use subcrop_types::{FrameError, FrameResult, Pixel, Region, RgbFrame};

const JPEG_QUALITY: u8 = 90;
const OUTLINE_COLOR: Pixel = Pixel::new(255, 64, 64);
const OUTLINE_THICKNESS: usize = 2;

/// Output container for an exported image, chosen from the target extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CropFormat {
    Png,
    Jpeg,
    Webp,
}

impl CropFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") => {
                CropFormat::Jpeg
            }
            Some(ext) if ext.eq_ignore_ascii_case("webp") => CropFormat::Webp,
            _ => CropFormat::Png,
        }
    }
}

/// Write the pixels covered by `region` to `path` as a standalone image in
/// the format implied by the extension. PNG output uses the fast compression
/// profile; crops are small and written in batches.
pub fn write_cropped(frame: &RgbFrame, region: &Region, path: &Path) -> FrameResult<()> {
    if region.width() == 0 || region.height() == 0 {
        return Err(FrameError::invalid_frame(format!(
            "degenerate crop region {region:?}"
        )));
    }
    if region.right > frame.width() || region.bottom > frame.height() {
        return Err(FrameError::invalid_frame(format!(
            "crop region {region:?} exceeds {}x{} frame",
            frame.width(),
            frame.height()
        )));
    }

    let width = region.width();
    let height = region.height();
    let stride = frame.width() * 3;
    let mut packed = Vec::with_capacity(width * height * 3);
    for row in region.top..region.bottom {
        let start = row * stride + region.left * 3;
        packed.extend_from_slice(&frame.data()[start..start + width * 3]);
    }

    let encoded = encode(&packed, width as u32, height as u32, path)?;
    fs::write(path, encoded)?;
    Ok(())
}

fn encode(packed: &[u8], width: u32, height: u32, path: &Path) -> FrameResult<Vec<u8>> {
    let mut encoded = Vec::new();
    let result = match CropFormat::from_path(path) {
        CropFormat::Png => {
            PngEncoder::new_with_quality(&mut encoded, CompressionType::Fast, FilterType::Adaptive)
                .write_image(packed, width, height, ColorType::Rgb8)
        }
        CropFormat::Jpeg => JpegEncoder::new_with_quality(&mut encoded, JPEG_QUALITY)
            .write_image(packed, width, height, ColorType::Rgb8),
        CropFormat::Webp => {
            WebPEncoder::new_lossless(&mut encoded).write_image(packed, width, height, ColorType::Rgb8)
        }
    };
    result.map_err(|err| FrameError::encode(path, err.to_string()))?;
    Ok(encoded)
}

/// Copy of `frame` with each region outlined, for eyeballing what the
/// detector accepted.
pub fn annotate_frame(frame: &RgbFrame, regions: &[Region]) -> RgbFrame {
    let mut annotated = frame.clone();
    for region in regions {
        draw_outline(&mut annotated, region);
    }
    annotated
}

fn draw_outline(frame: &mut RgbFrame, region: &Region) {
    let right = region.right.min(frame.width());
    let bottom = region.bottom.min(frame.height());
    if region.left >= right || region.top >= bottom {
        return;
    }
    let thickness = OUTLINE_THICKNESS
        .min((right - region.left).min(bottom - region.top) / 2)
        .max(1);
    for offset in 0..thickness {
        let top_row = region.top + offset;
        let bottom_row = bottom - 1 - offset;
        for x in region.left..right {
            frame.set_pixel(x, top_row, OUTLINE_COLOR);
            frame.set_pixel(x, bottom_row, OUTLINE_COLOR);
        }
        let left_col = region.left + offset;
        let right_col = right - 1 - offset;
        for y in region.top..bottom {
            frame.set_pixel(left_col, y, OUTLINE_COLOR);
            frame.set_pixel(right_col, y, OUTLINE_COLOR);
        }
    }
}
