use std::path::{Path, PathBuf};

/// Output path for the `index`-th accepted crop of `input`:
/// `clip.png` becomes `clip.cropped.0.png`, then `clip.cropped.1.png`, and so
/// on. The extension (and thus the encode format) follows the input;
/// extensionless inputs fall back to PNG.
pub fn cropped_output_path(input: &Path, index: usize) -> PathBuf {
    with_tag(input, &format!("cropped.{index}"))
}

/// Output path for the annotated full-frame copy of `input`:
/// `clip.png` becomes `clip.regions.png`.
pub fn annotated_output_path(input: &Path) -> PathBuf {
    with_tag(input, "regions")
}

fn with_tag(input: &Path, tag: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("frame");
    let name = match input.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("{stem}.{tag}.{ext}"),
        None => format!("{stem}.{tag}.png"),
    };
    input.with_file_name(name)
}
