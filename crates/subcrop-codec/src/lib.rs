//! Decode/encode collaborators around the `image` codec stack.
//!
//! Everything here is I/O glue for the detection core: loading a file into an
//! [`subcrop_types::RgbFrame`], exporting a detected region as a standalone
//! image, and the auto-numbered output naming scheme.

mod decode;
mod encode;
mod naming;

pub use decode::load_frame;
pub use encode::{CropFormat, annotate_frame, write_cropped};
pub use naming::{annotated_output_path, cropped_output_path};
