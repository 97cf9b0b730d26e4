use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "subcrop",
    about = "Detect subtitle overlay regions in still frames and export them as cropped images",
    disable_help_subcommand = true
)]
pub struct CliArgs {
    /// Input image paths
    #[arg(required = true, value_name = "IMAGE")]
    pub inputs: Vec<PathBuf>,

    /// Directory for exported files (defaults to each input's directory)
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Override the width-derived flood-fill search radius, in pixels
    #[arg(
        long = "search-radius",
        value_name = "PIXELS",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub search_radius: Option<u32>,

    /// Also write a full-frame copy with the accepted regions outlined
    #[arg(long = "annotate")]
    pub annotate: bool,

    /// Write a JSON report of accepted regions to FILE
    #[arg(long = "report", value_name = "FILE")]
    pub report: Option<PathBuf>,
}
