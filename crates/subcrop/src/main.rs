use std::fs;
use std::process::ExitCode;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use subcrop::cli::CliArgs;
use subcrop::error::CliError;
use subcrop::report::write_report;
use subcrop::session::{SessionOptions, process_frame};

// Success exits with the accepted-region count; counts at or above the
// failure status are clamped below it so the two never collide.
const FAILURE_STATUS: u8 = 255;

fn main() -> ExitCode {
    env_logger::init();
    let args = CliArgs::parse();
    match run(&args) {
        Ok(accepted) => ExitCode::from(accepted.min(FAILURE_STATUS as usize - 1) as u8),
        Err(err) => {
            eprintln!("subcrop: {err}");
            ExitCode::from(FAILURE_STATUS)
        }
    }
}

fn run(args: &CliArgs) -> Result<usize, CliError> {
    if let Some(dir) = args.out_dir.as_ref() {
        fs::create_dir_all(dir).map_err(subcrop_types::FrameError::from)?;
    }

    let options = SessionOptions {
        out_dir: args.out_dir.clone(),
        search_radius: args.search_radius.map(|radius| radius as usize),
        annotate: args.annotate,
    };

    let progress = (args.inputs.len() > 1).then(|| {
        let bar = ProgressBar::new(args.inputs.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} frames {msg}").unwrap(),
        );
        bar
    });

    let mut records = Vec::with_capacity(args.inputs.len());
    let mut accepted = 0usize;
    for input in &args.inputs {
        if let Some(bar) = progress.as_ref() {
            bar.set_message(input.display().to_string());
        }
        let record = process_frame(input, &options)?;
        if record.regions.is_empty() {
            info!("no subtitle regions in {}", input.display());
        } else {
            info!("{} region(s) in {}", record.regions.len(), input.display());
        }
        accepted += record.regions.len();
        records.push(record);
        if let Some(bar) = progress.as_ref() {
            bar.inc(1);
        }
    }
    if let Some(bar) = progress {
        bar.finish_with_message(format!("{accepted} region(s) accepted"));
    }

    if let Some(path) = args.report.as_ref() {
        write_report(path, &records)?;
    }

    println!("Found {accepted} subtitle region(s)");
    Ok(accepted)
}
