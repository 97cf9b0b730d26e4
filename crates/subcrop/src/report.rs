use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use subcrop_types::Region;

use crate::error::CliError;

/// One accepted region in frame coordinates.
#[derive(Debug, Serialize)]
pub struct RegionRecord {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl From<&Region> for RegionRecord {
    fn from(region: &Region) -> Self {
        Self {
            x: region.left,
            y: region.top,
            width: region.width(),
            height: region.height(),
        }
    }
}

/// Detection summary for one input frame.
#[derive(Debug, Serialize)]
pub struct FrameRecord {
    pub input: PathBuf,
    pub width: usize,
    pub height: usize,
    pub regions: Vec<RegionRecord>,
    pub crops: Vec<PathBuf>,
}

pub fn write_report(path: &Path, records: &[FrameRecord]) -> Result<(), CliError> {
    let encoded = serde_json::to_vec_pretty(records)?;
    fs::write(path, encoded).map_err(subcrop_types::FrameError::from)?;
    Ok(())
}
