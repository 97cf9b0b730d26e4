//! Command-line driver for subtitle-overlay crop extraction.
//!
//! Iterates candidate image files, runs one detection session per frame, and
//! reports how many regions were accepted. The detection algorithm lives in
//! `subcrop-detector`; decode/encode glue lives in `subcrop-codec`.

pub mod cli;
pub mod error;
pub mod report;
pub mod session;
