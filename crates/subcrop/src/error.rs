use std::fmt;

use subcrop_types::FrameError;

#[derive(Debug)]
pub enum CliError {
    Frame(FrameError),
    Json(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Frame(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Frame(err) => Some(err),
            CliError::Json(err) => Some(err),
        }
    }
}

impl From<FrameError> for CliError {
    fn from(value: FrameError) -> Self {
        CliError::Frame(value)
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        CliError::Frame(FrameError::Io(value))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        CliError::Json(value)
    }
}
