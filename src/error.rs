use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SquashError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing external binary in path: {0}. Please install it before running")]
    ToolNotFound(String),

    #[error("{0} produced no output file ({1})")]
    ToolOutputMissing(String, ExitStatus),

    #[error("Invalid path provided: {0}")]
    InvalidRoot(PathBuf),

    #[error("Cannot derive working file names for: {0}")]
    UnusableFileName(PathBuf),

    #[error("Invalid quality value: {0}. Must be between 1 and 100")]
    InvalidQuality(u8),

    #[error("Walkdir error: {0}")]
    Walkdir(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, SquashError>;
