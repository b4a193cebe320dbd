use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrekError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("invalid track recording {1}: {0}")]
    Decode(gpx::errors::GpxError, PathBuf),
}
