//! Error types.
//!
//! Rendering itself never fails; degenerate geometry produces empty paths.
//! Errors only come from loading styles and from the raster backend.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("style json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid style: {0}")]
    InvalidStyle(String),

    #[error("raster: {0}")]
    Raster(String),
}

pub type Result<T> = std::result::Result<T, Error>;
