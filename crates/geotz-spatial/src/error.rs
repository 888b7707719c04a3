// crates/geotz-spatial/src/error.rs

use thiserror::Error;

/// Errors produced while opening or decoding a store file.
///
/// Queries never fail; a point outside every zone is a plain miss
/// (`None`), not an error.
#[derive(Debug, Error)]
pub enum SpatialError {
    /// The store file does not exist at the given path.
    #[error("store not found: {0}")]
    NotFound(String),

    /// The file exists but could not be read.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The payload is not a valid serialized store.
    #[error("malformed store: {0}")]
    Format(#[from] bincode::Error),

    /// The payload decoded but is not usable (e.g. wrong format version).
    #[error("invalid store: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, SpatialError>;
