//! Typed errors for listing sources.

use std::path::PathBuf;
use thiserror::Error;

use crate::models::ListingError;

pub type SourceResult<T> = Result<T, SourceError>;

/// Errors that can occur while fetching listings
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse listings JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("invalid listing data: {0}")]
    Invalid(#[from] ListingError),
}
