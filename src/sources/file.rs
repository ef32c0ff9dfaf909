use crate::errors::{SourceError, SourceResult};
use crate::models::{validate_collection, Listing};
use crate::sources::traits::ListingSource;
use async_trait::async_trait;
use chrono::{Datelike, Utc};
use std::path::PathBuf;
use tracing::{debug, info};

/// Reads a JSON array of listings from disk
pub struct JsonFileListingSource {
    path: PathBuf,
}

impl JsonFileListingSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ListingSource for JsonFileListingSource {
    async fn fetch_all(&self) -> SourceResult<Vec<Listing>> {
        debug!("Reading listings from {}", self.path.display());

        let bytes = tokio::fs::read(&self.path).await.map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        let listings: Vec<Listing> = serde_json::from_slice(&bytes)?;
        validate_collection(&listings, Utc::now().year())?;

        info!("Loaded {} listings from {}", listings.len(), self.path.display());
        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "JSON file"
    }
}
