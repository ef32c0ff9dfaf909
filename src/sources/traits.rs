use crate::errors::SourceResult;
use crate::models::Listing;
use async_trait::async_trait;

/// Common trait for everything that can supply listings to a search
/// New backends (a marketplace API, a database) plug in here
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch the full listing collection
    async fn fetch_all(&self) -> SourceResult<Vec<Listing>>;

    /// Get the name of the listing source
    fn source_name(&self) -> &'static str;
}
