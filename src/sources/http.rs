use crate::errors::{SourceError, SourceResult};
use crate::models::{validate_collection, Listing};
use crate::sources::traits::ListingSource;
use async_trait::async_trait;
use chrono::{Datelike, Utc};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Fetches a JSON array of listings from a marketplace API endpoint
pub struct HttpListingSource {
    client: Client,
    url: String,
}

impl HttpListingSource {
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> SourceResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("hansa-listings/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl ListingSource for HttpListingSource {
    async fn fetch_all(&self) -> SourceResult<Vec<Listing>> {
        debug!("Fetching URL: {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            warn!("Listings API returned status: {}", response.status());
            return Err(SourceError::Status {
                url: self.url.clone(),
                status: response.status().as_u16(),
            });
        }

        let listings: Vec<Listing> = response.json().await?;
        validate_collection(&listings, Utc::now().year())?;

        info!("Fetched {} listings from {}", listings.len(), self.url);
        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "HTTP"
    }
}
