use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// How the asking price of a business is set
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceType {
    Fixed,
    Negotiable,
    Auction,
}

/// Location information for a listed business
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub city: String,
    pub region: String,
    pub country: String,
}

/// Asking price
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Price {
    pub amount: u64,
    pub currency: String,
    #[serde(rename = "type")]
    pub kind: PriceType,
}

/// Key figures of the business for sale
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Financials {
    pub revenue: u64,
    /// Can be negative for loss-making businesses
    pub ebitda: i64,
    pub employees: u32,
    pub year_established: u16,
}

/// Engagement counters, only ever read by the search engine
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Engagement {
    pub view_count: u64,
    pub favorite_count: u64,
    pub inquiry_count: u64,
}

impl Engagement {
    /// Popularity score used by the `popular` sort
    pub fn popularity(&self) -> u64 {
        self.view_count.saturating_add(self.favorite_count)
    }
}

/// Core business listing data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: String,
    pub sector: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub location: Location,
    pub price: Price,
    pub financials: Financials,
    #[serde(default)]
    pub engagement: Engagement,
    #[serde(default)]
    pub premium: bool,
    #[serde(default)]
    pub featured: bool,
    pub listed_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Smallest four-digit year
pub const EARLIEST_ESTABLISHMENT_YEAR: u16 = 1000;

/// Data errors found when validating listings loaded from a source
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListingError {
    #[error("listing has an empty id")]
    EmptyId,

    #[error("duplicate listing id: {0}")]
    DuplicateId(String),

    #[error("listing {id} has establishment year {year}, expected four digits")]
    EstablishedYearNotFourDigits { id: String, year: u16 },

    #[error("listing {id} established in {year}, after {current_year}")]
    EstablishedInFuture {
        id: String,
        year: u16,
        current_year: i32,
    },
}

impl Listing {
    /// Check the per-record invariants. Non-negativity is carried by the
    /// unsigned field types.
    pub fn validate(&self, current_year: i32) -> Result<(), ListingError> {
        if self.id.is_empty() {
            return Err(ListingError::EmptyId);
        }
        let year = self.financials.year_established;
        if !(EARLIEST_ESTABLISHMENT_YEAR..=9999).contains(&year) {
            return Err(ListingError::EstablishedYearNotFourDigits {
                id: self.id.clone(),
                year,
            });
        }
        if i32::from(year) > current_year {
            return Err(ListingError::EstablishedInFuture {
                id: self.id.clone(),
                year,
                current_year,
            });
        }
        Ok(())
    }
}

/// Validate every listing and require ids to be unique across the collection
pub fn validate_collection(listings: &[Listing], current_year: i32) -> Result<(), ListingError> {
    let mut seen = HashSet::with_capacity(listings.len());
    for listing in listings {
        listing.validate(current_year)?;
        if !seen.insert(listing.id.as_str()) {
            return Err(ListingError::DuplicateId(listing.id.clone()));
        }
    }
    Ok(())
}
