//! Listing search for the 123Hansa business marketplace.
//!
//! [`search::search`] is a pure function from a listing collection and a
//! [`search::FilterCriteria`] to an ordered view of that collection.
//! [`sources::ListingSource`] implementations supply the collection.

pub mod config;
pub mod errors;
pub mod models;
pub mod search;
pub mod sources;

pub use errors::{SourceError, SourceResult};
pub use models::{Listing, ListingError};
pub use search::{search, Facets, FilterCriteria, NumericRange, SortKey};
pub use sources::ListingSource;
