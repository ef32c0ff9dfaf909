pub mod file;
pub mod http;
pub mod mock;
pub mod traits;

pub use file::JsonFileListingSource;
pub use http::HttpListingSource;
pub use mock::{example_listings, MockListingSource};
pub use traits::ListingSource;
