//! Listing search: filter, primary sort, then promotion boost.

pub mod criteria;
pub mod facets;
pub mod filter;
pub mod sort;
pub mod tier;

pub use criteria::{FilterCriteria, NumericRange};
pub use facets::Facets;
pub use filter::ListingFilter;
pub use sort::{Comparator, SortKey};
pub use tier::{promote, PromotionTier};

use tracing::debug;

use crate::models::Listing;

/// Filter and order `listings` according to `criteria`.
///
/// Pure and total: returns references into the input, never more of them
/// than were passed in. Listings are ordered by promotion tier first and by
/// the criteria's sort key within a tier; ties keep their input order.
pub fn search<'a, I>(listings: I, criteria: &FilterCriteria) -> Vec<&'a Listing>
where
    I: IntoIterator<Item = &'a Listing>,
{
    let filter = ListingFilter::new(criteria);

    let mut scanned = 0usize;
    let mut matched: Vec<&Listing> = listings
        .into_iter()
        .inspect(|_| scanned += 1)
        .filter(|listing| filter.matches(listing))
        .collect();

    // slice::sort_by is stable
    let compare = criteria.sort.comparator();
    matched.sort_by(|a, b| compare(a, b));

    let results = promote(matched);
    debug!(
        scanned,
        matched = results.len(),
        sort = %criteria.sort,
        "Search finished"
    );
    results
}
