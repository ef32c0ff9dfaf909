use std::collections::BTreeSet;

use super::criteria::{FilterCriteria, NumericRange};
use crate::models::Listing;

/// Predicate compiled from a [`FilterCriteria`]
///
/// The query is lower-cased once here instead of once per listing. A listing
/// matches when it satisfies every active constraint.
#[derive(Debug)]
pub struct ListingFilter<'c> {
    query: Option<String>,
    sectors: &'c BTreeSet<String>,
    cities: &'c BTreeSet<String>,
    price: NumericRange<u64>,
    revenue: NumericRange<u64>,
    employees: NumericRange<u32>,
}

impl<'c> ListingFilter<'c> {
    pub fn new(criteria: &'c FilterCriteria) -> Self {
        let query = (!criteria.query.is_empty()).then(|| criteria.query.to_lowercase());
        Self {
            query,
            sectors: &criteria.sectors,
            cities: &criteria.cities,
            price: criteria.price,
            revenue: criteria.revenue,
            employees: criteria.employees,
        }
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        self.matches_text(listing)
            && (self.sectors.is_empty() || self.sectors.contains(&listing.sector))
            && (self.cities.is_empty() || self.cities.contains(&listing.location.city))
            && self.price.contains(listing.price.amount)
            && self.revenue.contains(listing.financials.revenue)
            && self.employees.contains(listing.financials.employees)
    }

    fn matches_text(&self, listing: &Listing) -> bool {
        let Some(query) = &self.query else {
            return true;
        };
        let hit = |text: &str| text.to_lowercase().contains(query.as_str());

        hit(&listing.title)
            || hit(&listing.description)
            || hit(&listing.sector)
            || hit(&listing.location.city)
            || listing.features.iter().any(|f| hit(f))
    }
}
