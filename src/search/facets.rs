use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::Listing;

/// Distinct sector and city values of a collection, with listing counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub sectors: BTreeMap<String, usize>,
    pub cities: BTreeMap<String, usize>,
}

impl Facets {
    pub fn collect<'a, I>(listings: I) -> Self
    where
        I: IntoIterator<Item = &'a Listing>,
    {
        let mut facets = Facets::default();
        for listing in listings {
            *facets.sectors.entry(listing.sector.clone()).or_default() += 1;
            *facets.cities.entry(listing.location.city.clone()).or_default() += 1;
        }
        facets
    }
}
