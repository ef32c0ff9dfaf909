use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::sort::SortKey;

/// Inclusive numeric range; a missing bound leaves that side open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericRange<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T> Default for NumericRange<T> {
    fn default() -> Self {
        Self { min: None, max: None }
    }
}

impl<T: PartialOrd + Copy> NumericRange<T> {
    pub fn new(min: Option<T>, max: Option<T>) -> Self {
        Self { min, max }
    }

    pub fn at_least(min: T) -> Self {
        Self::new(Some(min), None)
    }

    pub fn at_most(max: T) -> Self {
        Self::new(None, Some(max))
    }

    /// An inverted range (min > max) contains nothing.
    pub fn contains(&self, value: T) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Search parameters for one search invocation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Free text, matched case-insensitively
    pub query: String,
    /// Accepted sectors (empty = any)
    pub sectors: BTreeSet<String>,
    /// Accepted cities (empty = any)
    pub cities: BTreeSet<String>,
    /// Asking price (SEK)
    pub price: NumericRange<u64>,
    /// Yearly revenue (SEK)
    pub revenue: NumericRange<u64>,
    /// Number of employees
    pub employees: NumericRange<u32>,
    pub sort: SortKey,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sectors.insert(sector.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.cities.insert(city.into());
        self
    }

    pub fn with_price(mut self, range: NumericRange<u64>) -> Self {
        self.price = range;
        self
    }

    pub fn with_revenue(mut self, range: NumericRange<u64>) -> Self {
        self.revenue = range;
        self
    }

    pub fn with_employees(mut self, range: NumericRange<u32>) -> Self {
        self.employees = range;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// True when no filter is active (sorting still applies)
    pub fn is_unrestricted(&self) -> bool {
        self.query.is_empty()
            && self.sectors.is_empty()
            && self.cities.is_empty()
            && self.price.is_unbounded()
            && self.revenue.is_unbounded()
            && self.employees.is_unbounded()
    }
}
