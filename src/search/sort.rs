use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use tracing::warn;

use crate::models::Listing;

/// Pure ordering function over two listings
pub type Comparator = fn(&Listing, &Listing) -> Ordering;

/// Primary sort strategy of a search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum SortKey {
    /// Most recently updated first
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    RevenueDesc,
    EmployeesDesc,
    /// Highest views + favorites first
    Popular,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Newest,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::RevenueDesc,
        SortKey::EmployeesDesc,
        SortKey::Popular,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::RevenueDesc => "revenue-desc",
            SortKey::EmployeesDesc => "employees-desc",
            SortKey::Popular => "popular",
        }
    }

    /// Parse a sort key, falling back to `Newest` for unknown input.
    pub fn parse_lenient(value: &str) -> Self {
        let value = value.trim();
        match Self::ALL.into_iter().find(|key| key.as_str() == value) {
            Some(key) => key,
            None => {
                if !value.is_empty() {
                    warn!("Unknown sort key '{}', using newest", value);
                }
                SortKey::Newest
            }
        }
    }

    /// Comparator implementing this key. Equal keys compare `Equal`, so a
    /// stable sort keeps their input order.
    pub fn comparator(self) -> Comparator {
        match self {
            SortKey::Newest => by_newest,
            SortKey::PriceAsc => by_price_asc,
            SortKey::PriceDesc => by_price_desc,
            SortKey::RevenueDesc => by_revenue_desc,
            SortKey::EmployeesDesc => by_employees_desc,
            SortKey::Popular => by_popularity_desc,
        }
    }
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        Self::parse_lenient(&value)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn by_newest(a: &Listing, b: &Listing) -> Ordering {
    b.updated_at.cmp(&a.updated_at)
}

fn by_price_asc(a: &Listing, b: &Listing) -> Ordering {
    a.price.amount.cmp(&b.price.amount)
}

fn by_price_desc(a: &Listing, b: &Listing) -> Ordering {
    b.price.amount.cmp(&a.price.amount)
}

fn by_revenue_desc(a: &Listing, b: &Listing) -> Ordering {
    b.financials.revenue.cmp(&a.financials.revenue)
}

fn by_employees_desc(a: &Listing, b: &Listing) -> Ordering {
    b.financials.employees.cmp(&a.financials.employees)
}

fn by_popularity_desc(a: &Listing, b: &Listing) -> Ordering {
    b.engagement.popularity().cmp(&a.engagement.popularity())
}
