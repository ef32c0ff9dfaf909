#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use hansa_listings::models::{Engagement, Financials, Listing, Location, Price, PriceType};

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

pub fn listing(id: &str) -> Listing {
    Listing {
        id: id.to_string(),
        title: format!("Listing {}", id),
        description: String::new(),
        sector: "Technology".to_string(),
        features: vec![],
        location: Location {
            city: "Stockholm".to_string(),
            region: "Stockholms län".to_string(),
            country: "Sverige".to_string(),
        },
        price: Price {
            amount: 0,
            currency: "SEK".to_string(),
            kind: PriceType::Fixed,
        },
        financials: Financials {
            revenue: 0,
            ebitda: 0,
            employees: 0,
            year_established: 2010,
        },
        engagement: Engagement::default(),
        premium: false,
        featured: false,
        listed_at: base_time(),
        updated_at: base_time(),
    }
}

pub fn updated(mut listing: Listing, hours: i64) -> Listing {
    listing.updated_at = base_time() + Duration::hours(hours);
    listing
}

pub fn ids<'a>(results: &[&'a Listing]) -> Vec<&'a str> {
    results.iter().map(|l| l.id.as_str()).collect()
}
