mod common;

use chrono::Duration;
use common::{base_time, listing};
use hansa_listings::models::Listing;
use hansa_listings::{search, FilterCriteria, NumericRange, SortKey};
use proptest::prelude::*;
use std::collections::BTreeSet;

const SECTORS: [&str; 3] = ["Technology", "Retail", "Restaurant"];
const CITIES: [&str; 3] = ["Stockholm", "Göteborg", "Malmö"];
const TITLES: [&str; 4] = ["Café Söder", "IT-bolag", "Butik", "Bageri"];
const FEATURES: [&str; 3] = ["Uteservering", "Lager ingår", "Ramavtal"];
const QUERIES: [&str; 7] = ["", "café", "CAFÉ", "tech", "stock", "lager", "zzz"];

fn arb_listings() -> impl Strategy<Value = Vec<Listing>> {
    let fields = (
        (0u64..5, 0u64..5, 0u32..5, 0u64..4, 0u64..4),
        (any::<bool>(), any::<bool>(), 0usize..3, 0usize..3, 0i64..5, 0usize..4),
        prop::option::of(0usize..3),
    );
    prop::collection::vec(fields, 0..12).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(
                |(i, ((price, revenue, employees, views, favs), (premium, featured, sector, city, hours, title), feature))| {
                    let mut l = listing(&format!("l{}", i));
                    l.price.amount = price * 100;
                    l.financials.revenue = revenue * 1_000;
                    l.financials.employees = employees;
                    l.engagement.view_count = views;
                    l.engagement.favorite_count = favs;
                    l.premium = premium;
                    l.featured = featured;
                    l.sector = SECTORS[sector].to_string();
                    l.location.city = CITIES[city].to_string();
                    l.updated_at = base_time() + Duration::hours(hours);
                    l.title = TITLES[title].to_string();
                    l.features = feature.map(|f| vec![FEATURES[f].to_string()]).unwrap_or_default();
                    l
                },
            )
            .collect()
    })
}

fn arb_range<T: Strategy>(values: T) -> impl Strategy<Value = NumericRange<T::Value>>
where
    T: Clone,
    T::Value: PartialOrd + Copy,
{
    (prop::option::of(values.clone()), prop::option::of(values))
        .prop_map(|(min, max)| NumericRange::new(min, max))
}

fn arb_set(values: &[&'static str]) -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set(
        prop::sample::select(values.to_vec()).prop_map(|v| v.to_string()),
        0..3,
    )
}

fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        prop::sample::select(QUERIES.to_vec()),
        arb_set(&SECTORS),
        arb_set(&CITIES),
        arb_range(0u64..500),
        arb_range(0u64..5_000),
        arb_range(0u32..5),
        prop::sample::select(SortKey::ALL.to_vec()),
    )
        .prop_map(|(query, sectors, cities, price, revenue, employees, sort)| FilterCriteria {
            query: query.to_string(),
            sectors,
            cities,
            price,
            revenue,
            employees,
            sort,
        })
}

/// Independent re-check of every active predicate
fn naive_matches(l: &Listing, c: &FilterCriteria) -> bool {
    let q = c.query.to_lowercase();
    let fields = [&l.title, &l.description, &l.sector, &l.location.city];
    let text_ok = q.is_empty()
        || fields
            .into_iter()
            .chain(l.features.iter())
            .any(|s| s.to_lowercase().contains(&q));
    let in_range = |v: u64, min: Option<u64>, max: Option<u64>| {
        min.map_or(true, |m| v >= m) && max.map_or(true, |m| v <= m)
    };
    text_ok
        && (c.sectors.is_empty() || c.sectors.contains(&l.sector))
        && (c.cities.is_empty() || c.cities.contains(&l.location.city))
        && in_range(l.price.amount, c.price.min, c.price.max)
        && in_range(l.financials.revenue, c.revenue.min, c.revenue.max)
        && in_range(
            u64::from(l.financials.employees),
            c.employees.min.map(u64::from),
            c.employees.max.map(u64::from),
        )
}

fn tier(l: &Listing) -> u8 {
    u8::from(!l.premium) * 2 + u8::from(!l.featured)
}

/// Primary key normalised so that ascending order is output order
fn primary_key(l: &Listing, sort: SortKey) -> i64 {
    match sort {
        SortKey::Newest => -l.updated_at.timestamp(),
        SortKey::PriceAsc => l.price.amount as i64,
        SortKey::PriceDesc => -(l.price.amount as i64),
        SortKey::RevenueDesc => -(l.financials.revenue as i64),
        SortKey::EmployeesDesc => -i64::from(l.financials.employees),
        SortKey::Popular => -((l.engagement.view_count + l.engagement.favorite_count) as i64),
    }
}

fn reference_search<'a>(listings: &'a [Listing], c: &FilterCriteria) -> Vec<&'a Listing> {
    let mut kept: Vec<(usize, &Listing)> = listings
        .iter()
        .enumerate()
        .filter(|(_, l)| naive_matches(l, c))
        .collect();
    kept.sort_by_key(|(i, l)| (tier(l), primary_key(l, c.sort), *i));
    kept.into_iter().map(|(_, l)| l).collect()
}

fn id_list(results: &[&Listing]) -> Vec<String> {
    results.iter().map(|l| l.id.clone()).collect()
}

proptest! {
    #[test]
    fn matches_reference_implementation(listings in arb_listings(), criteria in arb_criteria()) {
        let results = search(&listings, &criteria);
        prop_assert_eq!(id_list(&results), id_list(&reference_search(&listings, &criteria)));
    }

    #[test]
    fn membership_is_conjunction_of_predicates(listings in arb_listings(), criteria in arb_criteria()) {
        let results = search(&listings, &criteria);
        for l in &listings {
            let included = results.iter().any(|r| std::ptr::eq(*r, l));
            prop_assert_eq!(included, naive_matches(l, &criteria), "listing {}", l.id);
        }
    }

    #[test]
    fn search_is_idempotent(listings in arb_listings(), criteria in arb_criteria()) {
        let once = search(&listings, &criteria);
        let twice = search(once.iter().copied(), &criteria);
        prop_assert_eq!(id_list(&once), id_list(&twice));
    }

    #[test]
    fn never_grows(listings in arb_listings(), criteria in arb_criteria()) {
        prop_assert!(search(&listings, &criteria).len() <= listings.len());
    }

    #[test]
    fn promotion_tiers_are_ordered(listings in arb_listings(), criteria in arb_criteria()) {
        let results = search(&listings, &criteria);
        for pair in results.windows(2) {
            prop_assert!(pair[0].premium >= pair[1].premium);
            if pair[0].premium == pair[1].premium {
                prop_assert!(pair[0].featured >= pair[1].featured);
            }
        }
    }

    #[test]
    fn equal_keys_keep_input_order(listings in arb_listings(), criteria in arb_criteria()) {
        let results = search(&listings, &criteria);
        let position = |l: &Listing| listings.iter().position(|x| std::ptr::eq(x, l));
        for pair in results.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if tier(a) == tier(b) && primary_key(a, criteria.sort) == primary_key(b, criteria.sort) {
                prop_assert!(position(a) < position(b));
            }
        }
    }

    #[test]
    fn default_criteria_excludes_nothing(listings in arb_listings()) {
        let results = search(&listings, &FilterCriteria::default());
        prop_assert_eq!(results.len(), listings.len());
    }

    #[test]
    fn empty_input_stays_empty(criteria in arb_criteria()) {
        prop_assert!(search(&Vec::<Listing>::new(), &criteria).is_empty());
    }
}
