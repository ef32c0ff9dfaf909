use crate::errors::SourceResult;
use crate::models::{Engagement, Financials, Listing, Location, Price, PriceType};
use crate::sources::traits::ListingSource;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;

/// In-memory example listings for development and tests
#[derive(Debug, Clone, Default)]
pub struct MockListingSource;

impl MockListingSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ListingSource for MockListingSource {
    async fn fetch_all(&self) -> SourceResult<Vec<Listing>> {
        let listings = example_listings();
        info!("📋 Serving {} example business listings", listings.len());
        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "Mock"
    }
}

/// Midnight UTC of the given date; an invalid date yields the epoch,
/// which `fixtures_are_valid` rejects
fn day(year: i32, month: u32, date: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, date)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

fn sweden(city: &str, region: &str) -> Location {
    Location {
        city: city.to_string(),
        region: region.to_string(),
        country: "Sverige".to_string(),
    }
}

fn sek(amount: u64, kind: PriceType) -> Price {
    Price {
        amount,
        currency: "SEK".to_string(),
        kind,
    }
}

fn tags(features: &[&str]) -> Vec<String> {
    features.iter().map(|f| f.to_string()).collect()
}

/// The example collection the marketplace front-end runs on
pub fn example_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: "hansa-1001".to_string(),
            title: "Lönsamt IT-konsultbolag i Stockholm".to_string(),
            description: "Väletablerat konsultbolag med fokus på molntjänster och långa ramavtal med offentlig sektor.".to_string(),
            sector: "Technology".to_string(),
            features: tags(&["Ramavtal", "Återkommande intäkter", "Distansarbete"]),
            location: sweden("Stockholm", "Stockholms län"),
            price: sek(12_500_000, PriceType::Negotiable),
            financials: Financials {
                revenue: 18_400_000,
                ebitda: 3_100_000,
                employees: 14,
                year_established: 2011,
            },
            engagement: Engagement {
                view_count: 412,
                favorite_count: 37,
                inquiry_count: 9,
            },
            premium: true,
            featured: true,
            listed_at: day(2024, 2, 12),
            updated_at: day(2024, 5, 3),
        },
        Listing {
            id: "hansa-1002".to_string(),
            title: "Café med uteservering på Södermalm".to_string(),
            description: "Populärt café nära Medborgarplatsen. Nyrenoverat kök och fullständiga rättigheter.".to_string(),
            sector: "Restaurant".to_string(),
            features: tags(&["Uteservering", "Fullständiga rättigheter", "Centralt läge"]),
            location: sweden("Stockholm", "Stockholms län"),
            price: sek(1_850_000, PriceType::Fixed),
            financials: Financials {
                revenue: 4_200_000,
                ebitda: 520_000,
                employees: 6,
                year_established: 2016,
            },
            engagement: Engagement {
                view_count: 988,
                favorite_count: 121,
                inquiry_count: 24,
            },
            premium: false,
            featured: true,
            listed_at: day(2024, 3, 1),
            updated_at: day(2024, 4, 18),
        },
        Listing {
            id: "hansa-1003".to_string(),
            title: "E-handel inom heminredning".to_string(),
            description: "Webbutik med egen lagerhantering och stark närvaro i sociala medier.".to_string(),
            sector: "E-commerce".to_string(),
            features: tags(&["Eget varumärke", "Lager ingår"]),
            location: sweden("Göteborg", "Västra Götalands län"),
            price: sek(3_900_000, PriceType::Auction),
            financials: Financials {
                revenue: 7_600_000,
                ebitda: 640_000,
                employees: 4,
                year_established: 2018,
            },
            engagement: Engagement {
                view_count: 530,
                favorite_count: 44,
                inquiry_count: 11,
            },
            premium: true,
            featured: false,
            listed_at: day(2024, 1, 20),
            updated_at: day(2024, 5, 10),
        },
        Listing {
            id: "hansa-1004".to_string(),
            title: "Frisörsalong i centrala Malmö".to_string(),
            description: "Salong med fyra stolar och trogen kundkrets. Hyresavtal löper till 2028.".to_string(),
            sector: "Beauty".to_string(),
            features: tags(&["Trogen kundkrets", "Centralt läge"]),
            location: sweden("Malmö", "Skåne län"),
            price: sek(450_000, PriceType::Negotiable),
            financials: Financials {
                revenue: 1_300_000,
                ebitda: 180_000,
                employees: 3,
                year_established: 2009,
            },
            engagement: Engagement {
                view_count: 201,
                favorite_count: 12,
                inquiry_count: 5,
            },
            premium: false,
            featured: false,
            listed_at: day(2024, 4, 2),
            updated_at: day(2024, 4, 2),
        },
        Listing {
            id: "hansa-1005".to_string(),
            title: "Byggfirma med maskinpark i Uppsala".to_string(),
            description: "Entreprenadfirma inom ROT och nybyggnation. Maskinpark och fordon ingår i köpet.".to_string(),
            sector: "Construction".to_string(),
            features: tags(&["Maskinpark", "Fordon ingår", "Orderstock"]),
            location: sweden("Uppsala", "Uppsala län"),
            price: sek(8_200_000, PriceType::Fixed),
            financials: Financials {
                revenue: 22_000_000,
                ebitda: 2_450_000,
                employees: 19,
                year_established: 1998,
            },
            engagement: Engagement {
                view_count: 356,
                favorite_count: 18,
                inquiry_count: 7,
            },
            premium: false,
            featured: false,
            listed_at: day(2023, 11, 14),
            updated_at: day(2024, 3, 22),
        },
        Listing {
            id: "hansa-1006".to_string(),
            title: "SaaS-plattform för bokföring".to_string(),
            description: "Molnbaserad bokföringstjänst för småföretag med över 1 200 betalande kunder.".to_string(),
            sector: "Technology".to_string(),
            features: tags(&["Återkommande intäkter", "Egen mjukvara", "Skalbar"]),
            location: sweden("Göteborg", "Västra Götalands län"),
            price: sek(24_000_000, PriceType::Negotiable),
            financials: Financials {
                revenue: 9_800_000,
                ebitda: -350_000,
                employees: 11,
                year_established: 2019,
            },
            engagement: Engagement {
                view_count: 1_204,
                favorite_count: 96,
                inquiry_count: 31,
            },
            premium: false,
            featured: false,
            listed_at: day(2024, 2, 28),
            updated_at: day(2024, 5, 14),
        },
        Listing {
            id: "hansa-1007".to_string(),
            title: "Butik med sport- och fritidsvaror".to_string(),
            description: "Butik i köpcentrum med stabil försäljning och etablerade leverantörer.".to_string(),
            sector: "Retail".to_string(),
            features: tags(&["Köpcentrum", "Lager ingår"]),
            location: sweden("Linköping", "Östergötlands län"),
            price: sek(950_000, PriceType::Fixed),
            financials: Financials {
                revenue: 5_100_000,
                ebitda: 310_000,
                employees: 5,
                year_established: 2005,
            },
            engagement: Engagement {
                view_count: 143,
                favorite_count: 9,
                inquiry_count: 2,
            },
            premium: false,
            featured: true,
            listed_at: day(2024, 4, 20),
            updated_at: day(2024, 4, 29),
        },
        Listing {
            id: "hansa-1008".to_string(),
            title: "Restaurang vid Västerbron".to_string(),
            description: "Kvarterskrog med 60 sittplatser, fullständiga rättigheter och cateringverksamhet.".to_string(),
            sector: "Restaurant".to_string(),
            features: tags(&["Fullständiga rättigheter", "Catering"]),
            location: sweden("Stockholm", "Stockholms län"),
            price: sek(3_200_000, PriceType::Auction),
            financials: Financials {
                revenue: 8_900_000,
                ebitda: 760_000,
                employees: 12,
                year_established: 2013,
            },
            engagement: Engagement {
                view_count: 677,
                favorite_count: 58,
                inquiry_count: 14,
            },
            premium: true,
            featured: false,
            listed_at: day(2024, 3, 15),
            updated_at: day(2024, 3, 30),
        },
    ]
}
