use hansa_listings::config::{Config, SourceConfig};
use hansa_listings::sources::{
    HttpListingSource, JsonFileListingSource, ListingSource, MockListingSource,
};
use hansa_listings::{search, Facets};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn build_source(config: &SourceConfig) -> anyhow::Result<Box<dyn ListingSource>> {
    let source: Box<dyn ListingSource> = match config {
        SourceConfig::Mock => Box::new(MockListingSource::new()),
        SourceConfig::File(path) => Box::new(JsonFileListingSource::new(path)),
        SourceConfig::Http { url, timeout } => {
            Box::new(HttpListingSource::with_timeout(url.clone(), *timeout)?)
        }
    };
    Ok(source)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🏢 123Hansa - Listing Search");
    info!("============================");

    let config = Config::from_env()?;
    let source = build_source(&config.source)?;

    info!("Loading listings from {} source...", source.source_name());
    let listings = source.fetch_all().await?;

    let facets = Facets::collect(&listings);
    info!(
        "Sectors: {}",
        facets
            .sectors
            .iter()
            .map(|(sector, n)| format!("{} ({})", sector, n))
            .collect::<Vec<_>>()
            .join(", ")
    );
    info!(
        "Cities: {}",
        facets
            .cities
            .iter()
            .map(|(city, n)| format!("{} ({})", city, n))
            .collect::<Vec<_>>()
            .join(", ")
    );

    let results = search(&listings, &config.criteria);

    // Display results
    info!(
        "✅ {} of {} listings match (sorted by {})",
        results.len(),
        listings.len(),
        config.criteria.sort
    );

    for (i, listing) in results.iter().enumerate() {
        let mut badges = Vec::new();
        if listing.premium {
            badges.push("Premium");
        }
        if listing.featured {
            badges.push("Utvald");
        }

        println!(
            "{}. {} ({} {})",
            i + 1,
            listing.title,
            listing.price.amount,
            listing.price.currency
        );
        println!(
            "   {} · {}, {}",
            listing.sector, listing.location.city, listing.location.region
        );
        println!(
            "   Omsättning {} kr, {} anställda, grundat {}",
            listing.financials.revenue,
            listing.financials.employees,
            listing.financials.year_established
        );
        if !badges.is_empty() {
            println!("   {}", badges.join(", "));
        }
        println!("   ID: {}", listing.id);
        println!();
    }

    if let Some(path) = &config.output {
        let json = serde_json::to_string_pretty(&results)?;
        tokio::fs::write(path, json).await?;
        info!("💾 Saved {} listings to {}", results.len(), path.display());
    }

    Ok(())
}
