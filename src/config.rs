use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::collections::BTreeSet;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::search::{FilterCriteria, NumericRange, SortKey};

/// Where listings are loaded from
#[derive(Debug, Clone, PartialEq)]
pub enum SourceConfig {
    Mock,
    File(PathBuf),
    Http { url: String, timeout: Duration },
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub source: SourceConfig,
    pub criteria: FilterCriteria,
    /// Write the ordered result as JSON here
    pub output: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let source = if let Some(path) = get("LISTINGS_FILE") {
            SourceConfig::File(PathBuf::from(path))
        } else if let Some(url) = get("LISTINGS_URL") {
            let secs: u64 = parse_opt(&get, "LISTINGS_HTTP_TIMEOUT_SECS")?.unwrap_or(30);
            SourceConfig::Http {
                url,
                timeout: Duration::from_secs(secs),
            }
        } else {
            SourceConfig::Mock
        };

        let criteria = FilterCriteria {
            query: lookup("SEARCH_QUERY").unwrap_or_default(),
            sectors: split_list(get("SEARCH_SECTORS")),
            cities: split_list(get("SEARCH_CITIES")),
            price: parse_range(&get, "SEARCH_PRICE")?,
            revenue: parse_range(&get, "SEARCH_REVENUE")?,
            employees: parse_range(&get, "SEARCH_EMPLOYEES")?,
            sort: get("SEARCH_SORT")
                .map(|s| SortKey::parse_lenient(&s))
                .unwrap_or_default(),
        };

        Ok(Self {
            source,
            criteria,
            output: get("SEARCH_OUTPUT").map(PathBuf::from),
        })
    }
}

fn split_list(value: Option<String>) -> BTreeSet<String> {
    value
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn parse_opt<T, G>(get: &G, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    G: Fn(&str) -> Option<String>,
{
    get(key)
        .map(|v| {
            v.trim()
                .parse::<T>()
                .with_context(|| format!("{} must be a valid number", key))
        })
        .transpose()
}

fn parse_range<T, G>(get: &G, prefix: &str) -> Result<NumericRange<T>>
where
    T: FromStr + PartialOrd + Copy,
    T::Err: std::error::Error + Send + Sync + 'static,
    G: Fn(&str) -> Option<String>,
{
    Ok(NumericRange::new(
        parse_opt(get, &format!("{}_MIN", prefix))?,
        parse_opt(get, &format!("{}_MAX", prefix))?,
    ))
}
