//! Price feed traits and implementations.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::catalog::{PriceCatalog, PriceEntry};
use crate::error::{FeedError, FeedResult};

/// Source of the published price list.
#[async_trait]
pub trait PriceFeed: Send + Sync {
    /// Get the feed name.
    fn name(&self) -> &str;

    /// Fetch the price list in publication order.
    async fn fetch(&self) -> FeedResult<Vec<PriceEntry>>;
}

/// Parse a feed payload: a JSON array of `{"currency", "price"}` objects.
///
/// Extra fields such as `date` are ignored.
pub fn parse_feed(payload: &str) -> FeedResult<Vec<PriceEntry>> {
    Ok(serde_json::from_str(payload)?)
}

/// Fetch from a feed and build the session snapshot.
pub async fn load_catalog(feed: &dyn PriceFeed) -> FeedResult<PriceCatalog> {
    match feed.fetch().await {
        Ok(entries) => {
            let fetched = entries.len();
            let catalog = PriceCatalog::from_entries(entries);
            info!(
                feed = feed.name(),
                fetched,
                priced = catalog.len(),
                "Price catalog loaded"
            );
            Ok(catalog)
        }
        Err(e) => {
            warn!(feed = feed.name(), error = %e, "Failed to fetch prices");
            Err(e)
        }
    }
}

/// In-memory feed.
pub struct StaticPriceFeed {
    name: String,
    entries: Vec<PriceEntry>,
}

impl StaticPriceFeed {
    /// Create a new static feed.
    pub fn new(name: impl Into<String>, entries: Vec<PriceEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    /// Add an entry at the end of the list.
    pub fn with_entry(mut self, entry: PriceEntry) -> Self {
        self.entries.push(entry);
        self
    }
}

#[async_trait]
impl PriceFeed for StaticPriceFeed {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> FeedResult<Vec<PriceEntry>> {
        Ok(self.entries.clone())
    }
}

/// Feed payload saved on disk.
pub struct JsonFilePriceFeed {
    path: PathBuf,
}

impl JsonFilePriceFeed {
    /// Create a feed reading the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PriceFeed for JsonFilePriceFeed {
    fn name(&self) -> &str {
        "json-file"
    }

    async fn fetch(&self) -> FeedResult<Vec<PriceEntry>> {
        debug!(path = %self.path.display(), "Reading price feed");
        let payload = tokio::fs::read_to_string(&self.path).await?;
        parse_feed(&payload)
    }
}
