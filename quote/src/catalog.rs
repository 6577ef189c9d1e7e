//! Price snapshot keyed by currency code.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use quoteswap_common::{parse_amount, CurrencyCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One row of the published price list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    /// Token code.
    pub currency: CurrencyCode,
    /// Unit price in the reference currency.
    pub price: f64,
}

impl PriceEntry {
    /// Create a new price entry.
    pub fn new(currency: impl Into<CurrencyCode>, price: f64) -> Self {
        Self {
            currency: currency.into(),
            price,
        }
    }

    /// Check whether the price can be used as a divisor.
    pub fn is_usable(&self) -> bool {
        self.price.is_finite() && self.price > 0.0
    }
}

/// Immutable mapping from currency code to unit price.
///
/// A missing key means the price is unavailable. Every stored price is
/// finite and strictly positive.
#[derive(Debug, Clone, Serialize)]
pub struct PriceCatalog {
    prices: HashMap<CurrencyCode, f64>,
    built_at: DateTime<Utc>,
}

impl PriceCatalog {
    /// Create an empty catalog.
    pub fn empty() -> Self {
        Self {
            prices: HashMap::new(),
            built_at: Utc::now(),
        }
    }

    /// Materialize feed entries in order.
    ///
    /// Duplicate codes are last-write-wins. An unusable price removes any
    /// earlier price for the same code.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = PriceEntry>,
    {
        let mut prices = HashMap::new();

        for entry in entries {
            if !entry.is_usable() {
                warn!(
                    currency = %entry.currency,
                    price = entry.price,
                    "Dropping unusable price"
                );
                prices.remove(&entry.currency);
                continue;
            }

            if let Some(previous) = prices.insert(entry.currency.clone(), entry.price) {
                debug!(
                    currency = %entry.currency,
                    previous,
                    price = entry.price,
                    "Duplicate price overwritten"
                );
            }
        }

        Self {
            prices,
            built_at: Utc::now(),
        }
    }

    /// Get the unit price of a currency.
    pub fn price(&self, currency: &CurrencyCode) -> Option<f64> {
        self.prices.get(currency).copied()
    }

    /// Check whether a currency is priced.
    pub fn contains(&self, currency: &CurrencyCode) -> bool {
        self.prices.contains_key(currency)
    }

    /// Units of `to` per unit of `from`.
    pub fn rate(&self, from: &CurrencyCode, to: &CurrencyCode) -> Option<f64> {
        Some(self.price(from)? / self.price(to)?)
    }

    /// Value of `amount_text` units of `currency` in the reference currency.
    pub fn reference_value(&self, currency: &CurrencyCode, amount_text: &str) -> Option<f64> {
        Some(parse_amount(amount_text)? * self.price(currency)?)
    }

    /// Priced currencies, sorted.
    pub fn currencies(&self) -> Vec<CurrencyCode> {
        let mut codes: Vec<CurrencyCode> = self.prices.keys().cloned().collect();
        codes.sort();
        codes
    }

    /// Get the number of priced currencies.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// When this snapshot was built.
    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }
}

impl Default for PriceCatalog {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromIterator<PriceEntry> for PriceCatalog {
    fn from_iter<I: IntoIterator<Item = PriceEntry>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

/// Shared price snapshot.
pub type SharedPriceCatalog = Arc<PriceCatalog>;

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::new(s)
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = PriceCatalog::from_entries(vec![
            PriceEntry::new("ETH", 2000.0),
            PriceEntry::new("USDC", 1.0),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.price(&code("ETH")), Some(2000.0));
        assert!(catalog.contains(&code("USDC")));
        assert!(!catalog.contains(&code("BTC")));
        assert_eq!(catalog.price(&code("BTC")), None);
    }

    #[test]
    fn test_duplicate_last_write_wins() {
        let catalog = PriceCatalog::from_entries(vec![
            PriceEntry::new("ETH", 1800.0),
            PriceEntry::new("USDC", 1.0),
            PriceEntry::new("ETH", 2000.0),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.price(&code("ETH")), Some(2000.0));
    }

    #[test]
    fn test_unusable_prices_are_unavailable() {
        let catalog = PriceCatalog::from_entries(vec![
            PriceEntry::new("ZERO", 0.0),
            PriceEntry::new("NEG", -3.0),
            PriceEntry::new("NAN", f64::NAN),
            PriceEntry::new("ETH", 2000.0),
            PriceEntry::new("ETH", 0.0),
        ]);

        assert!(catalog.is_empty());
        assert_eq!(catalog.rate(&code("ETH"), &code("ZERO")), None);
    }

    #[test]
    fn test_rate_and_reference_value() {
        let catalog: PriceCatalog = vec![
            PriceEntry::new("ETH", 2000.0),
            PriceEntry::new("USDC", 0.5),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.rate(&code("ETH"), &code("USDC")), Some(4000.0));
        assert_eq!(catalog.rate(&code("ETH"), &code("BTC")), None);
        assert_eq!(catalog.reference_value(&code("ETH"), "1.5"), Some(3000.0));
        assert_eq!(catalog.reference_value(&code("ETH"), "abc"), None);
        assert_eq!(catalog.reference_value(&code("BTC"), "1"), None);
    }

    #[test]
    fn test_currencies_sorted() {
        let catalog = PriceCatalog::from_entries(vec![
            PriceEntry::new("USDC", 1.0),
            PriceEntry::new("ATOM", 7.0),
            PriceEntry::new("ETH", 2000.0),
        ]);

        let codes: Vec<String> = catalog.currencies().iter().map(|c| c.to_string()).collect();
        assert_eq!(codes, vec!["ATOM", "ETH", "USDC"]);
    }
}
