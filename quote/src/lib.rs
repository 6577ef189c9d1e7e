//! QuoteSwap Engine
//!
//! Price snapshot, validation pipeline and quote computation for token swaps.
//!
//! # Features
//!
//! - Price catalog built once per session from a feed, last-write-wins
//! - Ordered, short-circuiting validation of conversion requests
//! - Quotes rounded to six decimals, half away from zero
//! - Exchange rate and reference-currency display helpers
//!
//! # Example
//!
//! ```rust,ignore
//! use quoteswap_common::ConversionRequest;
//! use quoteswap_engine::{PriceCatalog, PriceEntry, QuoteEngine};
//!
//! let engine = QuoteEngine::from_catalog(PriceCatalog::from_entries(vec![
//!     PriceEntry::new("ETH", 2000.0),
//!     PriceEntry::new("USDC", 1.0),
//! ]));
//!
//! let quote = engine.quote(&ConversionRequest::new("ETH", "USDC", "1"))?;
//! assert_eq!(quote.to_amount, "2000.000000");
//! ```

pub mod catalog;
pub mod display;
pub mod engine;
pub mod error;
pub mod feed;
pub mod icons;
pub mod quote;
pub mod validation;

pub use catalog::{PriceCatalog, PriceEntry, SharedPriceCatalog};
pub use engine::QuoteEngine;
pub use error::{FeedError, FeedResult};
pub use feed::{load_catalog, parse_feed, JsonFilePriceFeed, PriceFeed, StaticPriceFeed};
pub use icons::icon_url;
pub use quote::{compute, Quote};
pub use validation::{validate, ValidatedRequest};
