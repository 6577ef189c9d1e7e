//! Quote engine bound to one price snapshot.

use std::sync::Arc;

use quoteswap_common::{ConversionRequest, CurrencyCode, QuoteResult};
use tracing::{debug, info, instrument, warn};

use crate::catalog::{PriceCatalog, SharedPriceCatalog};
use crate::display::{exchange_rate_line, reference_estimate};
use crate::quote::{compute, Quote};
use crate::validation::{validate, ValidatedRequest};

/// Validation and quoting against a fixed price snapshot.
#[derive(Debug, Clone)]
pub struct QuoteEngine {
    catalog: SharedPriceCatalog,
}

impl QuoteEngine {
    /// Create a new engine over the given snapshot.
    pub fn new(catalog: SharedPriceCatalog) -> Self {
        Self { catalog }
    }

    /// Create an engine owning the snapshot.
    pub fn from_catalog(catalog: PriceCatalog) -> Self {
        Self::new(Arc::new(catalog))
    }

    /// The price snapshot.
    pub fn catalog(&self) -> &PriceCatalog {
        &self.catalog
    }

    /// Run the validation pipeline.
    #[instrument(skip(self, request), fields(pair = %request.pair(), amount = %request.from_amount_text))]
    pub fn validate(&self, request: &ConversionRequest) -> QuoteResult<ValidatedRequest> {
        let result = validate(request, &self.catalog);
        if let Err(kind) = &result {
            debug!(code = kind.error_code(), "Validation failed");
        }
        result
    }

    /// Compute the quote for a validated request.
    #[instrument(skip(self, validated), fields(pair = %validated.pair()))]
    pub fn compute(&self, validated: &ValidatedRequest) -> QuoteResult<Quote> {
        match compute(validated, &self.catalog) {
            Ok(quote) => {
                info!(
                    rate = quote.rate,
                    amount = validated.amount(),
                    to_amount = %quote.to_amount,
                    "Quote computed"
                );
                Ok(quote)
            }
            Err(kind) => {
                warn!(code = kind.error_code(), "Quote computation failed");
                Err(kind)
            }
        }
    }

    /// Validate and compute in one step.
    pub fn quote(&self, request: &ConversionRequest) -> QuoteResult<Quote> {
        let validated = self.validate(request)?;
        self.compute(&validated)
    }

    /// Current rate between two currencies, if both are priced.
    pub fn exchange_rate(&self, from: &CurrencyCode, to: &CurrencyCode) -> Option<f64> {
        self.catalog.rate(from, to)
    }

    /// Display line for the current rate.
    pub fn exchange_rate_line(&self, from: &CurrencyCode, to: &CurrencyCode) -> Option<String> {
        exchange_rate_line(from, to, self.exchange_rate(from, to)?)
    }

    /// Reference-currency estimate for an amount of `currency`.
    pub fn reference_estimate(&self, currency: &CurrencyCode, amount_text: &str) -> Option<String> {
        reference_estimate(self.catalog.reference_value(currency, amount_text)?)
    }
}
