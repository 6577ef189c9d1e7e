//! Ordered validation of conversion requests.

use quoteswap_common::{ConversionRequest, CurrencyPair, ErrorKind, QuoteResult};
use serde::Serialize;

use crate::catalog::PriceCatalog;

/// A request that passed every validation rule.
///
/// Only [`validate`] produces this type, so holding one proves the amount is
/// positive, the currencies are set and distinct, and both sides were priced
/// in the catalog it was checked against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedRequest {
    request: ConversionRequest,
    amount: f64,
}

impl ValidatedRequest {
    /// The original request.
    pub fn request(&self) -> &ConversionRequest {
        &self.request
    }

    /// Parsed amount, strictly positive.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Get the currency pair.
    pub fn pair(&self) -> CurrencyPair {
        self.request.pair()
    }
}

/// Run the rules in order and report the first one violated:
///
/// 1. amount parses and is greater than zero, else `InvalidAmount`
/// 2. both currencies are set, else `MissingCurrencies`
/// 3. currencies differ, else `SameCurrencies`
/// 4. both currencies are priced, else `PriceUnavailable`
///
/// Later rules are not evaluated once one fails.
pub fn validate(request: &ConversionRequest, catalog: &PriceCatalog) -> QuoteResult<ValidatedRequest> {
    let amount = match request.amount() {
        Some(amount) if amount > 0.0 => amount,
        _ => return Err(ErrorKind::InvalidAmount),
    };

    if request.from_currency.is_empty() || request.to_currency.is_empty() {
        return Err(ErrorKind::MissingCurrencies);
    }

    if request.from_currency == request.to_currency {
        return Err(ErrorKind::SameCurrencies);
    }

    if !catalog.contains(&request.from_currency) || !catalog.contains(&request.to_currency) {
        return Err(ErrorKind::PriceUnavailable);
    }

    Ok(ValidatedRequest {
        request: request.clone(),
        amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PriceEntry;

    fn catalog() -> PriceCatalog {
        PriceCatalog::from_entries(vec![
            PriceEntry::new("ETH", 2000.0),
            PriceEntry::new("USDC", 1.0),
            PriceEntry::new("ATOM", 7.5),
        ])
    }

    fn check(from: &str, to: &str, amount: &str) -> QuoteResult<ValidatedRequest> {
        validate(&ConversionRequest::new(from, to, amount), &catalog())
    }

    #[test]
    fn test_valid_request() {
        let validated = check("ETH", "USDC", "1.5").unwrap();

        assert_eq!(validated.amount(), 1.5);
        assert_eq!(validated.pair().to_string(), "ETH/USDC");
    }

    #[test]
    fn test_invalid_amounts() {
        for amount in ["", "0", "0.0", ".", "-1", "abc", "1.2.3", " 1", "1e3"] {
            assert_eq!(check("ETH", "USDC", amount), Err(ErrorKind::InvalidAmount), "{amount:?}");
        }
    }

    #[test]
    fn test_missing_currencies() {
        assert_eq!(check("", "USDC", "1"), Err(ErrorKind::MissingCurrencies));
        assert_eq!(check("ETH", "", "1"), Err(ErrorKind::MissingCurrencies));
        assert_eq!(check("", "", "1"), Err(ErrorKind::MissingCurrencies));
    }

    #[test]
    fn test_same_currencies() {
        assert_eq!(check("ETH", "ETH", "1"), Err(ErrorKind::SameCurrencies));
    }

    #[test]
    fn test_one_side_unpriced() {
        assert_eq!(check("BTC", "USDC", "1"), Err(ErrorKind::PriceUnavailable));
        assert_eq!(check("ETH", "BTC", "1"), Err(ErrorKind::PriceUnavailable));
    }

    #[test]
    fn test_amount_rule_runs_first() {
        // identical and unpriced currencies, but the amount is checked first
        assert_eq!(check("BTC", "BTC", "-1"), Err(ErrorKind::InvalidAmount));
        assert_eq!(check("", "", ""), Err(ErrorKind::InvalidAmount));
    }

    #[test]
    fn test_same_currency_rule_runs_before_price_rule() {
        assert_eq!(check("BTC", "BTC", "1"), Err(ErrorKind::SameCurrencies));
    }

    #[test]
    fn test_missing_rule_runs_before_price_rule() {
        assert_eq!(check("", "BTC", "1"), Err(ErrorKind::MissingCurrencies));
    }

    #[test]
    fn test_codes_compare_case_sensitively() {
        let catalog = PriceCatalog::from_entries(vec![
            PriceEntry::new("SWTH", 0.004),
            PriceEntry::new("rSWTH", 0.004),
        ]);
        let request = ConversionRequest::new("SWTH", "rSWTH", "10");

        assert!(validate(&request, &catalog).is_ok());
    }
}
