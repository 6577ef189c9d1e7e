//! Quote computation.

use chrono::{DateTime, Utc};
use quoteswap_common::constants::precision::QUOTE_DECIMALS;
use quoteswap_common::{CurrencyPair, ErrorKind, QuoteResult};
use serde::{Deserialize, Serialize};

use crate::catalog::PriceCatalog;
use crate::display::format_fixed;
use crate::validation::ValidatedRequest;

/// Computed conversion for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Pair the quote was computed for.
    pub pair: CurrencyPair,
    /// Units of the target per unit of the source.
    pub rate: f64,
    /// Converted amount with exactly six fractional digits.
    pub to_amount: String,
    /// When the quote was computed.
    pub quoted_at: DateTime<Utc>,
}

/// Compute the quote for a validated request.
///
/// `rate = price[from] / price[to]` and
/// `to_amount = round(amount * rate, 6)`, rounded half away from zero.
/// This is `f64` arithmetic, not arbitrary-precision decimal; digits past
/// roughly the fifteenth significant one are not meaningful.
///
/// Fails with `SubmissionFailed` when a price is missing from `catalog`
/// (a different snapshot than the one validated against) or when the
/// result cannot be represented at six decimals.
pub fn compute(validated: &ValidatedRequest, catalog: &PriceCatalog) -> QuoteResult<Quote> {
    let pair = validated.pair();
    let rate = catalog
        .rate(&pair.base, &pair.quote)
        .ok_or(ErrorKind::SubmissionFailed)?;

    let to_amount =
        format_fixed(validated.amount() * rate, QUOTE_DECIMALS).ok_or(ErrorKind::SubmissionFailed)?;

    Ok(Quote {
        pair,
        rate,
        to_amount,
        quoted_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PriceEntry;
    use crate::validation::validate;
    use proptest::prelude::*;
    use quoteswap_common::ConversionRequest;

    fn quote_for(catalog: &PriceCatalog, from: &str, to: &str, amount: &str) -> QuoteResult<Quote> {
        let validated = validate(&ConversionRequest::new(from, to, amount), catalog)?;
        compute(&validated, catalog)
    }

    #[test]
    fn test_eth_to_usdc() {
        let catalog = PriceCatalog::from_entries(vec![
            PriceEntry::new("ETH", 2000.0),
            PriceEntry::new("USDC", 1.0),
        ]);

        let quote = quote_for(&catalog, "ETH", "USDC", "1").unwrap();

        assert_eq!(quote.rate, 2000.0);
        assert_eq!(quote.to_amount, "2000.000000");
        assert_eq!(quote.pair.to_string(), "ETH/USDC");
    }

    #[test]
    fn test_usdc_to_eth() {
        let catalog = PriceCatalog::from_entries(vec![
            PriceEntry::new("ETH", 2000.0),
            PriceEntry::new("USDC", 1.0),
        ]);

        let quote = quote_for(&catalog, "USDC", "ETH", "3").unwrap();

        assert_eq!(quote.rate, 0.0005);
        assert_eq!(quote.to_amount, "0.001500");
    }

    #[test]
    fn test_small_result_rounds_to_zero() {
        let catalog = PriceCatalog::from_entries(vec![
            PriceEntry::new("SWTH", 0.000001),
            PriceEntry::new("WBTC", 26000.0),
        ]);

        let quote = quote_for(&catalog, "SWTH", "WBTC", "1").unwrap();

        assert_eq!(quote.to_amount, "0.000000");
    }

    #[test]
    fn test_price_missing_from_other_snapshot() {
        let validated_against = PriceCatalog::from_entries(vec![
            PriceEntry::new("ETH", 2000.0),
            PriceEntry::new("USDC", 1.0),
        ]);
        let stale = PriceCatalog::from_entries(vec![PriceEntry::new("ETH", 2000.0)]);

        let validated =
            validate(&ConversionRequest::new("ETH", "USDC", "1"), &validated_against).unwrap();

        assert_eq!(compute(&validated, &stale), Err(ErrorKind::SubmissionFailed));
    }

    #[test]
    fn test_unrepresentable_result() {
        let catalog = PriceCatalog::from_entries(vec![
            PriceEntry::new("BIG", 1e300),
            PriceEntry::new("TINY", 1e-300),
        ]);

        assert_eq!(
            quote_for(&catalog, "BIG", "TINY", "1"),
            Err(ErrorKind::SubmissionFailed)
        );
    }

    proptest! {
        #[test]
        fn prop_to_amount_matches_std_fixed_formatting(
            units in 1u32..1_000_000,
            from_price in 0.0001f64..100_000.0,
            to_price in 0.0001f64..100_000.0,
        ) {
            let catalog = PriceCatalog::from_entries(vec![
                PriceEntry::new("AAA", from_price),
                PriceEntry::new("BBB", to_price),
            ]);
            let amount_text = format!("{}.{:02}", units / 100, units % 100);
            let amount: f64 = amount_text.parse().unwrap();

            let product = amount * (from_price / to_price);
            // exact ties at the sixth decimal are multiples of 2^-7; std rounds
            // those half to even, so only non-tie values are compared
            prop_assume!((product * 128.0).fract() != 0.0);

            let quote = quote_for(&catalog, "AAA", "BBB", &amount_text).unwrap();

            prop_assert_eq!(quote.rate, from_price / to_price);
            prop_assert_eq!(quote.to_amount, format!("{:.6}", product));
        }
    }
}
