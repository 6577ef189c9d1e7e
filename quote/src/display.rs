//! Fixed-point formatting of floating-point amounts.

use quoteswap_common::constants::precision::{QUOTE_DECIMALS, REFERENCE_DECIMALS};
use quoteswap_common::CurrencyCode;
use rust_decimal::{Decimal, RoundingStrategy};

/// Name of the reference currency prices are expressed in.
pub const REFERENCE_CURRENCY: &str = "USD";

/// Format `value` with exactly `decimals` fractional digits.
///
/// The binary value of the float is rounded half away from zero, the way a
/// fixed-point display of a double rounds. Returns `None` for non-finite
/// values and for magnitudes that do not fit a `Decimal` at that scale.
pub fn format_fixed(value: f64, decimals: u32) -> Option<String> {
    let mut fixed = Decimal::from_f64_retain(value)?
        .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    fixed.rescale(decimals);
    if fixed.scale() != decimals {
        return None;
    }
    Some(fixed.to_string())
}

/// Exchange rate line, e.g. `1 ETH = 2000.000000 USDC`.
pub fn exchange_rate_line(from: &CurrencyCode, to: &CurrencyCode, rate: f64) -> Option<String> {
    if rate.is_nan() || rate <= 0.0 {
        return None;
    }
    let rate = format_fixed(rate, QUOTE_DECIMALS)?;
    Some(format!("1 {} = {} {}", from, rate, to))
}

/// Reference-currency estimate, e.g. `≈ $3290.00 USD`.
pub fn reference_estimate(value: f64) -> Option<String> {
    let value = format_fixed(value, REFERENCE_DECIMALS)?;
    Some(format!("≈ ${} {}", value, REFERENCE_CURRENCY))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_fixed_pads() {
        assert_eq!(format_fixed(2000.0, 6).as_deref(), Some("2000.000000"));
        assert_eq!(format_fixed(0.5, 2).as_deref(), Some("0.50"));
        assert_eq!(format_fixed(0.0, 6).as_deref(), Some("0.000000"));
    }

    #[test]
    fn test_format_fixed_rounds_half_away_from_zero() {
        // 1/128 = 0.0078125 exactly, a true tie at the sixth digit
        assert_eq!(format_fixed(0.0078125, 6).as_deref(), Some("0.007813"));
        assert_eq!(format_fixed(-0.0078125, 6).as_deref(), Some("-0.007813"));
        assert_eq!(format_fixed(2.5, 0).as_deref(), Some("3"));
        assert_eq!(format_fixed(0.125, 2).as_deref(), Some("0.13"));
        // std formatting rounds this tie to even: "70006835224000.007812"
        assert_eq!(
            format_fixed(70006835224000.0078125, 6).as_deref(),
            Some("70006835224000.007813")
        );
    }

    #[test]
    fn test_format_fixed_uses_binary_value() {
        // 1.005 is stored as 1.00499999999999989..., so it rounds down
        assert_eq!(format_fixed(1.005, 2).as_deref(), Some("1.00"));
        assert_eq!(format_fixed(0.1 + 0.2, 6).as_deref(), Some("0.300000"));
    }

    #[test]
    fn test_format_fixed_rejects_unrepresentable() {
        assert_eq!(format_fixed(f64::NAN, 6), None);
        assert_eq!(format_fixed(f64::INFINITY, 6), None);
        assert_eq!(format_fixed(1e30, 6), None);
    }

    #[test]
    fn test_exchange_rate_line() {
        let eth = CurrencyCode::new("ETH");
        let usdc = CurrencyCode::new("USDC");

        assert_eq!(
            exchange_rate_line(&eth, &usdc, 2000.0).as_deref(),
            Some("1 ETH = 2000.000000 USDC")
        );
        assert_eq!(exchange_rate_line(&eth, &usdc, 0.0), None);
        assert_eq!(exchange_rate_line(&eth, &usdc, f64::NAN), None);
    }

    #[test]
    fn test_reference_estimate() {
        assert_eq!(reference_estimate(3290.0).as_deref(), Some("≈ $3290.00 USD"));
        assert_eq!(reference_estimate(0.004999).as_deref(), Some("≈ $0.00 USD"));
    }
}
