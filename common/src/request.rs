//! Conversion requests and amount text handling.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{CurrencyCode, CurrencyPair};

/// Raw conversion request as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// Currency being sold.
    pub from_currency: CurrencyCode,
    /// Currency being bought.
    pub to_currency: CurrencyCode,
    /// Unparsed amount text.
    pub from_amount_text: String,
}

impl ConversionRequest {
    /// Create a new conversion request.
    pub fn new(
        from_currency: impl Into<CurrencyCode>,
        to_currency: impl Into<CurrencyCode>,
        from_amount_text: impl Into<String>,
    ) -> Self {
        Self {
            from_currency: from_currency.into(),
            to_currency: to_currency.into(),
            from_amount_text: from_amount_text.into(),
        }
    }

    /// Get the currency pair.
    pub fn pair(&self) -> CurrencyPair {
        CurrencyPair::new(self.from_currency.clone(), self.to_currency.clone())
    }

    /// Parse the amount text, see [`parse_amount`].
    pub fn amount(&self) -> Option<f64> {
        parse_amount(&self.from_amount_text)
    }
}

lazy_static! {
    /// Optional digits, optional single decimal point, optional digits.
    /// ASCII digits only; `\d` would also admit other Unicode digits.
    static ref AMOUNT_PATTERN: Regex =
        Regex::new(r"^[0-9]*\.?[0-9]*$").expect("Invalid regex pattern");
}

/// Check the text against the amount pattern `^\d*\.?\d*$`.
///
/// The empty string and a lone `.` match; neither parses as a number.
pub fn matches_amount_pattern(text: &str) -> bool {
    AMOUNT_PATTERN.is_match(text)
}

/// Parse amount text into a finite number.
///
/// Returns `None` when the text does not match the amount pattern or has no
/// digits. Signs, exponents and whitespace are rejected by the pattern.
pub fn parse_amount(text: &str) -> Option<f64> {
    if !matches_amount_pattern(text) || !text.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Inline problem with the amount field, checked before submit is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AmountIssue {
    /// Nothing entered.
    Required,
    /// Text is not a plain decimal number.
    NotANumber,
    /// Number is zero.
    NotPositive,
}

impl AmountIssue {
    /// Message shown next to the field.
    pub fn message(&self) -> &'static str {
        match self {
            AmountIssue::Required => "Amount is required",
            AmountIssue::NotANumber => "Please enter a valid number",
            AmountIssue::NotPositive => "Amount must be greater than 0",
        }
    }
}

impl fmt::Display for AmountIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Field-level amount check, first issue wins.
pub fn check_amount_field(text: &str) -> Option<AmountIssue> {
    if text.is_empty() {
        return Some(AmountIssue::Required);
    }
    if !matches_amount_pattern(text) {
        return Some(AmountIssue::NotANumber);
    }
    match parse_amount(text) {
        Some(v) if v > 0.0 => None,
        // "." matches the pattern but carries no number
        _ => Some(AmountIssue::NotPositive),
    }
}
