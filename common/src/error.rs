//! Error types for QuoteSwap.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User-facing failure of a swap submission.
///
/// The set is closed. Each kind carries one message that is shown to the
/// user verbatim; kinds are recorded on the session rather than propagated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Amount missing, non-numeric, or not greater than zero.
    #[error("Please enter a valid amount greater than 0")]
    #[serde(rename = "INVALID_AMOUNT")]
    InvalidAmount,

    /// Source or target currency not selected.
    #[error("Please select both source and target currencies")]
    #[serde(rename = "MISSING_CURRENCIES")]
    MissingCurrencies,

    /// Source and target are the same currency.
    #[error("Source and target currencies must be different")]
    #[serde(rename = "SAME_CURRENCIES")]
    SameCurrencies,

    /// Catalog has no price for at least one side.
    #[error("Price data not available for selected currencies")]
    #[serde(rename = "PRICE_DATA_UNAVAILABLE")]
    PriceUnavailable,

    /// Quote could not be computed or committed after validation passed.
    #[error("Swap failed. Please try again.")]
    #[serde(rename = "SWAP_FAILED")]
    SubmissionFailed,
}

impl ErrorKind {
    /// All kinds, in validation order.
    pub const ALL: [ErrorKind; 5] = [
        ErrorKind::InvalidAmount,
        ErrorKind::MissingCurrencies,
        ErrorKind::SameCurrencies,
        ErrorKind::PriceUnavailable,
        ErrorKind::SubmissionFailed,
    ];

    /// Message shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::InvalidAmount => "Please enter a valid amount greater than 0",
            ErrorKind::MissingCurrencies => "Please select both source and target currencies",
            ErrorKind::SameCurrencies => "Source and target currencies must be different",
            ErrorKind::PriceUnavailable => "Price data not available for selected currencies",
            ErrorKind::SubmissionFailed => "Swap failed. Please try again.",
        }
    }

    /// Get error code for logs and serialized views.
    pub fn error_code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidAmount => "INVALID_AMOUNT",
            ErrorKind::MissingCurrencies => "MISSING_CURRENCIES",
            ErrorKind::SameCurrencies => "SAME_CURRENCIES",
            ErrorKind::PriceUnavailable => "PRICE_DATA_UNAVAILABLE",
            ErrorKind::SubmissionFailed => "SWAP_FAILED",
        }
    }

    /// Check if this kind comes out of request validation.
    pub fn is_validation(&self) -> bool {
        !matches!(self, ErrorKind::SubmissionFailed)
    }

    /// Check if resubmitting the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorKind::SubmissionFailed)
    }
}

/// Result type for quote operations.
pub type QuoteResult<T> = std::result::Result<T, ErrorKind>;
