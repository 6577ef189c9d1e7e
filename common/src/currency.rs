//! Currency codes and the listed token set.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tokens offered for selection, in display order.
pub const CURRENCIES: &[&str] = &[
    "ampLUNA", "ATOM", "axlUSDC", "BLUR", "BUSD", "EVMOS", "ETH", "GMX", "IBCX", "IRIS", "KUJI",
    "LSI", "LUNA", "OKB", "OKT", "OSMO", "RATOM", "STATOM", "STEVMOS", "STLUNA", "STOSMO", "STRD",
    "SWTH", "rSWTH", "USC", "USD", "USDC", "WBTC", "wstETH", "YieldUSD", "ZIL",
];

/// Default selections for a fresh session.
pub mod defaults {
    /// Source currency of a fresh session.
    pub const FROM_CURRENCY: &str = "ETH";

    /// Target currency of a fresh session.
    pub const TO_CURRENCY: &str = "USDC";

    /// Amount text of a fresh session.
    pub const FROM_AMOUNT: &str = "";
}

/// A token code such as `ETH` or `wstETH`.
///
/// Codes are case-sensitive and kept verbatim; `rSWTH` and `SWTH` are
/// different tokens. The empty code means "not selected".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Create a currency code from its text.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The unset code.
    pub fn unset() -> Self {
        Self(String::new())
    }

    /// Get the code text.
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Check whether no currency is selected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check whether the code is one of [`CURRENCIES`].
    pub fn is_listed(&self) -> bool {
        CURRENCIES.contains(&self.0.as_str())
    }

    pub fn default_from() -> Self {
        Self::new(defaults::FROM_CURRENCY)
    }

    pub fn default_to() -> Self {
        Self::new(defaults::TO_CURRENCY)
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CurrencyCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Source and target currency of a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    /// Currency being sold.
    pub base: CurrencyCode,
    /// Currency being bought.
    pub quote: CurrencyCode,
}

impl CurrencyPair {
    /// Create a new currency pair.
    pub fn new(base: CurrencyCode, quote: CurrencyCode) -> Self {
        Self { base, quote }
    }

    /// Get the inverse pair.
    pub fn inverse(&self) -> Self {
        Self {
            base: self.quote.clone(),
            quote: self.base.clone(),
        }
    }

    /// Check whether both sides name the same currency.
    pub fn is_same(&self) -> bool {
        self.base == self.quote
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}
