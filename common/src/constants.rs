//! Timing and precision constants for QuoteSwap.

use std::time::Duration;

/// Simulated submission latency (2 seconds).
pub fn submit_latency() -> Duration {
    Duration::from_millis(2000)
}

/// Display precision.
pub mod precision {
    /// Fractional digits of a quoted amount and of the exchange rate line.
    pub const QUOTE_DECIMALS: u32 = 6;

    /// Fractional digits of a reference-currency estimate.
    pub const REFERENCE_DECIMALS: u32 = 2;
}

/// Messages that are not tied to an [`crate::ErrorKind`].
pub mod messages {
    /// Shown after a quote lands.
    pub const SWAP_SUCCEEDED: &str = "Swap completed successfully!";
}

/// Collaborator endpoints.
pub mod endpoints {
    /// Published price list.
    pub const PRICES: &str = "https://interview.switcheo.com/prices.json";

    /// Base URL of token icons.
    pub const TOKEN_ICONS: &str = "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens";
}
