//! Session configuration.

use std::time::Duration;

use quoteswap_common::constants::{self, endpoints};
use quoteswap_common::{defaults, CurrencyCode};

/// Main session configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Source currency of a fresh or reset session.
    pub default_from: CurrencyCode,
    /// Target currency of a fresh or reset session.
    pub default_to: CurrencyCode,
    /// Amount text of a fresh or reset session.
    pub default_amount: String,
    /// Simulated latency between validation and quote.
    pub submit_latency: Duration,
    /// Base URL for token icons.
    pub icon_base_url: String,
    /// Where the external fetcher reads the price list from.
    pub prices_endpoint: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_from: CurrencyCode::new(defaults::FROM_CURRENCY),
            default_to: CurrencyCode::new(defaults::TO_CURRENCY),
            default_amount: defaults::FROM_AMOUNT.to_string(),
            submit_latency: constants::submit_latency(),
            icon_base_url: endpoints::TOKEN_ICONS.to_string(),
            prices_endpoint: endpoints::PRICES.to_string(),
        }
    }
}

impl SessionConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(code) = std::env::var("QUOTESWAP_DEFAULT_FROM") {
            config.default_from = CurrencyCode::new(code);
        }

        if let Ok(code) = std::env::var("QUOTESWAP_DEFAULT_TO") {
            config.default_to = CurrencyCode::new(code);
        }

        if let Ok(ms) = std::env::var("QUOTESWAP_SUBMIT_LATENCY_MS") {
            if let Ok(ms) = ms.parse() {
                config.submit_latency = Duration::from_millis(ms);
            }
        }

        if let Ok(url) = std::env::var("QUOTESWAP_ICON_BASE_URL") {
            config.icon_base_url = url;
        }

        if let Ok(url) = std::env::var("QUOTESWAP_PRICES_ENDPOINT") {
            config.prices_endpoint = url;
        }

        config
    }

    /// Scale the submit latency, e.g. `2.0` halves it.
    pub fn with_speed(mut self, speed: f64) -> Self {
        if speed.is_finite() && speed > 0.0 {
            self.submit_latency = self.submit_latency.div_f64(speed);
        }
        self
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.default_from.is_empty() || self.default_to.is_empty() {
            return Err("Default currencies cannot be empty".to_string());
        }

        if self.default_from == self.default_to {
            return Err("Default source and target currencies must differ".to_string());
        }

        if self.icon_base_url.is_empty() {
            return Err("Icon base URL cannot be empty".to_string());
        }

        Ok(())
    }
}
