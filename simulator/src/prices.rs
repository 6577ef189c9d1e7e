//! Built-in sample price list.

use quoteswap_engine::{PriceEntry, StaticPriceFeed};

/// USD prices used when no `--prices` file is given.
const SAMPLE_PRICES: &[(&str, f64)] = &[
    ("BLUR", 0.20811525423728813),
    ("BUSD", 0.999183113333333),
    ("USD", 1.0),
    ("ETH", 1645.9337373737374),
    ("GMX", 36.345114372881355),
    ("STEVMOS", 0.07276706779661017),
    ("LUNA", 0.40955638983050846),
    ("RATOM", 10.250619881355933),
    ("STRD", 0.7386650164722906),
    ("EVMOS", 0.06246181355932203),
    ("IBCX", 41.26811355932203),
    ("IRIS", 0.0177095593220339),
    ("ampLUNA", 0.49548589830508477),
    ("KUJI", 0.675),
    ("STOSMO", 0.431318),
    ("USDC", 0.989832),
    ("axlUSDC", 0.989832),
    ("ATOM", 7.186657333333334),
    ("STATOM", 8.512162050847458),
    ("OSMO", 0.3772974333333333),
    ("rSWTH", 0.00408771),
    ("STLUNA", 0.44232210169491526),
    ("LSI", 67.69661525423729),
    ("OKB", 42.97562059322034),
    ("OKT", 13.561577966101694),
    ("SWTH", 0.004039850455012084),
    ("USC", 0.994),
    ("WBTC", 26002.82202020202),
    ("wstETH", 1872.2579742372882),
    ("YieldUSD", 1.0389199898044066),
    ("ZIL", 0.01651813559322034),
];

/// In-memory feed over the sample prices.
pub fn sample_feed() -> StaticPriceFeed {
    let entries = SAMPLE_PRICES
        .iter()
        .map(|(currency, price)| PriceEntry::new(*currency, *price))
        .collect();
    StaticPriceFeed::new("sample", entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quoteswap_common::CURRENCIES;
    use quoteswap_engine::load_catalog;

    #[tokio::test]
    async fn test_sample_covers_currency_list() {
        let catalog = load_catalog(&sample_feed()).await.unwrap();

        assert_eq!(catalog.len(), CURRENCIES.len());
        for code in CURRENCIES {
            assert!(catalog.contains(&(*code).into()), "{code} is not priced");
        }
    }
}
