//! Token icon resolution.

use quoteswap_common::CurrencyCode;

/// Tokens whose icon file name differs from their code.
pub const ICON_OVERRIDES: &[(&str, &str)] = &[
    ("STATOM", "stATOM"),
    ("RATOM", "rATOM"),
    ("STEVMOS", "stEVMOS"),
    ("STLUNA", "stLUNA"),
    ("STOSMO", "stOSMO"),
];

/// Icon file name for a token, without extension.
pub fn icon_name(currency: &CurrencyCode) -> &str {
    for (code, name) in ICON_OVERRIDES {
        if *code == currency.code() {
            return name;
        }
    }
    currency.code()
}

/// Icon URL for a token under `base_url`.
pub fn icon_url(base_url: &str, currency: &CurrencyCode) -> String {
    format!("{}/{}.svg", base_url.trim_end_matches('/'), icon_name(currency))
}
