//! Static, process-wide reference tables.
//!
//! These are read-only lookups used as last-resort substitutes when live data
//! is unavailable. They are hard-coded per instrument and are not refreshed.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// Symbols shown on the dashboard when no configuration overrides them.
pub const DEFAULT_SYMBOLS: [&str; 8] = [
    "AAPL", "MSFT", "GOOGL", "META", "TSLA", "AMZN", "NVDA", "AVGO",
];

/// Canonical display names, consulted only when the profile fetch fails.
static FALLBACK_NAMES: Lazy<IndexMap<&'static str, &'static str>> = Lazy::new(|| {
    IndexMap::from([
        ("AAPL", "Apple Inc."),
        ("MSFT", "Microsoft Corporation"),
        ("AMZN", "Amazon.com Inc."),
        ("NVDA", "NVIDIA Corporation"),
        ("GOOGL", "Alphabet Inc."),
        ("META", "Meta Platforms Inc."),
        ("TSLA", "Tesla Inc."),
        ("AVGO", "Broadcom Inc."),
    ])
});

/// All-time-high baselines attached to live records.
static ALL_TIME_HIGHS: Lazy<IndexMap<&'static str, f64>> = Lazy::new(|| {
    IndexMap::from([
        ("GOOGL", 208.7),
        ("AVGO", 252.0),
        ("AAPL", 260.0),
        ("TSLA", 489.0),
        ("META", 719.0),
        ("MSFT", 468.0),
        ("AMZN", 236.0),
        ("NVDA", 153.0),
    ])
});

/// Looks up the fallback display name for `symbol`, if it is a known one.
pub fn fallback_name(symbol: &str) -> Option<&'static str> {
    FALLBACK_NAMES.get(symbol).copied()
}

/// Fallback name for `symbol`, degrading to the symbol itself.
pub fn display_name_or_symbol(symbol: &str) -> String {
    fallback_name(symbol).unwrap_or(symbol).to_string()
}

pub fn all_time_high(symbol: &str) -> Option<f64> {
    ALL_TIME_HIGHS.get(symbol).copied()
}

pub fn default_symbols() -> Vec<String> {
    DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect()
}
