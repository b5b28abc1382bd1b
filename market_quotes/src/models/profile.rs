//! Descriptive company metadata for a symbol.

/// Company metadata returned by a [`ProfileProvider`](crate::providers::ProfileProvider).
///
/// Only the display name is guaranteed; vendors leave the rest blank for
/// funds, indices and recently listed tickers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompanyProfile {
    /// Display name, e.g. "Apple Inc".
    pub name: String,
    pub ticker: Option<String>,
    pub exchange: Option<String>,
    pub industry: Option<String>,
    pub country: Option<String>,
    pub currency: Option<String>,
    /// Listing date as reported by the vendor (`YYYY-MM-DD`).
    pub ipo: Option<String>,
    pub logo: Option<String>,
    pub web_url: Option<String>,
    /// Market capitalization in millions of `currency`.
    pub market_capitalization: Option<f64>,
    /// Shares outstanding in millions.
    pub shares_outstanding: Option<f64>,
}
