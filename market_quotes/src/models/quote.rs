//! Canonical in-memory representation of a point-in-time price snapshot.
//!
//! This struct is the output of every [`QuoteProvider`](crate::providers::QuoteProvider)
//! implementation, independent of the vendor wire format.

/// A point-in-time price snapshot for one symbol.
///
/// Produced fresh per request; it carries no identity beyond the symbol it
/// was fetched for.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// Current (last traded) price.
    pub price: f64,

    /// Absolute change against the previous close.
    pub change: f64,

    /// Percent change against the previous close.
    pub change_percent: f64,

    /// Highest price of the current session.
    pub high: f64,

    /// Lowest price of the current session.
    pub low: f64,

    /// Opening price of the current session.
    pub open: f64,

    /// Previous session's closing price.
    pub previous_close: f64,

    /// Observation time as unix seconds, as reported by the vendor.
    pub timestamp: i64,
}
