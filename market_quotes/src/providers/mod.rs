//! Provider abstraction for quote and company-profile sources.
//!
//! This module defines the [`QuoteProvider`] and [`ProfileProvider`] traits,
//! the two independent capabilities the batch orchestrator depends on. Each
//! concrete vendor (currently Finnhub) implements both; tests substitute
//! in-memory fakes.
//!
//! The traits are designed for async usage and dynamic dispatch
//! (`Arc<dyn QuoteProvider>`), so the orchestrator never names a vendor type.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use market_quotes::models::quote::Quote;
//! use market_quotes::providers::{QuoteProvider, UpstreamError};
//!
//! struct FlatQuotes;
//!
//! #[async_trait]
//! impl QuoteProvider for FlatQuotes {
//!     async fn fetch_quote(&self, _symbol: &str) -> Result<Quote, UpstreamError> {
//!         Ok(Quote {
//!             price: 100.0,
//!             change: 0.0,
//!             change_percent: 0.0,
//!             high: 100.0,
//!             low: 100.0,
//!             open: 100.0,
//!             previous_close: 100.0,
//!             timestamp: 0,
//!         })
//!     }
//! }
//! ```

pub mod errors;
pub mod finnhub;

use async_trait::async_trait;

pub use errors::{ClientInitError, UpstreamError};

use crate::models::{profile::CompanyProfile, quote::Quote};

/// Fetches a point-in-time quote for one symbol.
///
/// Implementations issue one outbound call per invocation, do not cache, and
/// do not retry; retry and fallback policy belongs to the caller.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    async fn fetch_quote(&self, symbol: &str) -> Result<Quote, UpstreamError>;
}

/// Fetches descriptive company metadata for one symbol.
///
/// Independent of [`QuoteProvider`]: either may fail without affecting the
/// other.
#[async_trait]
pub trait ProfileProvider: Send + Sync {
    async fn fetch_profile(&self, symbol: &str) -> Result<CompanyProfile, UpstreamError>;
}
