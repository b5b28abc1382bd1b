//! Market quotes dashboard backend.
//!
//! Fetches quotes and company profiles for a list of symbols from Finnhub,
//! one symbol at a time with fixed pacing, and degrades each symbol through
//! three tiers (full, partial name, synthetic) instead of failing. The
//! result is served as JSON to a dashboard client.

pub mod batch;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod models;
pub mod providers;
pub mod reference;
pub mod server;
