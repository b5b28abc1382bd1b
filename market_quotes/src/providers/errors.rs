use snafu::{Backtrace, Snafu};
use thiserror::Error;

/// Failure of a single upstream call (quote or profile).
///
/// This is the only error kind the clients propagate. The batch orchestrator
/// always catches it at the per-symbol boundary and demotes the symbol's tier.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Network failure, timeout, or an undecodable body.
    #[error("API request failed: {0}")]
    Request(reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API responded with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The API answered successfully but had nothing for this symbol.
    #[error("No data returned for symbol {symbol}")]
    NoData { symbol: String },

    /// No API token is configured, so no request was sent.
    #[error("API token is not configured")]
    MissingToken,
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the token as a query parameter.
        UpstreamError::Request(err.without_url())
    }
}

/// Errors that can occur while constructing a client.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ClientInitError {
    /// failed to init reqwest client
    #[snafu(display("Failed to build HTTP client: {source}"))]
    ClientBuild {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The configured base URL is not an absolute http(s) URL.
    #[snafu(display("Invalid base URL {url:?}: {message}"))]
    InvalidBaseUrl {
        url: String,
        message: String,
        backtrace: Backtrace,
    },
}
