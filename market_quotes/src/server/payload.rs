use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{
    batch::{BatchSummary, synthetic::synthesize},
    models::stock_record::StockRecord,
};

pub const PARTIAL_DATA_ERROR: &str = "Some stock data unavailable";
pub const DEGRADED_ERROR: &str = "Failed to fetch real stock data";

/// Body of a successful `GET /api/stocks`.
///
/// Always served with status 200; problems are reported through `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StocksPayload {
    pub stocks: Vec<StockRecord>,
    /// Response time in epoch milliseconds.
    pub timestamp: i64,
    pub error: Option<String>,
}

impl StocksPayload {
    /// Wraps a finished batch; flags the response when any record is synthetic.
    pub fn from_records(stocks: Vec<StockRecord>) -> Self {
        let error = BatchSummary::from_records(&stocks)
            .has_synthetic()
            .then(|| PARTIAL_DATA_ERROR.to_string());

        Self {
            stocks,
            timestamp: Utc::now().timestamp_millis(),
            error,
        }
    }

    /// Fully synthetic payload used when the batch could not finish in time.
    pub fn degraded(symbols: &[String]) -> Self {
        let mut rng = rand::rng();
        Self {
            stocks: symbols.iter().map(|s| synthesize(s, &mut rng)).collect(),
            timestamp: Utc::now().timestamp_millis(),
            error: Some(DEGRADED_ERROR.to_string()),
        }
    }
}

/// Body of a `500` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub error: String,
    pub message: String,
}
