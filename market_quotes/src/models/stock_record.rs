//! The merged, externally visible record served to the dashboard.

use serde::{Deserialize, Serialize};

use crate::models::quote::Quote;

/// Which resolution tier produced a [`StockRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Live quote and live company profile.
    Full,
    /// Live quote; the name came from the fallback table or the symbol.
    Partial,
    /// No live data at all; values are placeholders.
    Synthetic,
}

/// One dashboard card: a quote merged with a display name.
///
/// Every field is always populated. `update_time` and `all_time_high` are
/// `None` only for [`Tier::Synthetic`] records, which carry no meaningful
/// observation time or reference values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    pub symbol: String,
    pub company_name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub high_day: f64,
    pub low_day: f64,
    pub open_price: f64,
    pub prev_close: f64,
    /// Vendor observation time in unix seconds.
    pub update_time: Option<i64>,
    pub all_time_high: Option<f64>,
    /// Tier tag, so consumers can tell live data from placeholders.
    pub source: Tier,
}

impl StockRecord {
    /// Builds a record from a live quote.
    pub fn from_quote(
        symbol: &str,
        company_name: String,
        quote: &Quote,
        all_time_high: Option<f64>,
        source: Tier,
    ) -> Self {
        Self {
            symbol: symbol.to_string(),
            company_name,
            price: quote.price,
            change: quote.change,
            change_percent: quote.change_percent,
            high_day: quote.high,
            low_day: quote.low,
            open_price: quote.open,
            prev_close: quote.previous_close,
            update_time: Some(quote.timestamp),
            all_time_high,
            source,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        self.source == Tier::Synthetic
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn serializes_in_camel_case_with_tier_tag() {
        let quote = Quote {
            price: 190.5,
            change: 1.5,
            change_percent: 0.79,
            high: 191.0,
            low: 188.2,
            open: 189.0,
            previous_close: 189.0,
            timestamp: 1_700_000_000,
        };
        let record =
            StockRecord::from_quote("AAPL", "Apple Inc".into(), &quote, Some(260.0), Tier::Full);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "symbol": "AAPL",
                "companyName": "Apple Inc",
                "price": 190.5,
                "change": 1.5,
                "changePercent": 0.79,
                "highDay": 191.0,
                "lowDay": 188.2,
                "openPrice": 189.0,
                "prevClose": 189.0,
                "updateTime": 1_700_000_000,
                "allTimeHigh": 260.0,
                "source": "full"
            })
        );
        assert!(!record.is_synthetic());
    }
}
