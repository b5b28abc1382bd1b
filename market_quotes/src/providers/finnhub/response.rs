use serde::Deserialize;

use crate::{
    models::{profile::CompanyProfile, quote::Quote},
    providers::UpstreamError,
};

/// Body of `GET /quote`.
///
/// Finnhub answers unknown symbols with `200` and an all-zero body whose
/// change fields are `null`, so every field is lenient here and the
/// conversion decides whether the quote is real.
#[derive(Deserialize, Debug, Default)]
pub struct FinnhubQuote {
    #[serde(rename = "c", default)]
    pub current: f64,
    #[serde(rename = "d", default)]
    pub change: Option<f64>,
    #[serde(rename = "dp", default)]
    pub change_percent: Option<f64>,
    #[serde(rename = "h", default)]
    pub high: f64,
    #[serde(rename = "l", default)]
    pub low: f64,
    #[serde(rename = "o", default)]
    pub open: f64,
    #[serde(rename = "pc", default)]
    pub previous_close: f64,
    #[serde(rename = "t", default)]
    pub timestamp: i64,
}

impl FinnhubQuote {
    pub fn into_quote(self, symbol: &str) -> Result<Quote, UpstreamError> {
        if self.current == 0.0 && self.timestamp == 0 {
            return Err(UpstreamError::NoData {
                symbol: symbol.to_string(),
            });
        }

        Ok(Quote {
            price: self.current,
            change: self.change.unwrap_or_default(),
            change_percent: self.change_percent.unwrap_or_default(),
            high: self.high,
            low: self.low,
            open: self.open,
            previous_close: self.previous_close,
            timestamp: self.timestamp,
        })
    }
}

/// Body of `GET /stock/profile2`. Unknown symbols come back as `{}`.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct FinnhubProfile {
    pub name: Option<String>,
    pub ticker: Option<String>,
    pub exchange: Option<String>,
    pub finnhub_industry: Option<String>,
    pub country: Option<String>,
    pub currency: Option<String>,
    pub ipo: Option<String>,
    pub logo: Option<String>,
    pub weburl: Option<String>,
    pub market_capitalization: Option<f64>,
    pub share_outstanding: Option<f64>,
}

impl FinnhubProfile {
    pub fn into_profile(self, symbol: &str) -> Result<CompanyProfile, UpstreamError> {
        let name = match self.name.map(|n| n.trim().to_string()) {
            Some(name) if !name.is_empty() => name,
            _ => {
                return Err(UpstreamError::NoData {
                    symbol: symbol.to_string(),
                });
            }
        };

        Ok(CompanyProfile {
            name,
            ticker: non_blank(self.ticker),
            exchange: non_blank(self.exchange),
            industry: non_blank(self.finnhub_industry),
            country: non_blank(self.country),
            currency: non_blank(self.currency),
            ipo: non_blank(self.ipo),
            logo: non_blank(self.logo),
            web_url: non_blank(self.weburl),
            market_capitalization: self.market_capitalization,
            shares_outstanding: self.share_outstanding,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_live_quote() {
        let body = r#"{"c":261.74,"d":-1.3,"dp":-0.4942,"h":263.31,"l":260.68,
            "o":261.07,"pc":263.04,"t":1761249600}"#;
        let quote = serde_json::from_str::<FinnhubQuote>(body)
            .unwrap()
            .into_quote("AAPL")
            .unwrap();

        assert_eq!(quote.price, 261.74);
        assert_eq!(quote.change, -1.3);
        assert_eq!(quote.change_percent, -0.4942);
        assert_eq!(quote.previous_close, 263.04);
        assert_eq!(quote.timestamp, 1761249600);
    }

    #[test]
    fn unknown_symbol_quote_is_no_data() {
        let body = r#"{"c":0,"d":null,"dp":null,"h":0,"l":0,"o":0,"pc":0,"t":0}"#;
        let err = serde_json::from_str::<FinnhubQuote>(body)
            .unwrap()
            .into_quote("ZZZZ")
            .unwrap_err();
        assert!(matches!(err, UpstreamError::NoData { ref symbol } if symbol == "ZZZZ"));
    }

    #[test]
    fn parses_a_profile_and_drops_blank_fields() {
        let body = r#"{
            "country": "US",
            "currency": "USD",
            "exchange": "NASDAQ NMS - GLOBAL MARKET",
            "finnhubIndustry": "Technology",
            "ipo": "1980-12-12",
            "logo": "",
            "marketCapitalization": 3884568.5,
            "name": "Apple Inc",
            "phone": "14089961010",
            "shareOutstanding": 14840.39,
            "ticker": "AAPL",
            "weburl": "https://www.apple.com/"
        }"#;
        let profile = serde_json::from_str::<FinnhubProfile>(body)
            .unwrap()
            .into_profile("AAPL")
            .unwrap();

        assert_eq!(profile.name, "Apple Inc");
        assert_eq!(profile.industry.as_deref(), Some("Technology"));
        assert_eq!(profile.web_url.as_deref(), Some("https://www.apple.com/"));
        assert_eq!(profile.logo, None);
        assert_eq!(profile.shares_outstanding, Some(14840.39));
    }

    #[test]
    fn empty_profile_is_no_data() {
        let err = serde_json::from_str::<FinnhubProfile>("{}")
            .unwrap()
            .into_profile("ZZZZ")
            .unwrap_err();
        assert!(matches!(err, UpstreamError::NoData { .. }));
    }
}
