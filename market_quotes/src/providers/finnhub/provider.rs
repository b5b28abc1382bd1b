use std::num::NonZeroU32;

use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use reqwest::Client;
use secrecy::SecretString;
use serde::de::DeserializeOwned;
use shared_utils::env::get_optional_env_var;
use snafu::ResultExt;
use tracing::{debug, warn};

use crate::{
    config::FinnhubConfig,
    models::{profile::CompanyProfile, quote::Quote},
    providers::{
        ClientInitError, ProfileProvider, QuoteProvider, UpstreamError,
        errors::{ClientBuildSnafu, InvalidBaseUrlSnafu},
        finnhub::{
            params::{construct_params, masked_token, truncate_body},
            response::{FinnhubProfile, FinnhubQuote},
        },
    },
};

pub const DEFAULT_BASE_URL: &str = "https://finnhub.io/api/v1";
pub const TOKEN_ENV_VAR: &str = "FINNHUB_API_KEY";

const QUOTE_PATH: &str = "/quote";
const PROFILE_PATH: &str = "/stock/profile2";

/// Finnhub REST client implementing both [`QuoteProvider`] and [`ProfileProvider`].
///
/// Constructed explicitly with its base URL and credential and then shared
/// (usually behind an `Arc`) by whoever needs it.
pub struct FinnhubClient {
    client: Client,
    base_url: String,
    token: Option<SecretString>,
    limiter: Option<DefaultDirectRateLimiter>,
}

impl FinnhubClient {
    /// Creates a client from configuration and an optional token.
    ///
    /// A missing token is not an error here: the client is still built, and
    /// every call fails with [`UpstreamError::MissingToken`].
    pub fn new(
        config: &FinnhubConfig,
        token: Option<SecretString>,
    ) -> Result<Self, ClientInitError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        match reqwest::Url::parse(&base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return InvalidBaseUrlSnafu {
                    url: base_url.clone(),
                    message: format!("unsupported scheme {:?}", url.scheme()),
                }
                .fail();
            }
            Err(e) => {
                return InvalidBaseUrlSnafu {
                    url: base_url.clone(),
                    message: e.to_string(),
                }
                .fail();
            }
        }

        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .context(ClientBuildSnafu)?;

        let limiter = NonZeroU32::new(config.requests_per_minute)
            .map(|rpm| RateLimiter::direct(Quota::per_minute(rpm)));

        Ok(Self {
            client,
            base_url,
            token,
            limiter,
        })
    }

    /// Creates a client, reading the token from the `FINNHUB_API_KEY`
    /// environment variable.
    pub fn from_env(config: &FinnhubConfig) -> Result<Self, ClientInitError> {
        let token = get_optional_env_var(TOKEN_ENV_VAR).map(SecretString::from);
        if token.is_none() {
            warn!(
                "{TOKEN_ENV_VAR} is not set; every request will fail and \
                 the dashboard will serve synthetic data"
            );
        }
        Self::new(config, token)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        symbol: &str,
    ) -> Result<T, UpstreamError> {
        let token = self.token.as_ref().ok_or(UpstreamError::MissingToken)?;

        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }

        let url = format!("{}{}", self.base_url, path);
        debug!(%url, symbol, token = masked_token(Some(token)), "Starting request to Finnhub");

        let response = self
            .client
            .get(&url)
            .query(&construct_params(symbol, token))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }
        debug!(%url, symbol, status = status.as_u16(), "Response from Finnhub");

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl QuoteProvider for FinnhubClient {
    async fn fetch_quote(&self, symbol: &str) -> Result<Quote, UpstreamError> {
        let raw: FinnhubQuote = self.get_json(QUOTE_PATH, symbol).await?;
        raw.into_quote(symbol)
    }
}

#[async_trait]
impl ProfileProvider for FinnhubClient {
    async fn fetch_profile(&self, symbol: &str) -> Result<CompanyProfile, UpstreamError> {
        let raw: FinnhubProfile = self.get_json(PROFILE_PATH, symbol).await?;
        raw.into_profile(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unusable_base_urls() {
        let config = FinnhubConfig {
            base_url: "not a url".into(),
            ..Default::default()
        };
        let err = FinnhubClient::new(&config, None).err().unwrap();
        assert!(matches!(err, ClientInitError::InvalidBaseUrl { .. }));

        let config = FinnhubConfig {
            base_url: "ftp://finnhub.io/api/v1".into(),
            ..Default::default()
        };
        let err = FinnhubClient::new(&config, None).err().unwrap();
        assert!(matches!(err, ClientInitError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = FinnhubConfig {
            base_url: "http://127.0.0.1:9/api/v1/".into(),
            requests_per_minute: 0,
            ..Default::default()
        };
        let client = FinnhubClient::new(&config, None).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9/api/v1");
        assert!(!client.has_token());
    }

    #[tokio::test]
    async fn missing_token_fails_without_a_request() {
        // Port 9 (discard) would refuse or hang; MissingToken proves no call was made.
        let config = FinnhubConfig {
            base_url: "http://127.0.0.1:9".into(),
            ..Default::default()
        };
        let client = FinnhubClient::new(&config, None).unwrap();

        let err = client.fetch_quote("AAPL").await.unwrap_err();
        assert!(matches!(err, UpstreamError::MissingToken));
        let err = client.fetch_profile("AAPL").await.unwrap_err();
        assert!(matches!(err, UpstreamError::MissingToken));
    }
}
