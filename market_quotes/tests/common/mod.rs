#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use market_quotes::{
    batch::{BatchFetcher, Pacing},
    models::{profile::CompanyProfile, quote::Quote},
    providers::{ProfileProvider, QuoteProvider, UpstreamError},
};
use tokio::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Quote,
    Profile,
}

#[derive(Debug, Clone)]
pub struct Call {
    pub kind: CallKind,
    pub symbol: String,
    pub at: Instant,
}

/// In-memory stand-in for both upstream endpoints.
///
/// Symbols without a scripted quote or profile fail with a 503.
#[derive(Default)]
pub struct FakeMarket {
    quotes: HashMap<String, Quote>,
    profiles: HashMap<String, String>,
    latency: Duration,
    calls: Mutex<Vec<Call>>,
}

impl FakeMarket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quote(mut self, symbol: &str, price: f64) -> Self {
        self.quotes.insert(symbol.to_string(), quote(price));
        self
    }

    pub fn with_profile(mut self, symbol: &str, name: &str) -> Self {
        self.profiles.insert(symbol.to_string(), name.to_string());
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_of(&self, kind: CallKind) -> Vec<Call> {
        self.calls().into_iter().filter(|c| c.kind == kind).collect()
    }

    async fn record(&self, kind: CallKind, symbol: &str) {
        self.calls.lock().unwrap().push(Call {
            kind,
            symbol: symbol.to_string(),
            at: Instant::now(),
        });
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

fn unavailable() -> UpstreamError {
    UpstreamError::Status {
        status: 503,
        body: "Service Unavailable".to_string(),
    }
}

#[async_trait]
impl QuoteProvider for FakeMarket {
    async fn fetch_quote(&self, symbol: &str) -> Result<Quote, UpstreamError> {
        self.record(CallKind::Quote, symbol).await;
        self.quotes.get(symbol).cloned().ok_or_else(unavailable)
    }
}

#[async_trait]
impl ProfileProvider for FakeMarket {
    async fn fetch_profile(&self, symbol: &str) -> Result<CompanyProfile, UpstreamError> {
        self.record(CallKind::Profile, symbol).await;
        self.profiles
            .get(symbol)
            .map(|name| CompanyProfile {
                name: name.clone(),
                ticker: Some(symbol.to_string()),
                ..Default::default()
            })
            .ok_or_else(unavailable)
    }
}

/// A deterministic quote around `price`.
pub fn quote(price: f64) -> Quote {
    Quote {
        price,
        change: 2.0,
        change_percent: 2.0 / (price - 2.0) * 100.0,
        high: price + 1.0,
        low: price - 3.0,
        open: price - 1.0,
        previous_close: price - 2.0,
        timestamp: 1_760_000_000,
    }
}

pub fn fetcher(market: &Arc<FakeMarket>, pacing: Pacing) -> BatchFetcher {
    BatchFetcher::new(market.clone(), market.clone(), pacing)
}

pub fn symbols(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
