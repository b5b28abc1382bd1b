use std::sync::Arc;

use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::{
    batch::{
        pacing::Pacing,
        tier::{Resolution, resolve},
    },
    models::stock_record::{StockRecord, Tier},
    providers::{ProfileProvider, QuoteProvider, finnhub::FinnhubClient},
};

/// Sequential, paced batch fetcher with per-symbol fallback tiers.
///
/// Symbols are processed strictly one at a time. For each symbol the quote
/// and profile are fetched concurrently and both are awaited before the tier
/// is decided. Upstream failures only demote a symbol; they never abort the
/// batch and never surface to the caller.
#[derive(Clone)]
pub struct BatchFetcher {
    quotes: Arc<dyn QuoteProvider>,
    profiles: Arc<dyn ProfileProvider>,
    pacing: Pacing,
}

impl BatchFetcher {
    pub fn new(
        quotes: Arc<dyn QuoteProvider>,
        profiles: Arc<dyn ProfileProvider>,
        pacing: Pacing,
    ) -> Self {
        Self {
            quotes,
            profiles,
            pacing,
        }
    }

    /// Uses one Finnhub client for both quotes and profiles.
    pub fn from_client(client: Arc<FinnhubClient>, pacing: Pacing) -> Self {
        Self::new(client.clone(), client, pacing)
    }

    /// Returns one record per input symbol, in input order.
    ///
    /// An empty input returns an empty list without issuing any call.
    pub async fn fetch_batch(&self, symbols: &[String]) -> Vec<StockRecord> {
        if symbols.is_empty() {
            return Vec::new();
        }

        let started = Instant::now();
        info!(count = symbols.len(), "Starting to fetch stocks sequentially");

        let records = self
            .pacing
            .run(symbols, |symbol| self.fetch_symbol(symbol))
            .await;

        let summary = BatchSummary::from_records(&records);
        info!(
            full = summary.full,
            partial = summary.partial,
            synthetic = summary.synthetic,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Completed fetching {}/{} stocks from live data",
            summary.live(),
            summary.total()
        );

        records
    }

    /// Resolves a single symbol through the tiers.
    pub async fn fetch_symbol(&self, symbol: &str) -> StockRecord {
        debug!(symbol, "Processing stock");

        let (quote, profile) = tokio::join!(
            self.quotes.fetch_quote(symbol),
            self.profiles.fetch_profile(symbol),
        );

        if let Err(e) = &quote {
            warn!(symbol, error = %e, "Quote fetch failed, using synthetic data");
        } else if let Err(e) = &profile {
            warn!(symbol, error = %e, "Profile fetch failed, using fallback company name");
        }

        let resolution: Resolution = resolve(quote, profile);
        debug!(symbol, tier = ?resolution.tier(), "Resolved stock");

        resolution.into_record(symbol, &mut rand::rng())
    }
}

/// Per-tier counts for one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub full: usize,
    pub partial: usize,
    pub synthetic: usize,
}

impl BatchSummary {
    pub fn from_records(records: &[StockRecord]) -> Self {
        records.iter().fold(Self::default(), |mut acc, r| {
            match r.source {
                Tier::Full => acc.full += 1,
                Tier::Partial => acc.partial += 1,
                Tier::Synthetic => acc.synthetic += 1,
            }
            acc
        })
    }

    pub fn total(&self) -> usize {
        self.full + self.partial + self.synthetic
    }

    /// Records backed by a live quote.
    pub fn live(&self) -> usize {
        self.full + self.partial
    }

    pub fn has_synthetic(&self) -> bool {
        self.synthetic > 0
    }
}
