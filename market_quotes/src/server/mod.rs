//! HTTP surface of the dashboard.
//!
//! `GET /api/stocks` runs one batch over the configured symbols and answers
//! with a [`StocksPayload`]; `GET /health` is a liveness probe.

pub mod payload;

use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tokio::{net::TcpListener, task::AbortHandle, time::Instant};
use tracing::{error, info, warn};

use crate::batch::BatchFetcher;

pub use payload::{ErrorPayload, StocksPayload};

/// Shared state of the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    fetcher: BatchFetcher,
    symbols: Arc<Vec<String>>,
    deadline: Duration,
}

impl AppState {
    pub fn new(fetcher: BatchFetcher, symbols: Vec<String>, deadline: Duration) -> Self {
        Self {
            fetcher,
            symbols: Arc::new(symbols),
            deadline,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/stocks", get(stocks))
        .route("/health", get(health))
        .with_state(state)
}

/// Binds `addr` and serves the router until the process is stopped.
pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "Dashboard server listening");
    axum::serve(listener, router(state)).await
}

/// Aborts the batch task once the handler future goes away, whether it
/// returned or was dropped by a disconnecting client.
struct AbortOnDrop(AbortHandle);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

async fn health() -> &'static str {
    "ok"
}

/// Runs one batch under the state's deadline.
///
/// The batch runs on its own task so that a panic inside it becomes a `500`
/// instead of tearing down the connection. The task never outlives the
/// request: on deadline expiry, or when the client disconnects, it is aborted.
/// Expiry serves a fully synthetic payload.
pub async fn stocks(State(state): State<AppState>) -> Response {
    let started = Instant::now();
    info!("Starting stock data fetch process");

    let fetcher = state.fetcher.clone();
    let symbols = state.symbols.clone();
    let mut task = tokio::spawn(async move { fetcher.fetch_batch(&symbols).await });
    let _abort = AbortOnDrop(task.abort_handle());

    let payload = match tokio::time::timeout(state.deadline, &mut task).await {
        Ok(Ok(records)) => StocksPayload::from_records(records),
        Ok(Err(e)) => {
            error!(error = %e, "Unhandled error in stocks API");
            let body = ErrorPayload {
                error: "Failed to fetch stock data".to_string(),
                message: "The stock batch terminated unexpectedly".to_string(),
            };
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
        }
        Err(_) => {
            warn!(
                deadline_ms = state.deadline.as_millis() as u64,
                "Stock batch exceeded its deadline, serving synthetic data"
            );
            StocksPayload::degraded(&state.symbols)
        }
    };

    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Stock data process completed"
    );
    Json(payload).into_response()
}
