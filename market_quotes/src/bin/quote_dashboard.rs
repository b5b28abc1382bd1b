use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use market_quotes::{
    batch::BatchFetcher,
    cli::{
        commands::{Cli, Commands},
        params::parse_symbols,
    },
    config::load_config,
    providers::finnhub::FinnhubClient,
    server::{self, AppState, StocksPayload},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref()).context("loading configuration")?;

    let client =
        Arc::new(FinnhubClient::from_env(&config.finnhub).context("building Finnhub client")?);
    let fetcher = BatchFetcher::from_client(client, config.batch.pacing());

    match cli.command {
        Commands::Serve { bind } => {
            let addr = bind.unwrap_or(config.server.bind);
            let state =
                AppState::new(fetcher, config.batch.symbols.clone(), config.batch.deadline());
            server::serve(addr, state).await.context("running HTTP server")?;
        }

        Commands::Fetch { symbols, pretty } => {
            let symbols = match symbols {
                Some(raw) => parse_symbols(&raw),
                None => config.batch.symbols.clone(),
            };

            let payload = StocksPayload::from_records(fetcher.fetch_batch(&symbols).await);
            let json = if pretty {
                serde_json::to_string_pretty(&payload)?
            } else {
                serde_json::to_string(&payload)?
            };
            println!("{json}");
        }
    }

    Ok(())
}
