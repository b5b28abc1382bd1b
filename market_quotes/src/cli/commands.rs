use std::{net::SocketAddr, path::PathBuf};

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about = "Market quotes dashboard backend")]
pub struct Cli {
    /// Path to the config file (quote_dashboard.toml); defaults apply when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the dashboard HTTP API
    Serve {
        /// Address to bind, overriding the config file (e.g. "0.0.0.0:3000")
        #[arg(long)]
        bind: Option<SocketAddr>,
    },

    /// Fetch one batch and print it as JSON
    Fetch {
        /// Comma-separated list of symbols (e.g. "AAPL,MSFT"); defaults to the configured list
        #[arg(long)]
        symbols: Option<String>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}
