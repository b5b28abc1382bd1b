//! Dashboard configuration: parsing, normalization, and loading.
//!
//! Settings come from an optional TOML file layered under a few environment
//! overrides. Every key has a default, so an absent file yields a working
//! configuration pointed at the public Finnhub API.
//!
//! ```toml
//! [finnhub]
//! base_url = "https://finnhub.io/api/v1"
//! request_timeout_secs = 10
//! requests_per_minute = 60   # 0 disables client-side limiting
//!
//! [batch]
//! pacing_ms = 300
//! deadline_secs = 30
//! symbols = ["AAPL", "MSFT"]
//!
//! [server]
//! bind = "127.0.0.1:3000"
//! ```
//!
//! The API token is deliberately not part of this file; it is read from
//! `FINNHUB_API_KEY` by
//! [`FinnhubClient::from_env`](crate::providers::finnhub::FinnhubClient::from_env).

use std::{
    collections::HashSet,
    net::SocketAddr,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};
use shared_utils::env::{EnvVarError, get_optional_env_var, parse_env_var};
use snafu::{Backtrace, ResultExt, Snafu};
use tracing::debug;

use crate::{batch::pacing::Pacing, providers::finnhub::DEFAULT_BASE_URL, reference};

/// Overrides `finnhub.base_url`.
pub const BASE_URL_ENV_VAR: &str = "FINNHUB_BASE_URL";
/// Overrides `server.bind`.
pub const BIND_ENV_VAR: &str = "DASHBOARD_BIND";
/// Overrides `batch.pacing_ms`.
pub const PACING_ENV_VAR: &str = "DASHBOARD_PACING_MS";

/// Errors raised while loading configuration.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ConfigError {
    #[snafu(display("Failed to read config file {}: {source}", path.display()))]
    Read {
        path: PathBuf,
        source: std::io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Failed to parse config: {source}"))]
    Parse {
        source: toml::de::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Invalid environment override: {source}"))]
    Env {
        source: EnvVarError,
        backtrace: Backtrace,
    },

    #[snafu(display("Invalid configuration: {message}"))]
    Invalid {
        message: String,
        backtrace: Backtrace,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    pub finnhub: FinnhubConfig,
    pub batch: BatchConfig,
    pub server: ServerConfig,
}

/// Upstream API settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct FinnhubConfig {
    pub base_url: String,
    /// Per-request timeout covering connect, send and body read.
    pub request_timeout_secs: u64,
    /// Client-side quota shared by the quote and profile endpoints; `0` disables it.
    pub requests_per_minute: u32,
}

impl Default for FinnhubConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 10,
            requests_per_minute: 60,
        }
    }
}

impl FinnhubConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Batch orchestration settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatchConfig {
    /// Delay inserted between consecutive symbols.
    pub pacing_ms: u64,
    /// Deadline the HTTP endpoint gives one whole batch.
    pub deadline_secs: u64,
    /// Symbols served by the dashboard endpoint, in display order.
    pub symbols: Vec<String>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            pacing_ms: 300,
            deadline_secs: 30,
            symbols: reference::default_symbols(),
        }
    }
}

impl BatchConfig {
    pub fn pacing(&self) -> Pacing {
        Pacing::new(Duration::from_millis(self.pacing_ms))
    }

    pub fn deadline(&self) -> Duration {
        Duration::from_secs(self.deadline_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

/// Parses and normalizes a TOML string. Environment overrides are not applied.
pub fn load_config_str(s: &str) -> Result<DashboardConfig, ConfigError> {
    let mut cfg: DashboardConfig = toml::from_str(s).context(ParseSnafu)?;
    normalize_config(&mut cfg)?;
    Ok(cfg)
}

/// Reads, parses and normalizes a TOML file. Environment overrides are not applied.
pub fn load_config_path(path: impl AsRef<Path>) -> Result<DashboardConfig, ConfigError> {
    let path = path.as_ref();
    let s = std::fs::read_to_string(path).context(ReadSnafu { path })?;
    load_config_str(&s)
}

/// Loads the effective configuration: file (or defaults), then environment overrides.
pub fn load_config(path: Option<&Path>) -> Result<DashboardConfig, ConfigError> {
    let mut cfg = match path {
        Some(path) => load_config_path(path)?,
        None => DashboardConfig::default(),
    };
    apply_env_overrides(&mut cfg)?;
    normalize_config(&mut cfg)?;
    Ok(cfg)
}

/// Applies `FINNHUB_BASE_URL`, `DASHBOARD_BIND` and `DASHBOARD_PACING_MS`.
pub fn apply_env_overrides(cfg: &mut DashboardConfig) -> Result<(), ConfigError> {
    if let Some(base_url) = get_optional_env_var(BASE_URL_ENV_VAR) {
        debug!(%base_url, "base URL overridden from environment");
        cfg.finnhub.base_url = base_url;
    }
    if let Some(bind) = parse_env_var::<SocketAddr>(BIND_ENV_VAR).context(EnvSnafu)? {
        cfg.server.bind = bind;
    }
    if let Some(pacing_ms) = parse_env_var::<u64>(PACING_ENV_VAR).context(EnvSnafu)? {
        cfg.batch.pacing_ms = pacing_ms;
    }
    Ok(())
}

/// Normalizes a configuration in place.
///
/// - Trims the base URL and strips trailing slashes
/// - Trims and uppercases symbols, dropping duplicates while preserving the
///   first occurrence order
///
/// Errors:
/// - Empty base URL, zero timeouts, empty symbol list or blank symbols
pub fn normalize_config(cfg: &mut DashboardConfig) -> Result<(), ConfigError> {
    let base_url = cfg.finnhub.base_url.trim().trim_end_matches('/').to_string();
    if base_url.is_empty() {
        return InvalidSnafu {
            message: "finnhub.base_url cannot be empty",
        }
        .fail();
    }
    cfg.finnhub.base_url = base_url;

    if cfg.finnhub.request_timeout_secs == 0 {
        return InvalidSnafu {
            message: "finnhub.request_timeout_secs must be positive",
        }
        .fail();
    }
    if cfg.batch.deadline_secs == 0 {
        return InvalidSnafu {
            message: "batch.deadline_secs must be positive",
        }
        .fail();
    }

    let mut seen = HashSet::new();
    let mut symbols = Vec::with_capacity(cfg.batch.symbols.len());
    for raw in std::mem::take(&mut cfg.batch.symbols) {
        let symbol = raw.trim().to_uppercase();
        if symbol.is_empty() {
            return InvalidSnafu {
                message: "batch.symbols cannot contain blank entries",
            }
            .fail();
        }
        if seen.insert(symbol.clone()) {
            symbols.push(symbol);
        }
    }
    if symbols.is_empty() {
        return InvalidSnafu {
            message: "batch.symbols cannot be empty",
        }
        .fail();
    }
    cfg.batch.symbols = symbols;

    Ok(())
}
