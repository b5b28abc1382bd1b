pub mod params;
pub mod provider;
pub mod response;

pub use provider::{DEFAULT_BASE_URL, FinnhubClient, TOKEN_ENV_VAR};
