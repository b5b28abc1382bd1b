use secrecy::{ExposeSecret, SecretString};

/// Longest upstream error body kept in an error message.
const MAX_ERROR_BODY: usize = 200;

/// Query parameters shared by every Finnhub endpoint.
pub fn construct_params<'a>(
    symbol: &'a str,
    token: &'a SecretString,
) -> [(&'static str, &'a str); 2] {
    [("symbol", symbol), ("token", token.expose_secret())]
}

/// Loggable stand-in for the API token.
pub fn masked_token(token: Option<&SecretString>) -> &'static str {
    match token {
        Some(_) => "***PRESENT***",
        None => "***MISSING***",
    }
}

/// Trims an upstream error body to something that fits on one log line.
pub fn truncate_body(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(MAX_ERROR_BODY) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
