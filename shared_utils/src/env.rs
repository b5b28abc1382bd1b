use std::str::FromStr;

use thiserror::Error;

/// Errors raised while reading process environment variables.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvVarError {
    /// The variable is unset or only contains whitespace.
    #[error("Missing environment variable: {0}")]
    Missing(String),

    /// The variable is set but its value could not be parsed.
    #[error("Invalid value for environment variable {name}: {value:?} ({message})")]
    Invalid {
        name: String,
        value: String,
        message: String,
    },
}

/// Reads an environment variable, returning a structured error if it's missing.
///
/// Blank values are treated the same as an unset variable, so an exported
/// `FINNHUB_API_KEY=` in a `.env` file does not count as a credential.
///
/// # Arguments
/// * `name` - The name of the environment variable to read.
pub fn get_env_var(name: &str) -> Result<String, EnvVarError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(EnvVarError::Missing(name.to_string())),
    }
}

/// Like [`get_env_var`], for settings that are allowed to be absent.
pub fn get_optional_env_var(name: &str) -> Option<String> {
    get_env_var(name).ok()
}

/// Reads and parses an optional environment variable.
///
/// Returns `Ok(None)` when the variable is unset, and an [`EnvVarError::Invalid`]
/// when it is set to something `T` cannot parse.
pub fn parse_env_var<T>(name: &str) -> Result<Option<T>, EnvVarError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = get_optional_env_var(name) else {
        return Ok(None);
    };

    raw.parse::<T>().map(Some).map_err(|e| EnvVarError::Invalid {
        name: name.to_string(),
        value: raw,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    const VAR: &str = "SHARED_UTILS_ENV_TEST_VAR";

    fn set(value: &str) {
        // SAFETY: tests touching the environment are serialized.
        unsafe { std::env::set_var(VAR, value) }
    }

    fn clear() {
        // SAFETY: tests touching the environment are serialized.
        unsafe { std::env::remove_var(VAR) }
    }

    #[test]
    #[serial]
    fn missing_and_blank_values_are_errors() {
        clear();
        assert_eq!(get_env_var(VAR), Err(EnvVarError::Missing(VAR.to_string())));

        set("   ");
        assert_eq!(get_env_var(VAR), Err(EnvVarError::Missing(VAR.to_string())));
        assert_eq!(get_optional_env_var(VAR), None);
        clear();
    }

    #[test]
    #[serial]
    fn values_are_trimmed() {
        set("  abc123 ");
        assert_eq!(get_env_var(VAR).unwrap(), "abc123");
        clear();
    }

    #[test]
    #[serial]
    fn parse_reports_invalid_values() {
        clear();
        assert_eq!(parse_env_var::<u64>(VAR), Ok(None));

        set("250");
        assert_eq!(parse_env_var::<u64>(VAR), Ok(Some(250)));

        set("soon");
        let err = parse_env_var::<u64>(VAR).unwrap_err();
        assert!(matches!(err, EnvVarError::Invalid { ref value, .. } if value == "soon"));
        clear();
    }
}
