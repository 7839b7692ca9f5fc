//! Configuration read from the environment.

use std::env::VarError;
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the debounce delay in milliseconds.
pub const DEBOUNCE_ENV_VAR: &str = "PWD_METER_DEBOUNCE_MS";

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid debounce delay {0:?}: expected a whole number of milliseconds")]
    InvalidDebounce(String),
}

/// Returns the delay to wait before an async evaluation runs.
///
/// Priority:
/// 1. Environment variable `PWD_METER_DEBOUNCE_MS`
/// 2. Default of 300ms
pub fn get_debounce_delay() -> Result<Duration, ConfigError> {
    match std::env::var(DEBOUNCE_ENV_VAR) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| ConfigError::InvalidDebounce(raw)),
        Err(VarError::NotPresent) => Ok(DEFAULT_DEBOUNCE),
        Err(VarError::NotUnicode(raw)) => Err(ConfigError::InvalidDebounce(
            raw.to_string_lossy().into_owned(),
        )),
    }
}
