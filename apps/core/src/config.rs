//! Widget configuration read from the environment.
//!
//! Variables (an optional `.env` file is loaded first):
//! - `STROKEASSIST_BACKEND_URL`: chatbot server base URL; unset means answer locally
//! - `STROKEASSIST_TYPING_DELAY_MS`: how long the typing indicator shows (default 1000)
//! - `STROKEASSIST_REQUEST_TIMEOUT_SECS`: HTTP timeout (default 30)

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use validator::Validate;

use crate::error::AppError;

pub const BACKEND_URL_VAR: &str = "STROKEASSIST_BACKEND_URL";
pub const TYPING_DELAY_VAR: &str = "STROKEASSIST_TYPING_DELAY_MS";
pub const REQUEST_TIMEOUT_VAR: &str = "STROKEASSIST_REQUEST_TIMEOUT_SECS";

const DEFAULT_TYPING_DELAY_MS: u64 = 1000;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Settings for the chat session and its backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct WidgetConfig {
    /// Base URL of a remote chatbot server. `None` selects the local backend.
    #[validate(url)]
    pub backend_url: Option<String>,
    /// Artificial "bot is typing" delay before each answer.
    #[validate(range(max = 10000))]
    pub typing_delay_ms: u64,
    #[validate(range(min = 1, max = 300))]
    pub request_timeout_secs: u64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            backend_url: None,
            typing_delay_ms: DEFAULT_TYPING_DELAY_MS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl WidgetConfig {
    /// Loads `.env` if present, then reads and validates the variables above.
    pub fn from_env() -> Result<Self, AppError> {
        dotenv::dotenv().ok();
        Self::from_process_env()
    }

    /// Same as `from_env` without touching `.env`.
    pub fn from_process_env() -> Result<Self, AppError> {
        let backend_url = env::var(BACKEND_URL_VAR)
            .ok()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        let config = Self {
            backend_url,
            typing_delay_ms: parse_var(TYPING_DELAY_VAR, DEFAULT_TYPING_DELAY_MS)?,
            request_timeout_secs: parse_var(REQUEST_TIMEOUT_VAR, DEFAULT_REQUEST_TIMEOUT_SECS)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, AppError>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{} = {:?}: {}", name, raw, e))),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_VARS: [&str; 3] = [BACKEND_URL_VAR, TYPING_DELAY_VAR, REQUEST_TIMEOUT_VAR];

    #[test]
    fn test_defaults_when_unset() {
        temp_env::with_vars_unset(ALL_VARS, || {
            let config = WidgetConfig::from_process_env().unwrap();
            assert_eq!(config, WidgetConfig::default());
            assert_eq!(config.typing_delay(), Duration::from_secs(1));
        });
    }

    #[test]
    fn test_reads_overrides() {
        temp_env::with_vars(
            [
                (BACKEND_URL_VAR, Some("http://localhost:8080")),
                (TYPING_DELAY_VAR, Some("250")),
                (REQUEST_TIMEOUT_VAR, Some("5")),
            ],
            || {
                let config = WidgetConfig::from_process_env().unwrap();
                assert_eq!(config.backend_url.as_deref(), Some("http://localhost:8080"));
                assert_eq!(config.typing_delay_ms, 250);
                assert_eq!(config.request_timeout(), Duration::from_secs(5));
            },
        );
    }

    #[test]
    fn test_blank_url_means_local() {
        temp_env::with_vars(
            [
                (BACKEND_URL_VAR, Some("  ")),
                (TYPING_DELAY_VAR, None),
                (REQUEST_TIMEOUT_VAR, None),
            ],
            || {
                let config = WidgetConfig::from_process_env().unwrap();
                assert!(config.backend_url.is_none());
            },
        );
    }

    #[test]
    fn test_rejects_non_numeric_delay() {
        temp_env::with_vars(
            [
                (BACKEND_URL_VAR, None),
                (TYPING_DELAY_VAR, Some("soon")),
                (REQUEST_TIMEOUT_VAR, None),
            ],
            || {
                let result = WidgetConfig::from_process_env();
                assert!(matches!(result, Err(AppError::Config(_))));
            },
        );
    }

    #[test]
    fn test_rejects_out_of_range_timeout() {
        temp_env::with_vars(
            [
                (BACKEND_URL_VAR, None),
                (TYPING_DELAY_VAR, None),
                (REQUEST_TIMEOUT_VAR, Some("0")),
            ],
            || {
                assert!(WidgetConfig::from_process_env().is_err());
            },
        );
    }

    #[test]
    fn test_from_env_reads_process_vars() {
        // A `.env` file never overrides variables that are already set
        temp_env::with_vars(
            [
                (BACKEND_URL_VAR, Some("http://localhost:9000/api")),
                (TYPING_DELAY_VAR, Some("0")),
                (REQUEST_TIMEOUT_VAR, Some("12")),
            ],
            || {
                let config = WidgetConfig::from_env().unwrap();
                assert_eq!(config.backend_url.as_deref(), Some("http://localhost:9000/api"));
                assert!(config.typing_delay().is_zero());
                assert_eq!(config.request_timeout(), Duration::from_secs(12));
            },
        );
    }

    #[test]
    fn test_rejects_invalid_url() {
        let config = WidgetConfig {
            backend_url: Some("not a url".to_string()),
            ..WidgetConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
