use thiserror::Error;

/// Crate-wide error type. The classifier itself never produces one.
#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// The request never got a usable HTTP answer (connection, status, body).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend answered but reported an error in its payload.
    #[error("Backend error: {0}")]
    Backend(String),

    /// Represents data validation errors (e.g., an invalid rule table).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., malformed environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents errors from operations that did not complete in time.
    #[error("Operation timed out: {0}")]
    Timeout(String),
}

/// Only reached while decoding a chatbot response body.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Transport(format!("Malformed chatbot response: {}", err))
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Config(format!("URL parse error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Config(format!("Validation errors: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout(format!("HTTP request timed out: {}", err))
        } else {
            AppError::Transport(format!("HTTP error: {}", err))
        }
    }
}
