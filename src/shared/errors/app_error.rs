use serde::Serialize;
use thiserror::Error;

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a set number";
pub const SET_NOT_FOUND_MESSAGE: &str =
    "Set not found. Please check the set number and try again.";
pub const EMPTY_SET_MESSAGE: &str =
    "This set has no parts or is not a valid set number. Please try another set.";

/// Error taxonomy shared by every layer.
///
/// The four domain variants (`ValidationError`, `NotFound`, `FetchError`, `EmptySet`)
/// display as their bare message: that string is what the user sees.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{message}")]
    FetchError { status: u16, message: String },

    #[error("{0}")]
    EmptySet(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    pub fn empty_input() -> Self {
        AppError::ValidationError(EMPTY_INPUT_MESSAGE.to_string())
    }

    pub fn set_not_found() -> Self {
        AppError::NotFound(SET_NOT_FOUND_MESSAGE.to_string())
    }

    pub fn empty_set() -> Self {
        AppError::EmptySet(EMPTY_SET_MESSAGE.to_string())
    }

    /// Non-success upstream status while fetching `what` ("parts", "set details").
    pub fn fetch_failed(status: reqwest::StatusCode, what: &str) -> Self {
        let reason = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_u16().to_string());

        AppError::FetchError {
            status: status.as_u16(),
            message: format!("Error fetching {}: {}", what, reason),
        }
    }

    /// Upstream status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::FetchError { status, .. } => Some(*status),
            AppError::NotFound(_) => Some(404),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::ApiError("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::ApiError("Failed to connect to catalog service".to_string())
        } else if let Some(status) = err.status() {
            match status.as_u16() {
                404 => AppError::set_not_found(),
                _ => AppError::FetchError {
                    status: status.as_u16(),
                    message: format!("HTTP {}: {}", status, err),
                },
            }
        } else {
            AppError::ApiError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::StorageError(err.to_string())
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
