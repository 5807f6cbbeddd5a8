//! Error types for API calls and user actions.

use thiserror::Error;

/// Common result type for backend calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Failures talking to the marketplace backend
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Response carried no data")]
    MissingData,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Failures of a user-triggered action (reserve, confirm pickup, call donor)
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("You need to log in first")]
    NotLoggedIn,

    #[error("{0}")]
    Forbidden(String),

    #[error("The donor has no phone number on record")]
    MissingPhone,

    #[error(transparent)]
    Api(#[from] ApiError),
}
