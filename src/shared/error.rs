use thiserror::Error;
use serde::Serialize;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum AppError {
    /// Missing or placeholder credential, or unusable settings.
    #[error("Configuration Error: {0}")]
    Configuration(String),

    /// Nothing to translate after trimming.
    #[error("Empty input")]
    EmptyInput,

    /// Transport failure or non-2xx from the completion API.
    #[error("API Error: {0}")]
    Api(String),

    /// The completion API answered without any extractable text.
    #[error("Received an empty response from the API")]
    EmptyResponse,

    #[error("Geolocation Error: {0}")]
    Geolocation(String),

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Validation Error: {0}")]
    Validation(String),
}

// Implement conversion from standard errors
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Api(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("Serialization error: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
