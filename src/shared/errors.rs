//! Display-ready error statuses
//!
//! Every failure is recovered at the operation boundary and rendered by the
//! host as inline status text. `InlineStatus` is that rendering contract:
//! serializable for the host, built from an `AppError` plus the configured
//! user-facing strings.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::error::AppError;
use super::settings::ErrorMessages;

/// Inline status shown next to the translation output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "message")]
#[ts(export, export_to = "events.ts")]
pub enum InlineStatus {
    /// Credential missing; the user has to fix the configuration.
    Configuration(String),

    /// Upstream failure or empty answer.
    Api(String),

    /// Explicit translate action with nothing to translate.
    Hint(String),
}

impl InlineStatus {
    /// Map an error to its inline form. Returns `None` for errors that are
    /// never shown (empty input from auto-translation, geolocation fallback).
    pub fn from_error(err: &AppError, messages: &ErrorMessages) -> Option<Self> {
        match err {
            AppError::EmptyInput | AppError::Geolocation(_) => None,
            AppError::Configuration(msg) => Some(InlineStatus::Configuration(msg.clone())),
            AppError::Api(msg) => Some(InlineStatus::Api(msg.clone())),
            AppError::EmptyResponse => Some(InlineStatus::Api(messages.api_error.clone())),
            AppError::Io(_) | AppError::Validation(_) => {
                Some(InlineStatus::Api(messages.api_error.clone()))
            }
        }
    }

    pub fn message(&self) -> &str {
        match self {
            InlineStatus::Configuration(msg) | InlineStatus::Api(msg) | InlineStatus::Hint(msg) => msg,
        }
    }
}
