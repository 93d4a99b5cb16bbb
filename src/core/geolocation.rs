//! IP geolocation lookup
//!
//! Finds the user's country and region and turns them into a target
//! language. Any failure falls back to the table's global fallback; the rest
//! of the app never waits on or fails because of this lookup.

use std::sync::OnceLock;
use std::time::Duration;

use reqwest::Client;

use crate::core::location::LocationLanguageMap;
use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{GeolocationResult, LocatedLanguage};

// Lazy static HTTP client to reuse connection pool
static CLIENT: OnceLock<Client> = OnceLock::new();

fn get_client() -> &'static Client {
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent("locale-translator/geolocation")
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

pub struct GeolocationClient {
    endpoint: String,
}

impl GeolocationClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub async fn lookup(&self) -> AppResult<GeolocationResult> {
        let response = get_client().get(&self.endpoint).send().await.map_err(|e| {
            AppError::Geolocation(format!("Location lookup failed: {}", e))
        })?;

        if !response.status().is_success() {
            return Err(AppError::Geolocation(format!(
                "Location service returned error: {}",
                response.status()
            )));
        }

        response
            .json::<GeolocationResult>()
            .await
            .map_err(|e| AppError::Geolocation(format!("Invalid location response: {}", e)))
    }

    /// Look up the location and resolve its language. Never fails.
    pub async fn locate_language(&self, languages: &LocationLanguageMap) -> LocatedLanguage {
        match self.lookup().await {
            Ok(location) => {
                let language = languages
                    .resolve(&location.country_code, &location.region)
                    .clone();
                tracing::info!(
                    "[Geolocation] Location detected: {} -> {}",
                    location.label(),
                    language.code
                );
                LocatedLanguage {
                    location: Some(location),
                    language,
                }
            }
            Err(e) => {
                tracing::warn!("[Geolocation] {}; defaulting to {}", e, languages.fallback().code);
                LocatedLanguage {
                    location: None,
                    language: languages.fallback().clone(),
                }
            }
        }
    }
}
