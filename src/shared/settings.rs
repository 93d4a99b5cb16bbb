use serde::{Deserialize, Serialize};
use tokio::fs;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use directories::ProjectDirs;

use crate::config;
use crate::core::location::{LocationEntry, LocationLanguageMap};
use crate::shared::error::{AppError, AppResult};
use crate::shared::types::Language;

const MASKED_SECRET: &str = "********";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub api: ApiSettings,
    pub geolocation: GeolocationSettings,
    pub location_languages: BTreeMap<String, LocationEntry>,
    pub messages: ErrorMessages,
    pub preferences: UserPreferences,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    pub endpoint: String,
    pub api_key: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeolocationSettings {
    pub endpoint: String,
    pub fallback_language: Language,
}

/// Fixed user-facing strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorMessages {
    pub no_api_key: String,
    pub api_error: String,
    pub empty_text: String,
    pub detection_failed: String,
    pub unsupported_language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    pub debounce_ms: u64,
    /// Source code to start with; `auto` for auto-detection.
    pub default_source_lang: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api: ApiSettings::default(),
            geolocation: GeolocationSettings::default(),
            location_languages: config::default_location_languages(),
            messages: ErrorMessages::default(),
            preferences: UserPreferences::default(),
        }
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            endpoint: config::DEFAULT_API_ENDPOINT.to_string(),
            api_key: String::new(),
            temperature: config::DEFAULT_TEMPERATURE,
            max_tokens: config::DEFAULT_MAX_TOKENS,
            timeout_secs: config::DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Default for GeolocationSettings {
    fn default() -> Self {
        Self {
            endpoint: config::DEFAULT_GEOLOCATION_ENDPOINT.to_string(),
            fallback_language: config::fallback_language(),
        }
    }
}

impl Default for ErrorMessages {
    fn default() -> Self {
        Self {
            no_api_key: config::ERR_NO_API_KEY.to_string(),
            api_error: config::ERR_API.to_string(),
            empty_text: config::ERR_EMPTY_TEXT.to_string(),
            detection_failed: config::STATUS_DETECTION_FAILED.to_string(),
            unsupported_language: config::STATUS_UNSUPPORTED_LANGUAGE.to_string(),
        }
    }
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            debounce_ms: config::DEFAULT_DEBOUNCE_MS,
            default_source_lang: crate::shared::types::AUTO_DETECT_CODE.to_string(),
        }
    }
}

impl ApiSettings {
    /// True when the key is absent or still the sample placeholder.
    pub fn has_usable_key(&self) -> bool {
        let key = self.api_key.trim();
        !key.is_empty() && key != config::PLACEHOLDER_API_KEY
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl AppSettings {
    pub fn get_settings_path() -> AppResult<PathBuf> {
        ProjectDirs::from("com", "antigravity", "locale-translator")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or_else(|| AppError::Configuration("Failed to determine config directory".to_string()))
    }

    /// Load from the platform config directory, writing defaults on first run.
    pub async fn load() -> AppResult<Self> {
        let path = Self::get_settings_path()?;
        Self::load_from(&path).await
    }

    /// Load from an explicit path. A missing file is created with defaults.
    /// The `GEMINI_API_KEY` environment variable overrides the file key.
    pub async fn load_from(path: &Path) -> AppResult<Self> {
        let mut settings = if !path.exists() {
            tracing::info!("[Settings] No settings at {}, writing defaults", path.display());
            let settings = Self::default();
            settings.save_to(path).await?;
            settings
        } else {
            let content = fs::read_to_string(path).await
                .map_err(|e| AppError::Io(format!("Failed to read settings file: {}", e)))?;
            serde_json::from_str::<Self>(&content)
                .map_err(|e| AppError::Validation(format!("Failed to parse settings: {}", e)))?
        };

        if let Ok(env_key) = std::env::var(config::API_KEY_ENV) {
            if !env_key.trim().is_empty() {
                tracing::debug!("[Settings] Using API key from {}", config::API_KEY_ENV);
                settings.api.api_key = env_key;
            }
        }

        for code in settings.location_map().unrecognised_codes() {
            tracing::warn!("[Settings] Language code '{}' is not an ISO 639 code", code);
        }

        Ok(settings)
    }

    pub async fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await
                .map_err(|e| AppError::Io(format!("Failed to create config directory: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;

        fs::write(path, content).await
            .map_err(|e| AppError::Io(format!("Failed to write settings file: {}", e)))
    }

    /// Copy with the API key hidden, for display.
    pub fn masked(&self) -> Self {
        let mut copy = self.clone();
        if !copy.api.api_key.is_empty() {
            copy.api.api_key = MASKED_SECRET.to_string();
        }
        copy
    }

    pub fn location_map(&self) -> LocationLanguageMap {
        LocationLanguageMap::new(
            self.location_languages.clone(),
            self.geolocation.fallback_language.clone(),
        )
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.preferences.debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_key_is_not_usable() {
        let mut api = ApiSettings::default();
        assert!(!api.has_usable_key());

        api.api_key = config::PLACEHOLDER_API_KEY.to_string();
        assert!(!api.has_usable_key());

        api.api_key = "  ".to_string();
        assert!(!api.has_usable_key());

        api.api_key = "real-key".to_string();
        assert!(api.has_usable_key());
    }

    #[test]
    fn test_masked_hides_key() {
        let mut settings = AppSettings::default();
        settings.api.api_key = "secret".to_string();
        assert_eq!(settings.masked().api.api_key, MASKED_SECRET);
        assert_eq!(settings.api.api_key, "secret");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let json = r#"{ "api": { "temperature": 0.7 } }"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.api.temperature, 0.7);
        assert_eq!(settings.api.max_tokens, config::DEFAULT_MAX_TOKENS);
        assert_eq!(settings.preferences.debounce_ms, 500);
        assert!(settings.location_languages.contains_key("IN"));
    }

    #[tokio::test]
    async fn test_load_from_creates_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = AppSettings::load_from(&path).await.unwrap();
        assert!(path.exists());
        assert_eq!(settings.geolocation.fallback_language.code, "en");
    }

    #[tokio::test]
    async fn test_load_from_round_trips_custom_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = AppSettings::default();
        settings.location_languages.clear();
        settings.location_languages.insert(
            "MX".to_string(),
            LocationEntry::Uniform(Language::new("es", "Spanish")),
        );
        settings.save_to(&path).await.unwrap();

        let loaded = AppSettings::load_from(&path).await.unwrap();
        assert_eq!(loaded.location_map().resolve("MX", "Jalisco").code, "es");
        assert_eq!(loaded.location_map().resolve("IN", "Kerala").code, "en");
    }

    #[tokio::test]
    async fn test_load_from_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = AppSettings::load_from(&path).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
