use async_trait::async_trait;
use reqwest::Client;

use super::types::{ApiErrorBody, CompletionRequest, CompletionResponse, TranslatorResult};
use crate::shared::error::AppError;
use crate::shared::settings::{ApiSettings, ErrorMessages};

/// A text-completion backend.
///
/// `Ok(None)` means the call succeeded but carried no extractable answer.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, prompt: &str) -> TranslatorResult<Option<String>>;
}

/// Gemini `generateContent` client.
pub struct GeminiClient {
    http: Client,
    settings: ApiSettings,
    messages: ErrorMessages,
}

impl GeminiClient {
    pub fn new(settings: ApiSettings, messages: ErrorMessages) -> TranslatorResult<Self> {
        let http = Client::builder()
            .user_agent("locale-translator/translator")
            .timeout(settings.timeout())
            .build()
            .map_err(|e| AppError::Configuration(e.to_string()))?;

        Ok(Self {
            http,
            settings,
            messages,
        })
    }

    fn request_url(&self) -> String {
        let separator = if self.settings.endpoint.contains('?') { '&' } else { '?' };
        format!(
            "{}{}key={}",
            self.settings.endpoint,
            separator,
            urlencoding::encode(self.settings.api_key.trim())
        )
    }

    fn api_error(&self, upstream: Option<&str>) -> AppError {
        AppError::Api(
            upstream
                .map(str::to_string)
                .unwrap_or_else(|| self.messages.api_error.clone()),
        )
    }
}

#[async_trait]
impl CompletionBackend for GeminiClient {
    async fn complete(&self, prompt: &str) -> TranslatorResult<Option<String>> {
        if !self.settings.has_usable_key() {
            return Err(AppError::Configuration(self.messages.no_api_key.clone()));
        }

        let body = CompletionRequest::from_prompt(
            prompt,
            self.settings.temperature,
            self.settings.max_tokens,
        );

        let response = self
            .http
            .post(self.request_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("[Translator] Completion request failed: {}", e);
                self.api_error(None)
            })?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let parsed = serde_json::from_str::<ApiErrorBody>(&raw).unwrap_or_default();
            tracing::error!("[Translator] Completion API returned {}: {}", status, raw);
            return Err(self.api_error(parsed.message()));
        }

        let raw = response.text().await.map_err(|e| {
            tracing::error!("[Translator] Failed to read completion body: {}", e);
            self.api_error(None)
        })?;

        // A body we cannot parse carries no answer; the caller decides what that means.
        let parsed = match serde_json::from_str::<CompletionResponse>(&raw) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("[Translator] Malformed completion body: {}", e);
                return Ok(None);
            }
        };

        Ok(parsed.first_text().map(str::to_string))
    }
}
