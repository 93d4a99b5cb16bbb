//! Translator feature
//!
//! Translation and language detection on top of a completion backend.
//! Each call is independent: Idle → Pending → Resolved. Ordering between
//! overlapping calls is the session's concern, not this module's.

pub mod prompt;
pub mod service;
pub mod types;

use std::sync::Arc;

use crate::core::location::LocationLanguageMap;
use crate::shared::error::AppError;
use crate::shared::types::{DetectionOutcome, Language, SourceLanguage};

use service::CompletionBackend;
use types::{TranslationRequest, TranslatorResult};

#[derive(Clone)]
pub struct TranslationOrchestrator {
    backend: Arc<dyn CompletionBackend>,
    languages: LocationLanguageMap,
}

impl TranslationOrchestrator {
    pub fn new(backend: Arc<dyn CompletionBackend>, languages: LocationLanguageMap) -> Self {
        Self { backend, languages }
    }

    pub fn languages(&self) -> &LocationLanguageMap {
        &self.languages
    }

    /// Translate `text` into `target`.
    ///
    /// Blank text fails with `EmptyInput` without touching the backend. An
    /// answer with no text (or only whitespace) is `EmptyResponse`.
    pub async fn translate(
        &self,
        text: &str,
        source: &SourceLanguage,
        target: &Language,
    ) -> TranslatorResult<String> {
        let request = TranslationRequest::new(text, source.clone(), target.clone())?;
        tracing::info!(
            "[Translator] Translating {} chars: {} -> {}",
            request.text.chars().count(),
            request.source.code(),
            request.target.code
        );

        let prompt = prompt::translation_prompt(&request.text, &request.source, &request.target);
        let answer = self.backend.complete(&prompt).await?;

        match answer.as_deref().map(str::trim) {
            Some(translated) if !translated.is_empty() => Ok(translated.to_string()),
            _ => {
                tracing::warn!("[Translator] Empty translation for target {}", request.target.code);
                Err(AppError::EmptyResponse)
            }
        }
    }

    /// Ask the backend which language `text` is in and match the answer
    /// against the known languages by name.
    pub async fn detect_language(&self, text: &str) -> TranslatorResult<DetectionOutcome> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::EmptyInput);
        }

        let answer = self
            .backend
            .complete(&prompt::detection_prompt(text))
            .await?
            .filter(|name| !name.trim().is_empty())
            .ok_or(AppError::EmptyResponse)?;

        match self.languages.find_by_name(&answer) {
            Some(lang) => {
                tracing::info!("[Translator] Detected language: {}", lang.code);
                Ok(DetectionOutcome::Detected(lang))
            }
            None => {
                tracing::info!("[Translator] Detected unsupported language '{}'", answer.trim());
                Ok(DetectionOutcome::Unsupported)
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::{default_location_languages, fallback_language};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Backend that replays canned answers and records prompts.
    #[derive(Default)]
    pub(crate) struct ScriptedBackend {
        answers: Mutex<VecDeque<TranslatorResult<Option<String>>>>,
        pub(crate) prompts: Mutex<Vec<String>>,
    }

    impl ScriptedBackend {
        pub(crate) fn with(answers: Vec<TranslatorResult<Option<String>>>) -> Arc<Self> {
            Arc::new(Self {
                answers: Mutex::new(answers.into()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        pub(crate) fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl CompletionBackend for ScriptedBackend {
        async fn complete(&self, prompt: &str) -> TranslatorResult<Option<String>> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.answers
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Ok(None))
        }
    }

    fn orchestrator(backend: Arc<ScriptedBackend>) -> TranslationOrchestrator {
        TranslationOrchestrator::new(
            backend,
            LocationLanguageMap::new(default_location_languages(), fallback_language()),
        )
    }

    fn english() -> SourceLanguage {
        SourceLanguage::Fixed(Language::new("en", "English"))
    }

    fn spanish() -> Language {
        Language::new("es", "Spanish")
    }

    #[tokio::test]
    async fn test_translate_returns_trimmed_answer() {
        let backend = ScriptedBackend::with(vec![Ok(Some("  Hola\n".into()))]);
        let result = orchestrator(backend.clone())
            .translate("Hello", &english(), &spanish())
            .await
            .unwrap();

        assert_eq!(result, "Hola");
        let prompts = backend.prompts.lock().unwrap();
        assert!(prompts[0].contains("from English to Spanish"));
    }

    #[tokio::test]
    async fn test_translate_empty_input_skips_backend() {
        let backend = ScriptedBackend::with(vec![]);
        let orch = orchestrator(backend.clone());

        for text in ["", "   ", "\n\t"] {
            let err = orch.translate(text, &english(), &spanish()).await.unwrap_err();
            assert_eq!(err, AppError::EmptyInput);
        }
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_translate_empty_answer_is_empty_response() {
        let backend = ScriptedBackend::with(vec![Ok(None), Ok(Some("   ".into()))]);
        let orch = orchestrator(backend);

        assert_eq!(
            orch.translate("Hello", &english(), &spanish()).await.unwrap_err(),
            AppError::EmptyResponse
        );
        assert_eq!(
            orch.translate("Hello", &english(), &spanish()).await.unwrap_err(),
            AppError::EmptyResponse
        );
    }

    #[tokio::test]
    async fn test_translate_propagates_api_error() {
        let backend = ScriptedBackend::with(vec![Err(AppError::Api("quota exceeded".into()))]);
        let err = orchestrator(backend)
            .translate("Hello", &english(), &spanish())
            .await
            .unwrap_err();
        assert_eq!(err, AppError::Api("quota exceeded".into()));
    }

    #[tokio::test]
    async fn test_detect_language_matches_table() {
        let backend = ScriptedBackend::with(vec![Ok(Some(" malayalam \n".into()))]);
        let outcome = orchestrator(backend).detect_language("സുഖമാണോ").await.unwrap();
        assert_eq!(outcome, DetectionOutcome::Detected(Language::new("ml", "Malayalam")));
    }

    #[tokio::test]
    async fn test_detect_language_unsupported() {
        let backend = ScriptedBackend::with(vec![Ok(Some("Klingon".into()))]);
        let outcome = orchestrator(backend).detect_language("nuqneH").await.unwrap();
        assert_eq!(outcome, DetectionOutcome::Unsupported);
    }

    #[tokio::test]
    async fn test_detect_language_not_in_table_is_unsupported() {
        let mut entries = default_location_languages();
        entries.remove("IN");
        let backend = ScriptedBackend::with(vec![Ok(Some("Malayalam".into()))]);
        let orch = TranslationOrchestrator::new(
            backend,
            LocationLanguageMap::new(entries, fallback_language()),
        );
        assert_eq!(orch.detect_language("text").await.unwrap(), DetectionOutcome::Unsupported);
    }

    #[tokio::test]
    async fn test_detect_language_failures_propagate() {
        let backend = ScriptedBackend::with(vec![Ok(None), Err(AppError::Api("down".into()))]);
        let orch = orchestrator(backend.clone());

        assert_eq!(orch.detect_language("Hola").await.unwrap_err(), AppError::EmptyResponse);
        assert_eq!(orch.detect_language("Hola").await.unwrap_err(), AppError::Api("down".into()));
        assert_eq!(orch.detect_language("  ").await.unwrap_err(), AppError::EmptyInput);
        assert_eq!(backend.calls(), 2);
    }
}
