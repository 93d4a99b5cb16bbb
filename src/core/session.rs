//! Translator session
//!
//! Host-owned controller that ties the pieces together:
//! - `state`: the session's `SessionState` value
//! - `sequencer`: stale-result suppression for overlapping requests
//! - `debounce`: the quiet-period timer in front of auto-translation
//!
//! Every outcome is published as an `AppEvent`; the host renders them.

pub mod debounce;
pub mod sequencer;
pub mod state;

pub use debounce::Debouncer;
pub use sequencer::{RequestSequencer, RequestTicket};
pub use state::SessionState;

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::core::features::translator::service::{CompletionBackend, GeminiClient};
use crate::core::features::translator::TranslationOrchestrator;
use crate::core::speech;
use crate::shared::emit::EventEmitter;
use crate::shared::error::{AppError, AppResult};
use crate::shared::errors::InlineStatus;
use crate::shared::events::AppEvent;
use crate::shared::settings::{AppSettings, ErrorMessages};
use crate::shared::types::{
    DetectionOutcome, Language, LocatedLanguage, SourceLanguage, SpeechRequest, VoiceInfo,
    AUTO_DETECT_CODE,
};

/// What happened to a request once it finished.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome<T> {
    /// The outcome was current and has been published.
    Applied(AppResult<T>),
    /// A newer request already resolved; nothing was published.
    Discarded,
}

struct SessionInner {
    state: Mutex<SessionState>,
    orchestrator: TranslationOrchestrator,
    translations: RequestSequencer,
    detections: RequestSequencer,
    debouncer: Debouncer,
    emitter: EventEmitter,
    messages: ErrorMessages,
}

/// Snapshot taken when a location lookup starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationLookup {
    target_revision: u64,
}

/// Cheap to clone; all clones drive the same session.
#[derive(Clone)]
pub struct TranslatorSession {
    inner: Arc<SessionInner>,
}

impl TranslatorSession {
    pub fn new(
        orchestrator: TranslationOrchestrator,
        initial: SessionState,
        debounce: Duration,
        messages: ErrorMessages,
        emitter: EventEmitter,
    ) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                state: Mutex::new(initial),
                orchestrator,
                translations: RequestSequencer::new(),
                detections: RequestSequencer::new(),
                debouncer: Debouncer::new(debounce),
                emitter,
                messages,
            }),
        }
    }

    /// Session over an arbitrary backend, configured from settings.
    pub fn with_backend(
        settings: &AppSettings,
        backend: Arc<dyn CompletionBackend>,
        emitter: EventEmitter,
    ) -> Self {
        let languages = settings.location_map();
        let source = match settings.preferences.default_source_lang.as_str() {
            AUTO_DETECT_CODE => SourceLanguage::Auto,
            code => languages
                .find_by_code(code)
                .map(SourceLanguage::Fixed)
                .unwrap_or_default(),
        };
        let initial = SessionState::new(languages.fallback().clone(), source);
        let orchestrator = TranslationOrchestrator::new(backend, languages);

        Self::new(
            orchestrator,
            initial,
            settings.debounce(),
            settings.messages.clone(),
            emitter,
        )
    }

    /// Session talking to the configured Gemini endpoint.
    pub fn from_settings(settings: &AppSettings, emitter: EventEmitter) -> AppResult<Self> {
        let client = GeminiClient::new(settings.api.clone(), settings.messages.clone())?;
        Ok(Self::with_backend(settings, Arc::new(client), emitter))
    }

    pub fn state(&self) -> SessionState {
        self.lock_state().clone()
    }

    pub fn orchestrator(&self) -> &TranslationOrchestrator {
        &self.inner.orchestrator
    }

    // -- User actions --

    /// Free-text input changed. Translation runs after the quiet period.
    pub fn on_input_changed(&self, text: &str) {
        self.lock_state().set_input(text);
        self.schedule_auto_translation();
    }

    pub fn on_target_selected(&self, language: Language) {
        self.lock_state().select_target(language.clone());
        tracing::info!("[Session] Target language set to {}", language.code);
        self.inner.emitter.emit(AppEvent::TargetLanguageChanged(language));
        self.schedule_auto_translation();
    }

    pub fn on_source_selected(&self, source: SourceLanguage) {
        self.lock_state().select_source(source.clone());
        tracing::info!("[Session] Source language set to {}", source.display_name());
        self.inner.emitter.emit(AppEvent::SourceLanguageChanged(source));
        self.schedule_auto_translation();
    }

    /// Marks the start of a location lookup. Hand the returned value back
    /// to `on_location_resolved` once the lookup finishes.
    pub fn begin_location_lookup(&self) -> LocationLookup {
        LocationLookup {
            target_revision: self.lock_state().target_revision,
        }
    }

    /// The lookup's language becomes the target only when the location was
    /// actually found and the user has not picked a target since `lookup`.
    pub fn on_location_resolved(&self, lookup: LocationLookup, located: LocatedLanguage) {
        let adopted = self
            .lock_state()
            .apply_location(located.clone(), lookup.target_revision);
        let language = located.language.clone();
        self.inner.emitter.emit(AppEvent::LocationResolved(located));
        if adopted {
            tracing::info!("[Session] Target language set from location: {}", language.code);
            self.inner.emitter.emit(AppEvent::TargetLanguageChanged(language));
        } else {
            tracing::info!("[Session] Keeping target language; location result not applied");
        }
    }

    /// Explicit translate action: no debounce, and blank input is reported
    /// to the user instead of silently ignored.
    pub async fn translate_now(&self) -> RequestOutcome<String> {
        self.inner.debouncer.cancel();
        let blank = self.lock_state().pending_text().is_none();
        if blank {
            self.clear_translation();
            self.inner.emitter.emit(AppEvent::StatusChanged(InlineStatus::Hint(
                self.inner.messages.empty_text.clone(),
            )));
            return RequestOutcome::Applied(Err(AppError::EmptyInput));
        }
        self.run_translation().await
    }

    /// Final transcript from speech recognition. With an auto-detect source
    /// the language is detected first; translation runs either way.
    pub async fn on_speech_transcript(&self, transcript: &str) -> RequestOutcome<String> {
        self.inner.debouncer.cancel();
        let auto = {
            let mut state = self.lock_state();
            state.set_input(transcript);
            state.source_language.is_auto()
        };
        if transcript.trim().is_empty() {
            return RequestOutcome::Applied(Err(AppError::EmptyInput));
        }

        if auto {
            self.run_detection().await;
        }
        self.run_translation().await
    }

    pub fn recognition_language(&self) -> String {
        speech::recognition_language(&self.lock_state().source_language).to_string()
    }

    /// Utterance for the current output, if there is anything to speak.
    pub fn speech_request(&self, voices: &[VoiceInfo]) -> Option<SpeechRequest> {
        let state = self.lock_state();
        let output = state.output_text.as_deref()?;
        speech::speech_request(output, &state.target_language, voices)
    }

    // -- Request flows --

    fn schedule_auto_translation(&self) {
        let session = self.clone();
        self.inner.debouncer.schedule(async move {
            session.auto_translate().await;
        });
    }

    async fn auto_translate(&self) {
        let blank = self.lock_state().pending_text().is_none();
        if blank {
            self.clear_translation();
            self.inner.emitter.emit(AppEvent::OutputCleared);
            return;
        }
        let _ = self.run_translation().await;
    }

    /// Clearing counts as the newest translation result, so anything still
    /// in flight is discarded when it lands.
    fn clear_translation(&self) {
        let ticket = self.inner.translations.begin();
        self.inner.translations.commit(ticket);
        self.lock_state().clear_output();
    }

    async fn run_translation(&self) -> RequestOutcome<String> {
        let (text, source, target) = {
            let state = self.lock_state();
            (
                state.input_text.clone(),
                state.source_language.clone(),
                state.target_language.clone(),
            )
        };

        let ticket = self.inner.translations.begin();
        self.inner.emitter.emit(AppEvent::TranslationPending);

        let result = self.inner.orchestrator.translate(&text, &source, &target).await;

        if !self.inner.translations.commit(ticket) {
            tracing::debug!("[Session] Discarding stale translation #{}", ticket.number());
            return RequestOutcome::Discarded;
        }

        match &result {
            Ok(translated) => {
                self.lock_state().apply_output(translated.clone());
                self.inner.emitter.emit(AppEvent::OutputUpdated(translated.clone()));
            }
            Err(e) => {
                self.lock_state().clear_output();
                if let Some(status) = InlineStatus::from_error(e, &self.inner.messages) {
                    tracing::warn!("[Session] Translation #{} failed: {}", ticket.number(), e);
                    self.inner.emitter.emit(AppEvent::StatusChanged(status));
                }
            }
        }
        RequestOutcome::Applied(result)
    }

    async fn run_detection(&self) -> RequestOutcome<DetectionOutcome> {
        let text = self.lock_state().input_text.clone();
        let ticket = self.inner.detections.begin();

        let result = self.inner.orchestrator.detect_language(&text).await;

        if !self.inner.detections.commit(ticket) {
            tracing::debug!("[Session] Discarding stale detection #{}", ticket.number());
            return RequestOutcome::Discarded;
        }

        match &result {
            Ok(outcome) => {
                self.lock_state().apply_detection(outcome.clone());
                self.inner.emitter.emit(AppEvent::LanguageDetected(outcome.clone()));
                if *outcome == DetectionOutcome::Unsupported {
                    self.inner.emitter.emit(AppEvent::LanguageUnsupported(
                        self.inner.messages.unsupported_language.clone(),
                    ));
                }
            }
            Err(AppError::EmptyInput) => {}
            Err(e) => {
                tracing::warn!("[Session] Language detection failed: {}", e);
                self.inner
                    .emitter
                    .emit(AppEvent::DetectionFailed(self.inner.messages.detection_failed.clone()));
            }
        }
        RequestOutcome::Applied(result)
    }

    fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        match self.inner.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::error!("[Session] State mutex poisoned, recovering...");
                poisoned.into_inner()
            }
        }
    }
}
