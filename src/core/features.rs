//! Feature modules backed by the completion API.

pub mod translator;

pub use translator::service::{CompletionBackend, GeminiClient};
pub use translator::TranslationOrchestrator;
