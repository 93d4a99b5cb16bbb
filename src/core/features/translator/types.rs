use serde::{Deserialize, Serialize};

use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{Language, SourceLanguage};

pub type TranslatorResult<T> = AppResult<T>;

/// One translation call. Built fresh per call; `text` is already trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationRequest {
    pub text: String,
    pub source: SourceLanguage,
    pub target: Language,
}

impl TranslationRequest {
    /// Fails with `EmptyInput` when the text is blank.
    pub fn new(text: &str, source: SourceLanguage, target: Language) -> TranslatorResult<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::EmptyInput);
        }
        Ok(Self {
            text: text.to_string(),
            source,
            target,
        })
    }
}

// -- Completion API wire types --

#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig {
    pub temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    pub max_output_tokens: u32,
}

impl CompletionRequest {
    pub fn from_prompt(prompt: &str, temperature: f32, max_output_tokens: u32) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: GenerationConfig {
                temperature,
                max_output_tokens,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct CompletionResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl CompletionResponse {
    /// Text of the first part of the first candidate, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}

/// Body of a non-2xx response.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<ApiErrorDetail>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    pub fn message(&self) -> Option<&str> {
        self.error
            .as_ref()?
            .message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
    }
}
