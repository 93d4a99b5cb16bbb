//! Prompt builders for the completion API.

use crate::shared::types::{Language, SourceLanguage};

/// How an auto-detected source is named inside the translation prompt.
const AUTO_SOURCE_PHRASE: &str = "the auto-detected language";

pub fn translation_prompt(text: &str, source: &SourceLanguage, target: &Language) -> String {
    let source_name = match source {
        SourceLanguage::Auto => AUTO_SOURCE_PHRASE,
        SourceLanguage::Fixed(lang) => lang.name.as_str(),
    };
    format!(
        "Translate the following text from {} to {}. Provide ONLY the translated text, without any additional explanations, context, or quotation marks.\n\nText: \"{}\"",
        source_name, target.name, text
    )
}

pub fn detection_prompt(text: &str) -> String {
    format!(
        "Identify the language of the following text. Respond with ONLY the name of the language (e.g., 'Spanish', 'Malayalam'). Text: \"{}\"",
        text
    )
}
