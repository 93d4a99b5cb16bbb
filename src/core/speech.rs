//! Speech collaborator helpers
//!
//! Recognition and synthesis run in the host. These helpers decide what to
//! hand them: the recognition language, the synthesis voice and whether the
//! current output is worth speaking at all.

use crate::shared::types::{Language, SourceLanguage, SpeechRequest, VoiceInfo};

/// Placeholder outputs (e.g. "Translation will appear here...") contain this.
const PLACEHOLDER_MARKER: &str = "...";

/// Recognition language tag. Empty lets the recognizer pick.
pub fn recognition_language(source: &SourceLanguage) -> &str {
    source.language().map_or("", |lang| lang.code.as_str())
}

/// First voice whose tag starts with `tag`, e.g. `ml` matches `ml-IN`.
pub fn select_voice<'a>(voices: &'a [VoiceInfo], tag: &str) -> Option<&'a VoiceInfo> {
    if tag.is_empty() {
        return None;
    }
    voices.iter().find(|voice| voice.lang.starts_with(tag))
}

pub fn is_speakable(output: &str) -> bool {
    !output.trim().is_empty() && !output.contains(PLACEHOLDER_MARKER)
}

/// Utterance for the current output, or `None` when nothing should be spoken.
pub fn speech_request(output: &str, target: &Language, voices: &[VoiceInfo]) -> Option<SpeechRequest> {
    if !is_speakable(output) {
        return None;
    }
    Some(SpeechRequest {
        text: output.to_string(),
        lang: target.code.clone(),
        voice: select_voice(voices, &target.code).cloned(),
    })
}
