use serde::{Deserialize, Serialize};

use crate::shared::types::{DetectionOutcome, Language, LocatedLanguage, SourceLanguage};

/// Everything the widget remembers for one session.
///
/// A plain value: transitions are methods on the value, and the host's
/// `TranslatorSession` owns the single live instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub target_language: Language,
    pub source_language: SourceLanguage,
    pub input_text: String,
    /// Last successful translation, `None` while nothing is shown.
    pub output_text: Option<String>,
    /// Outcome of the last detection for the current source selection.
    pub detected_language: Option<DetectionOutcome>,
    pub location: Option<LocatedLanguage>,
    /// Bumped on every explicit target pick.
    #[serde(default)]
    pub target_revision: u64,
}

impl SessionState {
    pub fn new(target_language: Language, source_language: SourceLanguage) -> Self {
        Self {
            target_language,
            source_language,
            input_text: String::new(),
            output_text: None,
            detected_language: None,
            location: None,
            target_revision: 0,
        }
    }

    pub fn set_input(&mut self, text: &str) {
        self.input_text = text.to_string();
    }

    /// Trimmed input, `None` when blank.
    pub fn pending_text(&self) -> Option<&str> {
        Some(self.input_text.trim()).filter(|t| !t.is_empty())
    }

    pub fn select_target(&mut self, language: Language) {
        self.target_language = language;
        self.target_revision += 1;
    }

    /// A new source invalidates whatever was detected for the old one.
    pub fn select_source(&mut self, source: SourceLanguage) {
        self.source_language = source;
        self.detected_language = None;
    }

    /// Records the lookup and adopts its language as the target when the
    /// location was found and no target was picked since `revision`.
    /// Returns whether the target changed.
    pub fn apply_location(&mut self, located: LocatedLanguage, revision: u64) -> bool {
        let adopt = located.location.is_some() && self.target_revision == revision;
        if adopt {
            self.target_language = located.language.clone();
        }
        self.location = Some(located);
        adopt
    }

    pub fn apply_output(&mut self, text: String) {
        self.output_text = Some(text);
    }

    pub fn clear_output(&mut self) {
        self.output_text = None;
    }

    pub fn apply_detection(&mut self, outcome: DetectionOutcome) {
        self.detected_language = Some(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::types::GeolocationResult;

    fn state() -> SessionState {
        SessionState::new(Language::new("en", "English"), SourceLanguage::Auto)
    }

    #[test]
    fn test_pending_text_ignores_blank() {
        let mut state = state();
        assert_eq!(state.pending_text(), None);

        state.set_input("  \n");
        assert_eq!(state.pending_text(), None);

        state.set_input("  Hello ");
        assert_eq!(state.pending_text(), Some("Hello"));
    }

    #[test]
    fn test_select_source_clears_detection() {
        let mut state = state();
        state.apply_detection(DetectionOutcome::Unsupported);
        state.select_source(SourceLanguage::Fixed(Language::new("fr", "French")));
        assert_eq!(state.detected_language, None);
        assert_eq!(state.source_language.code(), "fr");
    }

    fn located(found: bool) -> LocatedLanguage {
        LocatedLanguage {
            location: found.then(|| GeolocationResult {
                country_code: "IN".into(),
                region: "Tamil Nadu".into(),
                city: "Chennai".into(),
                country_name: "India".into(),
            }),
            language: Language::new("ta", "Tamil"),
        }
    }

    #[test]
    fn test_apply_location_sets_target() {
        let mut state = state();
        assert!(state.apply_location(located(true), 0));
        assert_eq!(state.target_language.code, "ta");
        assert!(state.location.is_some());
    }

    #[test]
    fn test_failed_location_keeps_target() {
        let mut state = state();
        assert!(!state.apply_location(located(false), 0));
        assert_eq!(state.target_language.code, "en");
        assert!(state.location.is_some());
    }

    #[test]
    fn test_location_does_not_override_user_pick() {
        let mut state = state();
        let revision = state.target_revision;
        state.select_target(Language::new("fr", "French"));

        assert!(!state.apply_location(located(true), revision));
        assert_eq!(state.target_language.code, "fr");
    }
}
