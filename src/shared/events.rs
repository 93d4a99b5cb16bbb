use serde::{Serialize, Deserialize};
use ts_rs::TS;
use super::errors::InlineStatus;
use super::types::{DetectionOutcome, Language, LocatedLanguage, SourceLanguage};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "event", content = "payload")] // Tagged enum for easier frontend parsing
#[ts(export, export_to = "events.ts")]
pub enum AppEvent {
    #[serde(rename = "translation://pending")]
    TranslationPending,

    #[serde(rename = "translation://output")]
    OutputUpdated(String),

    /// Input became empty; the host shows its placeholder again.
    #[serde(rename = "translation://cleared")]
    OutputCleared,

    #[serde(rename = "translation://status")]
    StatusChanged(InlineStatus),

    #[serde(rename = "detection://result")]
    LanguageDetected(DetectionOutcome),

    #[serde(rename = "detection://failed")]
    DetectionFailed(String),

    /// The detected language is not one the widget offers.
    #[serde(rename = "detection://unsupported")]
    LanguageUnsupported(String),

    #[serde(rename = "location://resolved")]
    LocationResolved(LocatedLanguage),

    #[serde(rename = "language://target")]
    TargetLanguageChanged(Language),

    #[serde(rename = "language://source")]
    SourceLanguageChanged(SourceLanguage),
}

impl AppEvent {
    /// Route name the host listens on.
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::TranslationPending => "translation://pending",
            AppEvent::OutputUpdated(_) => "translation://output",
            AppEvent::OutputCleared => "translation://cleared",
            AppEvent::StatusChanged(_) => "translation://status",
            AppEvent::LanguageDetected(_) => "detection://result",
            AppEvent::DetectionFailed(_) => "detection://failed",
            AppEvent::LanguageUnsupported(_) => "detection://unsupported",
            AppEvent::LocationResolved(_) => "location://resolved",
            AppEvent::TargetLanguageChanged(_) => "language://target",
            AppEvent::SourceLanguageChanged(_) => "language://source",
        }
    }
}
