use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use ts_rs::TS;

/// Code used by the source selector for auto-detection.
pub const AUTO_DETECT_CODE: &str = "auto";
pub const AUTO_DETECT_LABEL: &str = "Auto-Detect";

/// A selectable language: a BCP-47-like tag plus a display name.
///
/// Two languages are equal when their codes match; the display name is
/// presentation only.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "types.ts")]
pub struct Language {
    pub code: String,
    pub name: String,
}

impl Language {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

impl PartialEq for Language {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Language {}

impl Hash for Language {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Source language selection: either a fixed language or auto-detection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "mode", content = "language")]
#[ts(export, export_to = "types.ts")]
pub enum SourceLanguage {
    #[default]
    Auto,
    Fixed(Language),
}

impl SourceLanguage {
    pub fn code(&self) -> &str {
        match self {
            SourceLanguage::Auto => AUTO_DETECT_CODE,
            SourceLanguage::Fixed(lang) => &lang.code,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            SourceLanguage::Auto => AUTO_DETECT_LABEL,
            SourceLanguage::Fixed(lang) => &lang.name,
        }
    }

    pub fn language(&self) -> Option<&Language> {
        match self {
            SourceLanguage::Auto => None,
            SourceLanguage::Fixed(lang) => Some(lang),
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, SourceLanguage::Auto)
    }
}

impl From<Language> for SourceLanguage {
    fn from(lang: Language) -> Self {
        SourceLanguage::Fixed(lang)
    }
}

/// Result of an IP geolocation lookup. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "types.ts")]
pub struct GeolocationResult {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub country_code: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub region: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub country_name: String,
}

// Lookup services send `null` for fields they could not determine.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl GeolocationResult {
    /// Human readable "city, region, country" label. The region is omitted
    /// when the lookup did not return one.
    pub fn label(&self) -> String {
        if self.region.trim().is_empty() {
            format!("{}, {}", self.city, self.country_name)
        } else {
            format!("{}, {}, {}", self.city, self.region, self.country_name)
        }
    }
}

/// Outcome of a language detection call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "language")]
#[ts(export, export_to = "types.ts")]
pub enum DetectionOutcome {
    Detected(Language),
    Unsupported,
}

/// A synthesis voice offered by the host platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "types.ts")]
pub struct VoiceInfo {
    pub name: String,
    pub lang: String,
}

/// Everything the host needs to speak a translated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "types.ts")]
pub struct SpeechRequest {
    pub text: String,
    pub lang: String,
    pub voice: Option<VoiceInfo>,
}

/// Language picked for the user's location. `location` is `None` when the
/// lookup failed and the fallback was used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "types.ts")]
pub struct LocatedLanguage {
    pub location: Option<GeolocationResult>,
    pub language: Language,
}
