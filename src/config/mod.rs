//! Built-in configuration defaults
//!
//! Centralized defaults for endpoints, sampling and the location → language
//! table. `AppSettings` starts from these and a settings file may override any
//! of them.

use std::collections::BTreeMap;

use crate::core::location::LocationEntry;
use crate::shared::types::Language;

pub const DEFAULT_API_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-preview-09-2025:generateContent";
pub const DEFAULT_GEOLOCATION_ENDPOINT: &str = "https://ipapi.co/json/";
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_MAX_TOKENS: u32 = 2000;
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Value shipped in sample configs; treated the same as a missing key.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_GEMINI_API_KEY_HERE";
/// Environment variable that overrides the configured API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

pub const ERR_NO_API_KEY: &str = "API key not found. Please add your Gemini API key to the settings file";
pub const ERR_API: &str = "Translation service unavailable. Please try again later.";
pub const ERR_EMPTY_TEXT: &str = "Please enter text to translate.";
pub const STATUS_DETECTION_FAILED: &str = "Detection failed";
pub const STATUS_UNSUPPORTED_LANGUAGE: &str = "Language not supported";

/// Key of the per-country default inside a region table.
pub const REGION_DEFAULT_KEY: &str = "_default";

/// Countries with a single language regardless of region.
const UNIFORM_COUNTRIES: &[(&str, &str, &str)] = &[
    ("US", "en", "English"),
    ("GB", "en", "English"),
    ("ES", "es", "Spanish"),
    ("FR", "fr", "French"),
    ("DE", "de", "German"),
    ("IT", "it", "Italian"),
    ("JP", "ja", "Japanese"),
    ("KR", "ko", "Korean"),
    ("CN", "zh", "Chinese"),
    ("RU", "ru", "Russian"),
    ("BR", "pt", "Portuguese"),
];

/// State-level languages for India.
const INDIA_STATES: &[(&str, &str, &str)] = &[
    ("Andhra Pradesh", "te", "Telugu"),
    ("Arunachal Pradesh", "en", "English"),
    ("Assam", "as", "Assamese"),
    ("Bihar", "hi", "Hindi"),
    ("Chhattisgarh", "hi", "Hindi"),
    ("Goa", "kok", "Konkani"),
    ("Gujarat", "gu", "Gujarati"),
    ("Haryana", "hi", "Hindi"),
    ("Himachal Pradesh", "hi", "Hindi"),
    ("Jharkhand", "hi", "Hindi"),
    ("Karnataka", "kn", "Kannada"),
    ("Kerala", "ml", "Malayalam"),
    ("Madhya Pradesh", "hi", "Hindi"),
    ("Maharashtra", "mr", "Marathi"),
    ("Manipur", "mni", "Meitei"),
    ("Meghalaya", "en", "English"),
    ("Mizoram", "lus", "Mizo"),
    ("Nagaland", "en", "English"),
    ("Odisha", "or", "Odia"),
    ("Punjab", "pa", "Punjabi"),
    ("Rajasthan", "hi", "Hindi"),
    ("Sikkim", "ne", "Nepali"),
    ("Tamil Nadu", "ta", "Tamil"),
    ("Telangana", "te", "Telugu"),
    ("Tripura", "bn", "Bengali"),
    ("Uttar Pradesh", "hi", "Hindi"),
    ("Uttarakhand", "hi", "Hindi"),
    ("West Bengal", "bn", "Bengali"),
];

/// Language used when nothing more specific applies.
pub fn fallback_language() -> Language {
    Language::new("en", "English")
}

/// The built-in location → language table.
pub fn default_location_languages() -> BTreeMap<String, LocationEntry> {
    let mut table: BTreeMap<String, LocationEntry> = UNIFORM_COUNTRIES
        .iter()
        .map(|(country, code, name)| {
            (country.to_string(), LocationEntry::Uniform(Language::new(*code, *name)))
        })
        .collect();

    let states = INDIA_STATES
        .iter()
        .map(|(state, code, name)| (state.to_string(), Language::new(*code, *name)))
        .collect();
    table.insert(
        "IN".to_string(),
        LocationEntry::RegionMapped {
            regions: states,
            default: Some(Language::new("hi", "Hindi")),
        },
    );

    table
}
