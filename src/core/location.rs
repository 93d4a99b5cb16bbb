//! Location → language resolution
//!
//! A static table keyed by country code. Each country is either
//! language-uniform or carries a per-region table with an optional
//! `_default`. Resolution is pure and total: every (country, region) pair
//! yields exactly one language.

use std::collections::{BTreeMap, HashSet};

use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::config::REGION_DEFAULT_KEY;
use crate::shared::types::Language;

/// One country's entry in the location table.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationEntry {
    /// Same language everywhere in the country.
    Uniform(Language),
    /// Region-level languages, with the country default for unlisted regions.
    RegionMapped {
        regions: BTreeMap<String, Language>,
        default: Option<Language>,
    },
}

impl LocationEntry {
    /// Every language this entry can resolve to, in table order.
    fn languages(&self) -> Vec<&Language> {
        match self {
            LocationEntry::Uniform(lang) => vec![lang],
            LocationEntry::RegionMapped { regions, default } => {
                regions.values().chain(default.iter()).collect()
            }
        }
    }
}

// Wire shape: either `{code, name}` or `{ "<region>": {code, name}, ..., "_default": {code, name} }`.
impl Serialize for LocationEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            LocationEntry::Uniform(lang) => lang.serialize(serializer),
            LocationEntry::RegionMapped { regions, default } => {
                let len = regions.len() + usize::from(default.is_some());
                let mut map = serializer.serialize_map(Some(len))?;
                for (region, lang) in regions {
                    map.serialize_entry(region, lang)?;
                }
                if let Some(lang) = default {
                    map.serialize_entry(REGION_DEFAULT_KEY, lang)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for LocationEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Uniform(Language),
            Regions(BTreeMap<String, Language>),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Uniform(lang) => Ok(LocationEntry::Uniform(lang)),
            Raw::Regions(mut regions) => {
                let default = regions.remove(REGION_DEFAULT_KEY);
                Ok(LocationEntry::RegionMapped { regions, default })
            }
        }
    }
}

/// Country code → language table plus the global fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationLanguageMap {
    entries: BTreeMap<String, LocationEntry>,
    fallback: Language,
}

impl LocationLanguageMap {
    pub fn new(entries: BTreeMap<String, LocationEntry>, fallback: Language) -> Self {
        Self { entries, fallback }
    }

    pub fn fallback(&self) -> &Language {
        &self.fallback
    }

    pub fn entry(&self, country_code: &str) -> Option<&LocationEntry> {
        self.entries.get(&normalize_country(country_code))
    }

    /// Resolve a location to a language.
    ///
    /// Unknown country → fallback. Uniform country → its language, region
    /// ignored. Region table → exact region, then `_default`, then fallback.
    pub fn resolve(&self, country_code: &str, region: &str) -> &Language {
        match self.entry(country_code) {
            None => &self.fallback,
            Some(LocationEntry::Uniform(lang)) => lang,
            Some(LocationEntry::RegionMapped { regions, default }) => regions
                .get(region)
                .or(default.as_ref())
                .unwrap_or(&self.fallback),
        }
    }

    /// All languages in the table, one per code, sorted by display name
    /// (case-insensitive).
    pub fn list_all_languages(&self) -> Vec<Language> {
        let mut seen = HashSet::new();
        let mut languages: Vec<Language> = self
            .entries
            .values()
            .flat_map(LocationEntry::languages)
            .filter(|lang| seen.insert(lang.code.clone()))
            .cloned()
            .collect();

        languages.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.code.cmp(&b.code))
        });
        languages
    }

    /// Trimmed, case-insensitive match on the display name.
    pub fn find_by_name(&self, name: &str) -> Option<Language> {
        let wanted = name.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }
        self.list_all_languages()
            .into_iter()
            .find(|lang| lang.name.trim().to_lowercase() == wanted)
    }

    pub fn find_by_code(&self, code: &str) -> Option<Language> {
        self.list_all_languages()
            .into_iter()
            .find(|lang| lang.code == code)
    }

    /// Codes whose primary subtag is neither an ISO 639-1 nor an ISO 639-3 code.
    pub fn unrecognised_codes(&self) -> Vec<String> {
        self.list_all_languages()
            .into_iter()
            .map(|lang| lang.code)
            .filter(|code| !is_known_language_code(code))
            .collect()
    }
}

fn normalize_country(country_code: &str) -> String {
    country_code.trim().to_ascii_uppercase()
}

fn is_known_language_code(code: &str) -> bool {
    let primary = code.split('-').next().unwrap_or_default().to_ascii_lowercase();
    isolang::Language::from_639_1(&primary).is_some()
        || isolang::Language::from_639_3(&primary).is_some()
}
