//! Core translator logic
//!
//! - `location`: country/region → language table and resolution
//! - `geolocation`: IP lookup feeding the table
//! - `features`: the translator itself
//! - `session`: host-facing controller with debounce and ordering
//! - `speech`: helpers for the host's speech engines

pub mod features;
pub mod geolocation;
pub mod location;
pub mod session;
pub mod speech;

pub use geolocation::GeolocationClient;
pub use location::{LocationEntry, LocationLanguageMap};
pub use session::{RequestOutcome, TranslatorSession};
