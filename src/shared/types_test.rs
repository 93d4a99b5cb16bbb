//! Test to trigger ts-rs bindings export
//! Run with: cargo test export_bindings

#[cfg(test)]
mod tests {
    use crate::shared::errors::InlineStatus;
    use crate::shared::events::AppEvent;
    use crate::shared::types::*;
    use ts_rs::TS;

    #[test]
    fn export_bindings() {
        // Writes the host-facing TypeScript bindings under ./bindings
        Language::export().expect("Failed to export Language");
        SourceLanguage::export().expect("Failed to export SourceLanguage");
        DetectionOutcome::export().expect("Failed to export DetectionOutcome");
        LocatedLanguage::export().expect("Failed to export LocatedLanguage");
        InlineStatus::export().expect("Failed to export InlineStatus");
        AppEvent::export().expect("Failed to export AppEvent");
    }

    #[test]
    fn test_language_equality_is_by_code() {
        assert_eq!(Language::new("ml", "Malayalam"), Language::new("ml", "malayalam"));
        assert_ne!(Language::new("hi", "Hindi"), Language::new("mr", "Hindi"));
    }

    #[test]
    fn test_source_language_auto() {
        let source = SourceLanguage::default();
        assert!(source.is_auto());
        assert_eq!(source.code(), AUTO_DETECT_CODE);
        assert_eq!(source.display_name(), AUTO_DETECT_LABEL);
        assert_eq!(source.language(), None);
    }

    #[test]
    fn test_geolocation_label() {
        let mut location = GeolocationResult {
            country_code: "IN".into(),
            region: "Kerala".into(),
            city: "Kochi".into(),
            country_name: "India".into(),
        };
        assert_eq!(location.label(), "Kochi, Kerala, India");

        location.region.clear();
        assert_eq!(location.label(), "Kochi, India");
    }

    #[test]
    fn test_geolocation_missing_fields_default() {
        let location: GeolocationResult =
            serde_json::from_str(r#"{ "country_code": "US" }"#).unwrap();
        assert_eq!(location.country_code, "US");
        assert!(location.region.is_empty());

        let with_null: GeolocationResult =
            serde_json::from_str(r#"{ "country_code": "IN", "region": null }"#).unwrap();
        assert_eq!(with_null.region, "");
    }
}
