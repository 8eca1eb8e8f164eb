#[cfg(test)]
mod tests {
    use timepicker::libs::error::ConfigRejected;
    use timepicker::libs::locale::{BuiltinLocaleData, Locale, LocaleData, MapLocaleData, Style, StylePatterns};

    #[test]
    fn test_locale_normalizes_separator() {
        let locale = Locale::new("de_DE");
        assert_eq!(locale.tag(), "de-DE");
        assert_eq!(locale.language(), "de");
        assert_eq!(Locale::default().tag(), "en-US");
    }

    #[test]
    fn test_style_parsing() {
        assert_eq!("short".parse::<Style>().unwrap(), Style::Short);
        assert_eq!("long".parse::<Style>().unwrap(), Style::Long);
        assert_eq!("huge".parse::<Style>().unwrap_err(), ConfigRejected::Style("huge".to_string()));
    }

    #[test]
    fn test_style_coerce_falls_back_to_medium() {
        assert_eq!(Style::coerce("huge"), Style::Medium);
        assert_eq!(Style::coerce(""), Style::Medium);
        assert_eq!(Style::coerce("short"), Style::Short);
    }

    #[test]
    fn test_builtin_patterns_by_full_tag() {
        let data = BuiltinLocaleData;
        assert_eq!(data.time_pattern(&Locale::new("en-GB"), Style::Short).as_deref(), Some("HH:mm"));
        assert_eq!(data.time_pattern(&Locale::new("en-US"), Style::Medium).as_deref(), Some("h:mm:ss a"));
    }

    #[test]
    fn test_builtin_patterns_fall_back_to_language() {
        let data = BuiltinLocaleData;
        assert_eq!(data.time_pattern(&Locale::new("de-AT"), Style::Medium).as_deref(), Some("HH:mm:ss"));
        assert_eq!(data.time_pattern(&Locale::new("fr-CA"), Style::Short).as_deref(), Some("HH:mm"));
    }

    #[test]
    fn test_builtin_patterns_unknown_locale() {
        assert_eq!(BuiltinLocaleData.time_pattern(&Locale::new("xx-YY"), Style::Medium), None);
    }

    #[test]
    fn test_map_locale_data_from_json() {
        let json = r#"{
            "NL-nl": { "short": "HH.mm", "medium": "HH.mm.ss", "long": "HH.mm.ss 'uur'" }
        }"#;
        let data = MapLocaleData::from_json(json).unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data.time_pattern(&Locale::new("nl-NL"), Style::Long).as_deref(), Some("HH.mm.ss 'uur'"));
        assert_eq!(data.time_pattern(&Locale::new("nl-BE"), Style::Long), None);
    }

    #[test]
    fn test_map_locale_data_extend_overrides_builtin() {
        let mut data = MapLocaleData::builtin();
        assert!(!data.is_empty());

        let mut extra = MapLocaleData::new();
        extra.insert(
            "de",
            StylePatterns { short: "H.mm".to_string(), medium: "H.mm.ss".to_string(), long: "H.mm.ss".to_string() },
        );
        data.extend(extra);

        assert_eq!(data.time_pattern(&Locale::new("de-DE"), Style::Short).as_deref(), Some("H.mm"));
        assert_eq!(data.time_pattern(&Locale::new("ja-JP"), Style::Short).as_deref(), Some("H:mm"));
    }

    #[test]
    fn test_map_locale_data_rejects_malformed_json() {
        assert!(MapLocaleData::from_json(r#"{"de": {"short": "HH:mm"}}"#).is_err());
    }
}
