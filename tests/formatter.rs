#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use timepicker::libs::formatter::{resolve_pattern, BindingType, DisplayFormatter, Resolution, TimeFormatOptions};
    use timepicker::libs::locale::{BuiltinLocaleData, Locale, Style};
    use timepicker::libs::relative::FixedClock;
    use timepicker::libs::time_of_day::TimeOfDay;

    fn time(hour: u32, minute: u32, second: u32) -> TimeOfDay {
        TimeOfDay::from_hms(hour, minute, second).unwrap()
    }

    fn pattern(pattern: &str) -> Resolution {
        Resolution::Pattern { pattern: pattern.to_string(), relative: false }
    }

    #[test]
    fn test_binding_pattern_wins() {
        let binding = BindingType::Time(TimeFormatOptions { pattern: Some("HH 'h' mm".to_string()), relative: false });
        let resolution = resolve_pattern(Some(&binding), "long", &Locale::new("de-DE"), &BuiltinLocaleData);
        assert_eq!(resolution, pattern("HH 'h' mm"));
    }

    #[test]
    fn test_locale_pattern_for_style() {
        let resolution = resolve_pattern(None, "short", &Locale::new("en-US"), &BuiltinLocaleData);
        assert_eq!(resolution, pattern("h:mm a"));
    }

    #[test]
    fn test_bindings_without_pattern_defer_to_locale() {
        let locale = Locale::new("de-DE");
        let text = resolve_pattern(Some(&BindingType::Text), "medium", &locale, &BuiltinLocaleData);
        assert_eq!(text, pattern("HH:mm:ss"));

        let untyped = BindingType::Time(TimeFormatOptions::default());
        let time_type = resolve_pattern(Some(&untyped), "medium", &locale, &BuiltinLocaleData);
        assert_eq!(time_type, pattern("HH:mm:ss"));
    }

    #[test]
    fn test_unknown_locale_passes_style_through() {
        let resolution = resolve_pattern(None, "short", &Locale::new("xx-YY"), &BuiltinLocaleData);
        assert_eq!(resolution, Resolution::Style(Style::Short));
    }

    #[test]
    fn test_unknown_style_counts_as_medium() {
        let resolution = resolve_pattern(None, "huge", &Locale::new("xx-YY"), &BuiltinLocaleData);
        assert_eq!(resolution, Resolution::Style(Style::Medium));
    }

    #[test]
    fn test_style_resolution_uses_builtin_pattern() {
        let mut formatter = DisplayFormatter::new();
        formatter.apply(Resolution::Style(Style::Short));
        assert_eq!(formatter.format(time(17, 45, 2)), "17:45");
        assert_eq!(formatter.parse("09:30").unwrap(), time(9, 30, 0));
    }

    #[test]
    fn test_apply_rebuilds_only_on_change() {
        let mut formatter = DisplayFormatter::new();
        assert_eq!(formatter.revision(), 0);

        assert!(formatter.apply(pattern("HH:mm")));
        assert!(!formatter.apply(pattern("HH:mm")));
        assert_eq!(formatter.revision(), 1);

        assert!(formatter.apply(pattern("HH:mm:ss")));
        assert_eq!(formatter.revision(), 2);
    }

    #[test]
    fn test_broken_pattern_falls_back_to_medium() {
        let mut formatter = DisplayFormatter::new();
        formatter.apply(pattern("HH:mm z"));
        assert_eq!(formatter.pattern().map(|p| p.as_str()), Some("HH:mm:ss"));
        assert_eq!(formatter.format(time(17, 45, 2)), "17:45:02");
    }

    #[test]
    fn test_relative_format_and_parse() {
        let clock = Arc::new(FixedClock(time(17, 0, 0)));
        let mut formatter = DisplayFormatter::with_clock(clock);
        formatter.apply(Resolution::Pattern { pattern: "HH:mm".to_string(), relative: true });

        assert_eq!(formatter.format(time(17, 45, 2)), "in 45 minutes");
        assert_eq!(formatter.format(time(15, 0, 0)), "2 hours ago");
        assert_eq!(formatter.parse("in 2 hours").unwrap(), time(19, 0, 0));
        // absolute input still goes through the bound pattern
        assert_eq!(formatter.parse("08:15").unwrap(), time(8, 15, 0));
    }

    #[test]
    fn test_unapplied_formatter() {
        let formatter = DisplayFormatter::new();
        assert_eq!(formatter.resolution(), None);
        assert_eq!(formatter.format(time(17, 45, 2)), "17:45:02");
        assert!(formatter.parse("17:45:02").is_err());
    }
}
