#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use timepicker::commands::PickerArgs;
    use timepicker::libs::codec::SourcePattern;
    use timepicker::libs::config::{Config, CONFIG_FILE_NAME, DEFAULT_STEP};
    use timepicker::libs::data_storage::DataStorage;
    use timepicker::libs::locale::Style;

    #[derive(Debug, Parser)]
    struct OverrideArgs {
        #[command(flatten)]
        picker: PickerArgs,
    }

    // tests in this binary share the process environment
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Points the home/appdata directory at a fresh temporary directory.
    struct ConfigTestContext {
        temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl ConfigTestContext {
        fn write(&self, name: &str, contents: &str) -> PathBuf {
            let path = self.temp_dir.path().join(name);
            fs::write(&path, contents).unwrap();
            path
        }
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { temp_dir, _guard: guard }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.locale, "en-US");
        assert_eq!(config.style, "medium");
        assert_eq!(config.step, DEFAULT_STEP);
        assert_eq!(config.source_pattern, SourcePattern::HourMinuteSecond);
        assert!(config.predefined_values.is_none());
        assert!(config.locale_patterns.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_data_storage_location(ctx: &mut ConfigTestContext) {
        let storage = DataStorage::new();
        assert!(storage.base_path().starts_with(ctx.temp_dir.path()));
        assert!(storage.base_path().ends_with(Path::new("lacodda").join("timepicker")));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            locale: "de-DE".to_string(),
            style: "short".to_string(),
            step: 30,
            source_pattern: SourcePattern::HourMinute,
            predefined_values: Some(ctx.temp_dir.path().join("values.json")),
            locale_patterns: None,
        };
        config.save().unwrap();

        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        let saved = fs::read_to_string(path).unwrap();
        assert!(saved.contains("\"source_pattern\": \"HHmm\""));
        assert!(!saved.contains("locale_patterns"));

        assert_eq!(Config::read().unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_config_uses_defaults(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        fs::write(path, r#"{"locale": "fr-FR"}"#).unwrap();

        let config = Config::read().unwrap();
        assert_eq!(config.locale, "fr-FR");
        assert_eq!(config.style, "medium");
        assert_eq!(config.step, DEFAULT_STEP);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_corrupt_config_is_an_error(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        fs::write(path, "{ not json").unwrap();
        assert!(Config::read().is_err());
    }

    #[test]
    fn test_picker_from_config() {
        let config = Config { locale: "de-DE".to_string(), step: 30, ..Config::default() };
        let mut picker = config.picker();

        assert_eq!(picker.step().minutes(), 30);
        assert_eq!(picker.set_canonical("174502").unwrap().display_value, "17:45:02");
        assert_eq!(picker.items().len(), 48);
    }

    #[test]
    fn test_picker_coerces_bad_settings() {
        let config = Config { style: "huge".to_string(), step: 7, ..Config::default() };
        let mut picker = config.picker();

        assert_eq!(picker.style(), Style::Medium);
        assert_eq!(picker.step().minutes(), DEFAULT_STEP);
        assert_eq!(picker.items().len(), 96);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_picker_with_predefined_values(ctx: &mut ConfigTestContext) {
        let values = ctx.write(
            "values.json",
            r#"{"timeValues": [{"key": "x", "text": "0830"}, {"key": "y", "text": "9999"}, {"key": "z", "text": "1200"}]}"#,
        );
        let config = Config {
            locale: "de-DE".to_string(),
            source_pattern: SourcePattern::HourMinute,
            predefined_values: Some(values),
            ..Config::default()
        };
        let mut picker = config.picker();

        let items = picker.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].value, "083000");
        assert_eq!(items[1].text, "12:00:00");
        assert_eq!(picker.select(0).unwrap().canonical_value, "0830");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_picker_ignores_missing_values_file(ctx: &mut ConfigTestContext) {
        let config = Config {
            predefined_values: Some(ctx.temp_dir.path().join("missing.json")),
            ..Config::default()
        };
        let mut picker = config.picker();

        assert!(picker.predefined_values().is_none());
        assert_eq!(picker.items().len(), 96);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_locale_patterns_file(ctx: &mut ConfigTestContext) {
        let patterns = ctx.write(
            "locales.json",
            r#"{"nl-NL": {"short": "HH.mm", "medium": "HH.mm.ss", "long": "HH.mm.ss 'uur'"}}"#,
        );
        let config = Config { locale: "nl-NL".to_string(), locale_patterns: Some(patterns), ..Config::default() };
        let mut picker = config.picker();

        assert_eq!(picker.display_for("174502").unwrap(), "17.45.02");
        picker.set_locale("de-DE".to_string().into());
        assert_eq!(picker.display_for("174502").unwrap(), "17:45:02");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_broken_locale_patterns_file(ctx: &mut ConfigTestContext) {
        let patterns = ctx.write("locales.json", "[]");
        let config = Config { locale: "de-DE".to_string(), locale_patterns: Some(patterns), ..Config::default() };
        let mut picker = config.picker();

        assert_eq!(picker.display_for("174502").unwrap(), "17:45:02");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unknown_style_override_falls_back_to_medium(_ctx: &mut ConfigTestContext) {
        let args = OverrideArgs::try_parse_from(["timepicker", "--style", "huge", "--locale", "de-DE"]).unwrap();
        assert_eq!(args.picker.config().style, "huge");

        let mut picker = args.picker.picker();
        assert_eq!(picker.style(), Style::Medium);
        assert_eq!(picker.display_for("174502").unwrap(), "17:45:02");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_overrides_replace_stored_settings(_ctx: &mut ConfigTestContext) {
        Config { locale: "en-US".to_string(), step: 60, ..Config::default() }.save().unwrap();

        let args = OverrideArgs::try_parse_from(["timepicker", "--style", "short", "--step", "30"]).unwrap();
        let config = args.picker.config();
        assert_eq!(config.locale, "en-US");
        assert_eq!(config.step, 30);

        let mut picker = args.picker.picker();
        assert_eq!(picker.style(), Style::Short);
        assert_eq!(picker.items().len(), 48);
    }
}
