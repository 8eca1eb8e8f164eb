//! Configuration management for the timepicker application.
//!
//! The configuration records the settings a picker is built with: locale,
//! style, list step, canonical source pattern, and optional files for a
//! predefined time list and extra locale patterns. It is stored as pretty JSON
//! in the platform data directory:
//!
//! - **Windows**: `%LOCALAPPDATA%\lacodda\timepicker\config.json`
//! - **macOS**: `~/Library/Application Support/lacodda/timepicker/config.json`
//! - **Linux**: `~/.local/share/lacodda/timepicker/config.json`
//!
//! Stored values are not trusted blindly. [`Config::picker`] coerces an unknown
//! style to `medium`, keeps the default step when the stored one is rejected,
//! and ignores list or pattern files that fail to load, logging each case.
//!
//! ```rust,no_run
//! use timepicker::libs::config::Config;
//!
//! let config = Config::read()?;
//! let mut picker = config.picker();
//! picker.set_canonical("081500");
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::codec::{CanonicalCodec, SourcePattern};
use super::data_storage::DataStorage;
use super::locale::{BuiltinLocaleData, Locale, LocaleData, MapLocaleData, Style};
use super::picker::TimePicker;
use super::step_list::{TimeValues, STEP_VALUES};
use crate::libs::messages::Message;
use crate::{msg_print, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Arc;

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Step used when none is configured or the stored one is rejected.
pub const DEFAULT_STEP: u32 = 15;

/// Persistent picker settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// BCP 47 locale tag used to look up display patterns.
    pub locale: String,

    /// `short`, `medium` or `long`. Kept as text so a hand-edited file with an
    /// unknown style still loads and falls back to `medium`.
    pub style: String,

    /// Minutes between list entries, one of the supported step values.
    pub step: u32,

    /// Fixed-width pattern of canonical values.
    pub source_pattern: SourcePattern,

    /// JSON `TimeValues` document replacing the generated list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predefined_values: Option<PathBuf>,

    /// JSON map of locale tag to short/medium/long patterns, layered over the
    /// builtin patterns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale_patterns: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            locale: Locale::default().to_string(),
            style: Style::default().to_string(),
            step: DEFAULT_STEP,
            source_pattern: SourcePattern::default(),
            predefined_values: None,
            locale_patterns: None,
        }
    }
}

impl Config {
    /// Reads the configuration, returning defaults when no file exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive setup wizard, starting from the stored settings.
    pub fn init() -> Result<Self> {
        let default = Self::read().unwrap_or_default();
        msg_print!(Message::ConfigModulePicker, true);

        let locale: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptLocale.to_string())
            .default(default.locale.clone())
            .interact_text()?;

        let styles: Vec<&str> = Style::ALL.iter().map(|style| style.as_str()).collect();
        let style_index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptStyle.to_string())
            .items(&styles)
            .default(Style::ALL.iter().position(|style| style.as_str() == default.style).unwrap_or(1))
            .interact()?;

        let step_index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptStep.to_string())
            .items(&STEP_VALUES)
            .default(STEP_VALUES.iter().position(|step| *step == default.step).unwrap_or(0))
            .interact()?;

        let patterns = [SourcePattern::HourMinuteSecond, SourcePattern::HourMinute];
        let pattern_index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSourcePattern.to_string())
            .items(&patterns)
            .default(patterns.iter().position(|pattern| *pattern == default.source_pattern).unwrap_or(0))
            .interact()?;

        let predefined_values = prompt_path(Message::PromptPredefinedValues, &default.predefined_values)?;
        let locale_patterns = prompt_path(Message::PromptLocalePatterns, &default.locale_patterns)?;

        Ok(Config {
            locale,
            style: styles[style_index].to_string(),
            step: STEP_VALUES[step_index],
            source_pattern: patterns[pattern_index],
            predefined_values,
            locale_patterns,
        })
    }

    /// Builtin locale data, extended by the configured patterns file if it loads.
    pub fn locale_data(&self) -> Arc<dyn LocaleData + Send + Sync> {
        let Some(path) = &self.locale_patterns else {
            return Arc::new(BuiltinLocaleData);
        };

        let loaded = fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|json| MapLocaleData::from_json(&json).map_err(anyhow::Error::from));
        match loaded {
            Ok(patterns) => {
                let mut data = MapLocaleData::builtin();
                data.extend(patterns);
                Arc::new(data)
            }
            Err(e) => {
                msg_warning!(Message::LocalePatternsLoadFailed(path.display().to_string(), e.to_string()));
                Arc::new(BuiltinLocaleData)
            }
        }
    }

    /// Builds a picker from these settings.
    pub fn picker(&self) -> TimePicker {
        let mut picker = TimePicker::new(self.locale_data())
            .with_source_pattern(self.source_pattern)
            .with_locale(Locale::new(&self.locale))
            .with_style(&self.style);

        if picker.set_step(self.step).is_err() {
            msg_warning!(Message::StepRejected(self.step));
            let _ = picker.set_step(DEFAULT_STEP);
        }

        if let Some(path) = &self.predefined_values {
            match TimeValues::read(path) {
                Ok(values) => {
                    let codec = CanonicalCodec::new(self.source_pattern);
                    picker.set_predefined_values(Some(values.entries(&codec)));
                }
                Err(e) => {
                    msg_warning!(Message::PredefinedValuesLoadFailed(path.display().to_string(), e.to_string()));
                }
            }
        }

        picker
    }
}

fn prompt_path(prompt: Message, current: &Option<PathBuf>) -> Result<Option<PathBuf>> {
    let current = current.as_ref().map(|path| path.display().to_string()).unwrap_or_default();
    let answer: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(current)
        .allow_empty(true)
        .interact_text()?;

    let answer = answer.trim();
    Ok((!answer.is_empty()).then(|| PathBuf::from(answer)))
}
