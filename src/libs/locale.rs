//! Styles, locales and the locale-data service.
//!
//! The picker never reaches for process-wide locale state. A [`LocaleData`]
//! implementation is handed to it at construction and answers one question:
//! which time pattern does `locale` use for `style`. The service is treated as
//! a pure function and may be called redundantly.
//!
//! [`BuiltinLocaleData`] ships patterns for a handful of locales. Lookups try
//! the full tag first (`en-gb`), then the bare language (`en`).
//! [`MapLocaleData`] holds patterns supplied by the host, e.g. from JSON.

use super::error::ConfigRejected;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// A named formatting granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Short,
    #[default]
    Medium,
    Long,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Short, Style::Medium, Style::Long];

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Short => "short",
            Style::Medium => "medium",
            Style::Long => "long",
        }
    }

    /// Resolves a style name, falling back to `medium` for anything unknown.
    pub fn coerce(name: &str) -> Style {
        match name.parse() {
            Ok(style) => style,
            Err(e) => {
                tracing::warn!(style = name, error = %e, "falling back to medium time style");
                Style::Medium
            }
        }
    }

    /// The pattern the formatter uses for this style when no locale data applies.
    pub fn builtin_pattern(&self) -> &'static str {
        match self {
            Style::Short => "HH:mm",
            Style::Medium => "HH:mm:ss",
            Style::Long => "HH:mm:ss.SSS",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = ConfigRejected;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(Style::Short),
            "medium" => Ok(Style::Medium),
            "long" => Ok(Style::Long),
            other => Err(ConfigRejected::Style(other.to_string())),
        }
    }
}

/// A BCP 47 language tag such as `de-DE`, stored with `-` separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    pub fn new(tag: &str) -> Self {
        Locale(tag.trim().replace('_', "-"))
    }

    pub fn tag(&self) -> &str {
        &self.0
    }

    /// The language subtag, lowercased (`de` for `de-DE`).
    pub fn language(&self) -> String {
        self.0.split('-').next().unwrap_or_default().to_ascii_lowercase()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::new("en-US")
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Locale::new(&tag)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

/// Supplies concrete time patterns for a locale and style.
pub trait LocaleData {
    fn time_pattern(&self, locale: &Locale, style: Style) -> Option<String>;
}

/// Short, medium and long patterns of one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylePatterns {
    pub short: String,
    pub medium: String,
    pub long: String,
}

impl StylePatterns {
    pub fn get(&self, style: Style) -> &str {
        match style {
            Style::Short => &self.short,
            Style::Medium => &self.medium,
            Style::Long => &self.long,
        }
    }
}

// tag, short, medium, long
const BUILTIN_PATTERNS: &[(&str, &str, &str, &str)] = &[
    ("en", "h:mm a", "h:mm:ss a", "h:mm:ss.SSS a"),
    ("en-gb", "HH:mm", "HH:mm:ss", "HH:mm:ss.SSS"),
    ("de", "HH:mm", "HH:mm:ss", "HH:mm:ss 'Uhr'"),
    ("fr", "HH:mm", "HH:mm:ss", "HH 'h' mm 'min' ss 's'"),
    ("es", "H:mm", "H:mm:ss", "H:mm:ss.SSS"),
    ("it", "HH:mm", "HH:mm:ss", "HH:mm:ss.SSS"),
    ("ja", "H:mm", "H:mm:ss", "H'時'mm'分'ss'秒'"),
];

/// Locale data compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLocaleData;

impl LocaleData for BuiltinLocaleData {
    fn time_pattern(&self, locale: &Locale, style: Style) -> Option<String> {
        let full = locale.tag().to_ascii_lowercase();
        let language = locale.language();

        [full.as_str(), language.as_str()].iter().find_map(|wanted| {
            BUILTIN_PATTERNS.iter().find(|(tag, ..)| tag == wanted).map(|(_, short, medium, long)| {
                match style {
                    Style::Short => short.to_string(),
                    Style::Medium => medium.to_string(),
                    Style::Long => long.to_string(),
                }
            })
        })
    }
}

/// Locale data held in a map keyed by lowercase tag or language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapLocaleData {
    patterns: HashMap<String, StylePatterns>,
}

impl MapLocaleData {
    pub fn new() -> Self {
        MapLocaleData::default()
    }

    /// A map preloaded with the builtin table, ready to be extended.
    pub fn builtin() -> Self {
        let mut data = MapLocaleData::new();
        for (tag, short, medium, long) in BUILTIN_PATTERNS {
            data.insert(
                tag,
                StylePatterns { short: short.to_string(), medium: medium.to_string(), long: long.to_string() },
            );
        }
        data
    }

    pub fn insert(&mut self, tag: &str, patterns: StylePatterns) {
        self.patterns.insert(tag.to_ascii_lowercase(), patterns);
    }

    /// Adds every entry of `other`, replacing entries with the same tag.
    pub fn extend(&mut self, other: MapLocaleData) {
        self.patterns.extend(other.patterns);
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let raw: HashMap<String, StylePatterns> = serde_json::from_str(json)?;
        let mut data = MapLocaleData::new();
        for (tag, patterns) in raw {
            data.insert(&tag, patterns);
        }
        Ok(data)
    }
}

impl LocaleData for MapLocaleData {
    fn time_pattern(&self, locale: &Locale, style: Style) -> Option<String> {
        self.patterns
            .get(&locale.tag().to_ascii_lowercase())
            .or_else(|| self.patterns.get(&locale.language()))
            .map(|patterns| patterns.get(style).to_string())
    }
}
