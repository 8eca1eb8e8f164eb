//! Display formatting for time-of-day values.
//!
//! The display string a user sees depends on where the pattern comes from.
//! [`resolve_pattern`] picks the source in priority order:
//!
//! 1. **Binding**: the display value is bound to a time type that carries an
//!    explicit pattern. That pattern wins over style and locale, and the type
//!    may ask for relative phrasing.
//! 2. **Locale data**: the configured style (`short`/`medium`/`long`, anything
//!    else counts as `medium`) is looked up for the active locale.
//! 3. **Named style**: when the locale data has nothing for the style, the
//!    style itself is passed through and the formatter uses its own pattern
//!    for it.
//!
//! [`DisplayFormatter`] holds the compiled pattern for one [`Resolution`] and
//! only rebuilds it when handed a different resolution, so reformatting on
//! every keystroke never recompiles anything.
//!
//! ## Examples
//!
//! ```rust
//! use timepicker::libs::formatter::{resolve_pattern, DisplayFormatter, Resolution};
//! use timepicker::libs::locale::{BuiltinLocaleData, Locale};
//! use timepicker::libs::time_of_day::TimeOfDay;
//!
//! let resolution = resolve_pattern(None, "medium", &Locale::new("de-DE"), &BuiltinLocaleData);
//! assert_eq!(resolution, Resolution::Pattern { pattern: "HH:mm:ss".to_string(), relative: false });
//!
//! let mut formatter = DisplayFormatter::new();
//! formatter.apply(resolution);
//! let time = TimeOfDay::from_hms(17, 45, 2).unwrap();
//! assert_eq!(formatter.format(time), "17:45:02");
//! ```

use super::error::ParseError;
use super::locale::{Locale, LocaleData, Style};
use super::pattern::DisplayPattern;
use super::relative::{format_relative, parse_relative, Clock, SystemClock};
use super::time_of_day::TimeOfDay;
use std::sync::Arc;

/// Options of a time type a display value can be bound to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeFormatOptions {
    /// Output pattern of the type, e.g. `HH:mm`.
    pub pattern: Option<String>,
    /// Render values as "in 5 minutes" style phrases.
    pub relative: bool,
}

/// The type of the data binding driving the display value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingType {
    Time(TimeFormatOptions),
    /// A non-time type; it has no say in the display pattern.
    Text,
}

/// Where the display pattern comes from once all sources are considered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A concrete pattern, from a binding or from locale data.
    Pattern { pattern: String, relative: bool },
    /// A named style the formatter resolves on its own.
    Style(Style),
}

impl Resolution {
    pub fn is_relative(&self) -> bool {
        matches!(self, Resolution::Pattern { relative: true, .. })
    }
}

/// Decides which pattern or style the display value uses.
pub fn resolve_pattern(
    binding: Option<&BindingType>,
    style: &str,
    locale: &Locale,
    locale_data: &dyn LocaleData,
) -> Resolution {
    if let Some(BindingType::Time(TimeFormatOptions { pattern: Some(pattern), relative })) = binding {
        return Resolution::Pattern { pattern: pattern.clone(), relative: *relative };
    }

    let style = Style::coerce(style);
    match locale_data.time_pattern(locale, style) {
        Some(pattern) => Resolution::Pattern { pattern, relative: false },
        None => Resolution::Style(style),
    }
}

/// Formats and parses display strings under one cached resolution.
pub struct DisplayFormatter {
    resolution: Option<Resolution>,
    pattern: Option<DisplayPattern>,
    revision: u64,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl Default for DisplayFormatter {
    fn default() -> Self {
        DisplayFormatter::new()
    }
}

impl DisplayFormatter {
    pub fn new() -> Self {
        DisplayFormatter::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        DisplayFormatter { resolution: None, pattern: None, revision: 0, clock }
    }

    pub fn resolution(&self) -> Option<&Resolution> {
        self.resolution.as_ref()
    }

    /// The pattern currently in use, if one compiled.
    pub fn pattern(&self) -> Option<&DisplayPattern> {
        self.pattern.as_ref()
    }

    /// Counts how many times the compiled pattern has been rebuilt.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Switches to `resolution`, rebuilding only if it differs from the current one.
    ///
    /// Returns `true` when the pattern was rebuilt. A pattern that fails to
    /// compile is replaced by the builtin pattern of the `medium` style.
    pub fn apply(&mut self, resolution: Resolution) -> bool {
        if self.resolution.as_ref() == Some(&resolution) {
            return false;
        }

        let source = match &resolution {
            Resolution::Pattern { pattern, .. } => pattern.as_str(),
            Resolution::Style(style) => style.builtin_pattern(),
        };

        let compiled = DisplayPattern::compile(source).or_else(|e| {
            tracing::warn!(pattern = source, error = %e, "using the medium style pattern instead");
            DisplayPattern::compile(Style::Medium.builtin_pattern())
        });

        self.pattern = match compiled {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                tracing::error!(error = %e, "no display pattern available");
                None
            }
        };
        tracing::debug!(?resolution, revision = self.revision + 1, "display pattern rebuilt");
        self.resolution = Some(resolution);
        self.revision += 1;
        true
    }

    pub fn format(&self, time: TimeOfDay) -> String {
        if self.is_relative() {
            return format_relative(time, self.clock.now());
        }
        match &self.pattern {
            Some(pattern) => pattern.format(time),
            None => time.to_string(),
        }
    }

    /// Parses a display string strictly under the current pattern.
    pub fn parse(&self, input: &str) -> Result<TimeOfDay, ParseError> {
        if self.is_relative() {
            if let Ok(time) = parse_relative(input, self.clock.now()) {
                return Ok(time);
            }
        }
        match &self.pattern {
            Some(pattern) => pattern.parse(input),
            None => Err(ParseError::Pattern {
                input: input.to_string(),
                pattern: String::new(),
                reason: "no display pattern available".to_string(),
            }),
        }
    }

    fn is_relative(&self) -> bool {
        self.resolution.as_ref().is_some_and(Resolution::is_relative)
    }
}
