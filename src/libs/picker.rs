//! The time picker control facade.
//!
//! [`TimePicker`] owns the two public values of the control and keeps them in
//! sync: the canonical string exchanged with the data layer and the display
//! string shown to the user. It delegates conversion to the canonical codec
//! and the display formatter, and generates the picker list on demand.
//!
//! ## States
//!
//! ```text
//!            set_canonical / set_display (valid)
//!   Empty ─────────────────────────────────────▶ Valid(t)
//!     ▲                                             │
//!     └──────── empty or invalid input ◀────────────┘
//! ```
//!
//! Every completed transition emits one [`ChangeEvent`] carrying both values
//! and whether the input was invalid. A setter is a no-op and emits nothing
//! when its input equals either the raw text last handed to that same setter
//! or the current value of its property. The second rule makes a binding that
//! echoes the derived value back (display to canonical or the reverse) silent.
//!
//! Value errors never escape as `Err`: the picker drops to `Empty`, logs the
//! problem and flags the event. Configuration errors are returned as
//! [`ConfigRejected`] and leave the previous setting in place.
//!
//! ## Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use timepicker::libs::locale::{BuiltinLocaleData, Locale};
//! use timepicker::libs::picker::TimePicker;
//!
//! let mut picker = TimePicker::new(Arc::new(BuiltinLocaleData)).with_locale(Locale::new("de-DE"));
//! let event = picker.set_canonical("174502").unwrap();
//! assert_eq!(event.display_value, "17:45:02");
//! assert!(!event.is_invalid);
//!
//! let event = picker.set_display("nonsense").unwrap();
//! assert!(event.is_invalid);
//! assert_eq!(picker.canonical_value(), "");
//! ```

use super::codec::{CanonicalCodec, SourcePattern};
use super::error::{ConfigRejected, ParseError};
use super::formatter::{resolve_pattern, BindingType, DisplayFormatter, Resolution};
use super::locale::{Locale, LocaleData, Style};
use super::pattern::DisplayPattern;
use super::relative::Clock;
use super::step_list::{self, Step, TimeListEntry};
use super::time_of_day::TimeOfDay;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Payload emitted whenever a value transition completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub display_value: String,
    pub canonical_value: String,
    pub is_invalid: bool,
}

/// Whether the picker currently holds a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerState {
    #[default]
    Empty,
    Valid(TimeOfDay),
}

/// A list entry decorated with its display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeListItem {
    pub key: usize,
    pub value: String,
    pub text: String,
}

type Listener = Box<dyn FnMut(&ChangeEvent)>;

pub struct TimePicker {
    codec: CanonicalCodec,
    locale_data: Arc<dyn LocaleData + Send + Sync>,
    locale: Locale,
    style: Style,
    binding: Option<BindingType>,
    step: Step,
    predefined: Option<Vec<TimeListEntry>>,
    state: PickerState,
    canonical_value: String,
    display_value: String,
    raw_canonical: Option<String>,
    raw_display: Option<String>,
    formatter: DisplayFormatter,
    resolved: bool,
    items: Option<Vec<TimeListItem>>,
    listeners: Vec<Listener>,
}

impl TimePicker {
    pub fn new(locale_data: Arc<dyn LocaleData + Send + Sync>) -> Self {
        TimePicker {
            codec: CanonicalCodec::default(),
            locale_data,
            locale: Locale::default(),
            style: Style::default(),
            binding: None,
            step: Step::NONE,
            predefined: None,
            state: PickerState::Empty,
            canonical_value: String::new(),
            display_value: String::new(),
            raw_canonical: None,
            raw_display: None,
            formatter: DisplayFormatter::new(),
            resolved: false,
            items: None,
            listeners: Vec::new(),
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.set_locale(locale);
        self
    }

    pub fn with_style(mut self, style: &str) -> Self {
        self.set_style(style);
        self
    }

    pub fn with_source_pattern(mut self, pattern: SourcePattern) -> Self {
        self.codec = CanonicalCodec::new(pattern).with_bounds(*self.codec.bounds());
        self
    }

    pub fn with_codec(mut self, codec: CanonicalCodec) -> Self {
        self.codec = codec;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        self.formatter = DisplayFormatter::with_clock(clock);
        self.resolved = false;
        self
    }

    pub fn with_binding(mut self, binding: BindingType) -> Self {
        self.bind_display(Some(binding));
        self
    }

    /// Sets the step, logging and ignoring an invalid one.
    pub fn with_step(mut self, minutes: u32) -> Self {
        let _ = self.set_step(minutes);
        self
    }

    pub fn state(&self) -> PickerState {
        self.state
    }

    pub fn time(&self) -> Option<TimeOfDay> {
        match self.state {
            PickerState::Valid(time) => Some(time),
            PickerState::Empty => None,
        }
    }

    pub fn canonical_value(&self) -> &str {
        &self.canonical_value
    }

    pub fn display_value(&self) -> &str {
        &self.display_value
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn source_pattern(&self) -> SourcePattern {
        self.codec.pattern()
    }

    /// The resolution in effect, resolving it first if it was invalidated.
    pub fn resolution(&mut self) -> Option<&Resolution> {
        self.ensure_formatter();
        self.formatter.resolution()
    }

    /// The compiled display pattern, if the resolution produced one.
    pub fn display_pattern(&mut self) -> Option<&DisplayPattern> {
        self.ensure_formatter();
        self.formatter.pattern()
    }

    pub fn predefined_values(&self) -> Option<&[TimeListEntry]> {
        self.predefined.as_deref()
    }

    /// How often the display pattern has been rebuilt.
    pub fn formatter_revision(&self) -> u64 {
        self.formatter.revision()
    }

    /// Registers a callback invoked with every emitted change event.
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: FnMut(&ChangeEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Sets the canonical value.
    ///
    /// Returns the emitted event, or `None` when `value` repeats the previous
    /// canonical input or equals the current canonical value.
    pub fn set_canonical(&mut self, value: &str) -> Option<ChangeEvent> {
        if self.raw_canonical.as_deref() == Some(value) || self.canonical_value == value {
            return None;
        }
        self.raw_canonical = Some(value.to_string());
        self.raw_display = None;

        if value.is_empty() {
            return Some(self.transition(None, false));
        }

        match self.codec.decode(value) {
            Ok(time) => Some(self.transition(Some(time), false)),
            Err(e) => {
                tracing::error!(input = value, error = %e, "value can not be converted to a valid time");
                Some(self.transition(None, true))
            }
        }
    }

    /// Sets the display value from user text.
    ///
    /// On success the display value is the reformatted time, not the raw text.
    /// Returns `None` when `value` repeats the previous display input or equals
    /// the current display value.
    pub fn set_display(&mut self, value: &str) -> Option<ChangeEvent> {
        if self.raw_display.as_deref() == Some(value) || self.display_value == value {
            return None;
        }
        self.raw_display = Some(value.to_string());
        self.raw_canonical = None;

        if value.trim().is_empty() {
            return Some(self.transition(None, false));
        }

        self.ensure_formatter();
        let parsed = self.formatter.parse(value).and_then(|time| self.codec.bounds().check(time));
        match parsed {
            Ok(time) => Some(self.transition(Some(time), false)),
            Err(e) => {
                tracing::error!(input = value, error = %e, "value can not be converted to a valid time");
                Some(self.transition(None, true))
            }
        }
    }

    /// Selects a list entry by key, setting the canonical value from it.
    pub fn select(&mut self, key: usize) -> Option<ChangeEvent> {
        let value = self.items().iter().find(|item| item.key == key)?.value.clone();
        let time = CanonicalCodec::new(SourcePattern::HourMinuteSecond).decode(&value).ok()?;
        let canonical = self.codec.encode(time);
        self.set_canonical(&canonical)
    }

    /// Sets the style; unknown names fall back to `medium`.
    pub fn set_style(&mut self, name: &str) -> Style {
        let style = Style::coerce(name);
        if style != self.style {
            self.style = style;
            self.invalidate();
        }
        style
    }

    pub fn set_locale(&mut self, locale: Locale) {
        if locale != self.locale {
            self.locale = locale;
            self.invalidate();
        }
    }

    /// Binds the display value to a type, or unbinds it with `None`.
    pub fn bind_display(&mut self, binding: Option<BindingType>) {
        if binding != self.binding {
            self.binding = binding;
            self.invalidate();
        }
    }

    /// Sets the list step in minutes.
    ///
    /// An invalid step is logged and rejected without touching any state.
    pub fn set_step(&mut self, minutes: u32) -> Result<(), ConfigRejected> {
        let step = Step::try_from(minutes).inspect_err(|e| {
            tracing::warn!(step = minutes, error = %e, "time step rejected");
        })?;

        if step != self.step {
            self.step = step;
            self.refresh_items();
        }
        Ok(())
    }

    /// Installs a predefined list that takes priority over the step, or removes it.
    pub fn set_predefined_values(&mut self, entries: Option<Vec<TimeListEntry>>) {
        if entries != self.predefined {
            self.predefined = entries;
            self.refresh_items();
        }
    }

    /// The picker list, generated on first use and kept until configuration changes.
    pub fn items(&mut self) -> &[TimeListItem] {
        if self.items.is_none() {
            self.items = Some(self.build_items());
        }
        self.items.as_deref().unwrap_or_default()
    }

    /// Formats a canonical string under the current settings without changing state.
    pub fn display_for(&mut self, canonical: &str) -> Result<String, ParseError> {
        let time = self.codec.decode(canonical)?;
        self.ensure_formatter();
        Ok(self.formatter.format(time))
    }

    /// Parses a display string under the current settings without changing state.
    pub fn canonical_for(&mut self, display: &str) -> Result<String, ParseError> {
        self.ensure_formatter();
        let time = self.formatter.parse(display)?;
        let time = self.codec.bounds().check(time)?;
        Ok(self.codec.encode(time))
    }

    /// Drops the current time and all listeners without notifying anyone.
    pub fn detach(&mut self) {
        self.state = PickerState::Empty;
        self.canonical_value.clear();
        self.display_value.clear();
        self.raw_canonical = None;
        self.raw_display = None;
        self.listeners.clear();
    }

    fn transition(&mut self, time: Option<TimeOfDay>, is_invalid: bool) -> ChangeEvent {
        match time {
            Some(time) => {
                self.ensure_formatter();
                self.state = PickerState::Valid(time);
                self.canonical_value = self.codec.encode(time);
                self.display_value = self.formatter.format(time);
            }
            None => {
                self.state = PickerState::Empty;
                self.canonical_value.clear();
                self.display_value.clear();
            }
        }

        let event = ChangeEvent {
            display_value: self.display_value.clone(),
            canonical_value: self.canonical_value.clone(),
            is_invalid,
        };
        for listener in self.listeners.iter_mut() {
            listener(&event);
        }
        event
    }

    fn ensure_formatter(&mut self) {
        if self.resolved {
            return;
        }
        let resolution = resolve_pattern(
            self.binding.as_ref(),
            self.style.as_str(),
            &self.locale,
            self.locale_data.as_ref(),
        );
        self.formatter.apply(resolution);
        self.resolved = true;
    }

    fn invalidate(&mut self) {
        self.resolved = false;
        self.raw_canonical = None;
        self.raw_display = None;

        if let PickerState::Valid(time) = self.state {
            self.ensure_formatter();
            self.display_value = self.formatter.format(time);
        }
        self.refresh_items();
    }

    fn refresh_items(&mut self) {
        if self.items.is_some() {
            self.items = Some(self.build_items());
        }
    }

    fn build_items(&mut self) -> Vec<TimeListItem> {
        let entries = match &self.predefined {
            Some(entries) => entries.clone(),
            None => step_list::generate(self.step),
        };

        self.ensure_formatter();
        let codec = CanonicalCodec::new(SourcePattern::HourMinuteSecond);
        entries
            .into_iter()
            .map(|entry| {
                let text = match codec.decode(&entry.value) {
                    Ok(time) => self.formatter.format(time),
                    Err(_) => entry.value.clone(),
                };
                TimeListItem { key: entry.key, value: entry.value, text }
            })
            .collect()
    }
}
