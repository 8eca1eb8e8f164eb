//! Display implementation for timepicker application messages.
//!
//! All user-facing text lives here so commands only deal with [`Message`]
//! variants. Parameters are interpolated per variant.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModulePicker => "Time picker settings".to_string(),
            Message::ConfigReadFailed(error) => format!("Failed to read configuration, using defaults: {}", error),
            Message::StepRejected(step) => {
                format!("Step {} is not supported. Use one of 0, 1, 2, 3, 4, 5, 6, 10, 12, 15, 20, 30, 60.", step)
            }
            Message::PredefinedValuesLoadFailed(path, error) => format!("Failed to load time values from {}: {}", path, error),
            Message::LocalePatternsLoadFailed(path, error) => format!("Failed to load locale patterns from {}: {}", path, error),

            // === VALUE MESSAGES ===
            Message::InvalidCanonicalValue(input) => format!("'{}' can not be converted to a valid time", input),
            Message::InvalidDisplayValue(input) => format!("'{}' does not match the active time format", input),
            Message::ListKeyNotFound(key) => format!("No list entry with key {}", key),
            Message::ValueCleared => "Time value cleared".to_string(),

            // === LIST MESSAGES ===
            Message::TimeListHeader(step) => format!("Times every {} minute(s):", step),
            Message::PredefinedListHeader(count) => format!("Predefined times ({}):", count),
            Message::EmptyTimeList => "No times to list: the step is 0 and no predefined values are set.".to_string(),

            // === PICK MESSAGES ===
            Message::PickFromList => "Pick from list".to_string(),
            Message::PickEnterManually => "Enter manually".to_string(),
            Message::PickTryAgain => "Please try again.".to_string(),
            Message::ChangeEventHeader => "Time changed:".to_string(),

            // === DEMO MESSAGES ===
            Message::DemoHeader => "Replaying demo time values:".to_string(),
            Message::DemoTimeChange(value) => format!("newHhmmss: {}", value),

            // === PROMPTS ===
            Message::PromptLocale => "Locale (e.g. en-US, de-DE)".to_string(),
            Message::PromptStyle => "Time style".to_string(),
            Message::PromptStep => "List step in minutes".to_string(),
            Message::PromptSourcePattern => "Canonical value pattern".to_string(),
            Message::PromptPredefinedValues => "Predefined time values file (leave empty for none)".to_string(),
            Message::PromptLocalePatterns => "Locale patterns file (leave empty for builtin patterns)".to_string(),
            Message::PromptPickMode => "How do you want to set the time?".to_string(),
            Message::PromptSelectTime => "Select a time".to_string(),
            Message::PromptTime(pattern) => format!("Time ({})", pattern),
        };

        write!(f, "{}", text)
    }
}
