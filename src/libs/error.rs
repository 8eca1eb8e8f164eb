//! Error types for time conversion and picker configuration.
//!
//! Two families of errors exist and both are recoverable:
//!
//! - [`ParseError`]: an input string does not match the canonical or display
//!   pattern, or decodes to a value outside the supported range.
//! - [`ConfigRejected`]: a style, step, source pattern or display pattern
//!   setting was refused. The previous setting stays in effect.
//!
//! The picker facade never surfaces a [`ParseError`] to its caller as a
//! failure. It moves to the empty state and flags the change event instead.

use chrono::NaiveDateTime;
use std::fmt;
use thiserror::Error;

/// A single field of a time-of-day value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Hour,
    Minute,
    Second,
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeField::Hour => "hour",
            TimeField::Minute => "minute",
            TimeField::Second => "second",
        };
        f.write_str(name)
    }
}

/// An input string could not be turned into a valid time of day.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected {expected} characters for pattern {pattern}, got {found}")]
    Length { pattern: &'static str, expected: usize, found: usize },

    #[error("non-digit character {found:?} at position {position}")]
    NonDigit { position: usize, found: char },

    #[error("{field} value {value} is out of range")]
    FieldOutOfRange { field: TimeField, value: u32 },

    #[error("{input:?} does not match display pattern {pattern:?}: {reason}")]
    Pattern { input: String, pattern: String, reason: String },

    #[error("{0} lies outside the supported time range")]
    OutOfBounds(NaiveDateTime),

    #[error("{0:?} is not a relative time expression")]
    Relative(String),
}

/// A configuration value was refused and the previous value retained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigRejected {
    #[error("step {0} is not one of 0, 1, 2, 3, 4, 5, 6, 10, 12, 15, 20, 30, 60")]
    Step(u32),

    #[error("unknown time style {0:?}, expected short, medium or long")]
    Style(String),

    #[error("unknown source pattern {0:?}, expected HHmm or HHmmss")]
    SourcePattern(String),

    #[error("invalid display pattern {pattern:?}: {reason}")]
    Pattern { pattern: String, reason: String },
}
