//! Canonical time codec.
//!
//! Canonical strings are the locale-independent form a time travels in between
//! the picker and the data layer: exactly four (`HHmm`) or six (`HHmmss`)
//! ASCII digits on a 24-hour clock, each field zero-padded.
//!
//! Decoding is strict. A string with the wrong length, a non-digit character
//! or a field out of range is rejected outright, and the decoded value must
//! also pass the absolute [`TimeBounds`] check.
//!
//! ```rust
//! use timepicker::libs::codec::{CanonicalCodec, SourcePattern};
//!
//! let codec = CanonicalCodec::new(SourcePattern::HourMinuteSecond);
//! let time = codec.decode("174502").unwrap();
//! assert_eq!((time.hour(), time.minute(), time.second()), (17, 45, 2));
//! assert_eq!(codec.encode(time), "174502");
//! assert!(codec.decode("240000").is_err());
//! ```

use super::error::{ConfigRejected, ParseError};
use super::time_of_day::{TimeBounds, TimeOfDay};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed-width pattern canonical strings follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SourcePattern {
    #[serde(rename = "HHmm")]
    HourMinute,
    #[default]
    #[serde(rename = "HHmmss")]
    HourMinuteSecond,
}

impl SourcePattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourcePattern::HourMinute => "HHmm",
            SourcePattern::HourMinuteSecond => "HHmmss",
        }
    }

    /// Number of digits a canonical string in this pattern has.
    pub fn width(&self) -> usize {
        match self {
            SourcePattern::HourMinute => 4,
            SourcePattern::HourMinuteSecond => 6,
        }
    }
}

impl fmt::Display for SourcePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourcePattern {
    type Err = ConfigRejected;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HHmm" => Ok(SourcePattern::HourMinute),
            "HHmmss" => Ok(SourcePattern::HourMinuteSecond),
            other => Err(ConfigRejected::SourcePattern(other.to_string())),
        }
    }
}

/// Converts between canonical strings and [`TimeOfDay`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CanonicalCodec {
    pattern: SourcePattern,
    bounds: TimeBounds,
}

impl CanonicalCodec {
    pub fn new(pattern: SourcePattern) -> Self {
        CanonicalCodec { pattern, bounds: TimeBounds::default() }
    }

    pub fn with_bounds(mut self, bounds: TimeBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn pattern(&self) -> SourcePattern {
        self.pattern
    }

    pub fn bounds(&self) -> &TimeBounds {
        &self.bounds
    }

    /// Decodes a canonical string, rejecting anything but an exact match.
    pub fn decode(&self, canonical: &str) -> Result<TimeOfDay, ParseError> {
        let expected = self.pattern.width();
        let found = canonical.chars().count();
        if found != expected {
            return Err(ParseError::Length { pattern: self.pattern.as_str(), expected, found });
        }

        let mut digits = [0u32; 6];
        for (position, ch) in canonical.chars().enumerate() {
            digits[position] = ch.to_digit(10).ok_or(ParseError::NonDigit { position, found: ch })?;
        }

        let hour = digits[0] * 10 + digits[1];
        let minute = digits[2] * 10 + digits[3];
        let second = match self.pattern {
            SourcePattern::HourMinute => 0,
            SourcePattern::HourMinuteSecond => digits[4] * 10 + digits[5],
        };

        let time = TimeOfDay::from_hms(hour, minute, second)?;
        self.bounds.check(time)
    }

    /// Encodes a time as a zero-padded canonical string; fractions and, for
    /// `HHmm`, seconds are dropped.
    pub fn encode(&self, time: TimeOfDay) -> String {
        match self.pattern {
            SourcePattern::HourMinute => format!("{:02}{:02}", time.hour(), time.minute()),
            SourcePattern::HourMinuteSecond => {
                format!("{:02}{:02}{:02}", time.hour(), time.minute(), time.second())
            }
        }
    }
}
