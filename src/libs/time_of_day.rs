//! Time-of-day values and the absolute range check applied after decoding.
//!
//! A [`TimeOfDay`] wraps a [`chrono::NaiveTime`] and is replaced wholesale on
//! every successful parse. It never carries a date or a zone.
//!
//! [`TimeBounds`] anchors a time of day on a date and checks the resulting
//! instant against `[0001-01-01 00:00:00, 9999-12-31 23:59:59.099]`. Chrono
//! uses the proleptic Gregorian calendar, so year 1 stays year 1 and is never
//! shifted into another century the way two-digit-year date libraries do.

use super::error::{ParseError, TimeField};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::fmt;

pub const SECONDS_PER_DAY: u32 = 86_400;
pub const MINUTES_PER_DAY: u32 = 1_440;

/// A time of day between midnight and the last instant before the next midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Builds a time of day from whole fields, naming the first field that is out of range.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Result<Self, ParseError> {
        Self::from_hms_milli(hour, minute, second, 0)
    }

    pub fn from_hms_milli(hour: u32, minute: u32, second: u32, milli: u32) -> Result<Self, ParseError> {
        if hour > 23 {
            return Err(ParseError::FieldOutOfRange { field: TimeField::Hour, value: hour });
        }
        if minute > 59 {
            return Err(ParseError::FieldOutOfRange { field: TimeField::Minute, value: minute });
        }
        if second > 59 {
            return Err(ParseError::FieldOutOfRange { field: TimeField::Second, value: second });
        }
        NaiveTime::from_hms_milli_opt(hour, minute, second, milli)
            .map(TimeOfDay)
            .ok_or(ParseError::FieldOutOfRange { field: TimeField::Second, value: second })
    }

    /// Returns the time `minutes` after midnight, or `None` past the end of the day.
    pub fn from_minute_of_day(minutes: u32) -> Option<Self> {
        if minutes >= MINUTES_PER_DAY {
            return None;
        }
        NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).map(TimeOfDay)
    }

    /// Returns the time `seconds` after midnight, wrapping around the day.
    pub fn from_second_of_day(seconds: u32) -> Self {
        let seconds = seconds % SECONDS_PER_DAY;
        NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)
            .map(TimeOfDay)
            .unwrap_or_default()
    }

    pub fn midnight() -> Self {
        TimeOfDay::default()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    pub fn nanosecond(&self) -> u32 {
        self.0.nanosecond()
    }

    pub fn second_of_day(&self) -> u32 {
        self.0.num_seconds_from_midnight()
    }

    pub fn as_naive(&self) -> NaiveTime {
        self.0
    }

    /// Returns `true` for chrono's leap-second representation (second 60).
    pub fn is_leap_second(&self) -> bool {
        self.0.nanosecond() >= 1_000_000_000
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        TimeOfDay(time)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M:%S%.f"))
    }
}

/// Absolute bounds a decoded time must satisfy once anchored on a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBounds {
    anchor: NaiveDate,
    min: NaiveDateTime,
    max: NaiveDateTime,
}

impl Default for TimeBounds {
    fn default() -> Self {
        let min_date = NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or(NaiveDate::MIN);
        let max_date = NaiveDate::from_ymd_opt(9999, 12, 31).unwrap_or(NaiveDate::MAX);
        let max_time = NaiveTime::from_hms_milli_opt(23, 59, 59, 99).unwrap_or_default();

        TimeBounds {
            // 1970-01-01, the date a parsed time of day lands on
            anchor: NaiveDate::default(),
            min: min_date.and_time(NaiveTime::default()),
            max: max_date.and_time(max_time),
        }
    }
}

impl TimeBounds {
    pub fn new(min: NaiveDateTime, max: NaiveDateTime) -> Self {
        TimeBounds { min, max, ..TimeBounds::default() }
    }

    /// Moves the date that times are anchored on before the range check.
    pub fn with_anchor(mut self, anchor: NaiveDate) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn min(&self) -> NaiveDateTime {
        self.min
    }

    pub fn max(&self) -> NaiveDateTime {
        self.max
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// Passes `time` through when its anchored instant lies within the bounds.
    pub fn check(&self, time: TimeOfDay) -> Result<TimeOfDay, ParseError> {
        let instant = self.anchor.and_time(time.as_naive());
        if instant < self.min || instant > self.max {
            return Err(ParseError::OutOfBounds(instant));
        }
        Ok(time)
    }
}
