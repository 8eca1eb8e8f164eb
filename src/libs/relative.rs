//! Relative time phrasing.
//!
//! A bound time type may ask for relative output. The formatter then renders
//! a time against the current time of day instead of through its pattern:
//!
//! - less than a minute apart: `now`
//! - less than an hour apart: `in 5 minutes`, `1 minute ago`
//! - otherwise: `in 2 hours`, `3 hours ago`
//!
//! Times of day carry no date, so the shorter way around midnight wins: at
//! 23:50, 00:10 is `in 20 minutes` rather than `23 hours ago`.
//!
//! Parsing accepts the same phrases plus seconds (`in 30 seconds`) and lands
//! on the resulting time of day, wrapping around midnight.

use super::error::ParseError;
use super::time_of_day::{TimeOfDay, SECONDS_PER_DAY};

const HALF_DAY: i64 = SECONDS_PER_DAY as i64 / 2;
use chrono::Local;

/// Source of the current time of day.
pub trait Clock {
    fn now(&self) -> TimeOfDay;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> TimeOfDay {
        TimeOfDay::from(Local::now().time())
    }
}

/// Always reports the same time; used by tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub TimeOfDay);

impl Clock for FixedClock {
    fn now(&self) -> TimeOfDay {
        self.0
    }
}

pub fn format_relative(time: TimeOfDay, now: TimeOfDay) -> String {
    let delta = i64::from(time.second_of_day()) - i64::from(now.second_of_day());
    let delta = (delta + HALF_DAY).rem_euclid(i64::from(SECONDS_PER_DAY)) - HALF_DAY;
    let minutes = delta / 60;

    if minutes == 0 {
        return "now".to_string();
    }
    if minutes.abs() < 60 {
        return phrase(minutes, "minute");
    }
    phrase(minutes / 60, "hour")
}

pub fn parse_relative(input: &str, now: TimeOfDay) -> Result<TimeOfDay, ParseError> {
    let invalid = || ParseError::Relative(input.to_string());
    let normalized = input.trim().to_lowercase();
    let words: Vec<&str> = normalized.split_whitespace().collect();

    let (amount, unit, sign) = match words.as_slice() {
        ["now"] => return Ok(now),
        ["in", amount, unit] => (*amount, *unit, 1),
        [amount, unit, "ago"] => (*amount, *unit, -1),
        _ => return Err(invalid()),
    };

    let amount = i64::from(amount.parse::<u32>().map_err(|_| invalid())?);
    let unit_seconds = match unit.trim_end_matches('s') {
        "second" => 1,
        "minute" => 60,
        "hour" => 3_600,
        _ => return Err(invalid()),
    };

    let offset = sign * amount * unit_seconds;
    let seconds = (i64::from(now.second_of_day()) + offset).rem_euclid(i64::from(SECONDS_PER_DAY));
    let seconds = u32::try_from(seconds).map_err(|_| invalid())?;
    Ok(TimeOfDay::from_second_of_day(seconds))
}

fn phrase(amount: i64, unit: &str) -> String {
    let count = amount.abs();
    let plural = if count == 1 { "" } else { "s" };
    if amount > 0 {
        format!("in {} {}{}", count, unit, plural)
    } else {
        format!("{} {}{} ago", count, unit, plural)
    }
}
