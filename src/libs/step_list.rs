//! Step-list generation and predefined time value lists.
//!
//! A step list offers every whole minute of the day that is a multiple of the
//! step, as canonical `HHmmss` strings with dense zero-based keys:
//!
//! ```text
//! step 15  ->  0:"000000"  1:"001500"  2:"003000"  ...  95:"234500"
//! ```
//!
//! Only the steps in [`STEP_VALUES`] are accepted; `0` means "no list".
//! Generation is a pure function of the step, so regenerating for the same
//! step yields an identical list.
//!
//! Hosts can also supply their own list as a `TimeValues` JSON document:
//!
//! ```json
//! { "timeValues": [ { "key": "a", "text": "0800" }, { "key": "b", "text": "1230" } ] }
//! ```

use super::codec::{CanonicalCodec, SourcePattern};
use super::error::ConfigRejected;
use super::time_of_day::{TimeOfDay, MINUTES_PER_DAY};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

/// Every step, in minutes, the picker accepts.
pub const STEP_VALUES: [u32; 13] = [0, 1, 2, 3, 4, 5, 6, 10, 12, 15, 20, 30, 60];

/// A validated step size in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Step(u32);

impl Step {
    pub const NONE: Step = Step(0);

    pub fn minutes(&self) -> u32 {
        self.0
    }

    pub fn is_none(&self) -> bool {
        self.0 == 0
    }

    /// Number of entries a list with this step holds.
    pub fn len(&self) -> usize {
        match self.0 {
            0 => 0,
            step => MINUTES_PER_DAY.div_ceil(step) as usize,
        }
    }
}

impl TryFrom<u32> for Step {
    type Error = ConfigRejected;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        if STEP_VALUES.contains(&minutes) {
            Ok(Step(minutes))
        } else {
            Err(ConfigRejected::Step(minutes))
        }
    }
}

impl From<Step> for u32 {
    fn from(step: Step) -> Self {
        step.0
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One choice of a picker list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeListEntry {
    /// Dense position of the entry, starting at 0.
    pub key: usize,
    /// Canonical `HHmmss` value.
    pub value: String,
}

/// Generates the list of times spaced `step` minutes apart.
pub fn generate(step: Step) -> Vec<TimeListEntry> {
    if step.is_none() {
        return Vec::new();
    }

    let codec = CanonicalCodec::new(SourcePattern::HourMinuteSecond);
    (0..MINUTES_PER_DAY)
        .filter(|minute| minute % step.minutes() == 0)
        .filter_map(TimeOfDay::from_minute_of_day)
        .enumerate()
        .map(|(key, time)| TimeListEntry { key, value: codec.encode(time) })
        .collect()
}

/// Validates `minutes` and generates its list, or reports the rejected step.
pub fn generate_for(minutes: u32) -> Result<Vec<TimeListEntry>, ConfigRejected> {
    let step = Step::try_from(minutes)?;
    Ok(generate(step))
}

/// One record of a predefined `TimeValues` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeValue {
    #[serde(default)]
    pub key: String,
    pub text: String,
}

/// A predefined list of time values supplied by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeValues {
    #[serde(rename = "timeValues")]
    pub time_values: Vec<TimeValue>,
}

impl TimeValues {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn read(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Turns the records into list entries.
    ///
    /// Texts are decoded with `codec`; records that do not decode are skipped
    /// with a warning, repeated times keep their first occurrence, and keys are
    /// renumbered densely in document order.
    pub fn entries(&self, codec: &CanonicalCodec) -> Vec<TimeListEntry> {
        let output = CanonicalCodec::new(SourcePattern::HourMinuteSecond);
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(self.time_values.len());

        for record in &self.time_values {
            let time = match codec.decode(&record.text) {
                Ok(time) => time,
                Err(e) => {
                    tracing::warn!(key = %record.key, text = %record.text, error = %e, "skipping predefined time value");
                    continue;
                }
            };
            let value = output.encode(time);
            if seen.insert(value.clone()) {
                entries.push(TimeListEntry { key: entries.len(), value });
            }
        }
        entries
    }
}
