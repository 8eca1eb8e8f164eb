//! Display pattern compiler.
//!
//! Locale data describes time layouts with LDML-style patterns (`HH:mm:ss`,
//! `h:mm a`, `HH 'h' mm`). This module compiles such a pattern once into
//! chrono format items and then formats and strictly parses with them.
//!
//! ## Supported letters
//!
//! | Letter | Meaning | Count |
//! |---|---|---|
//! | `H` | hour 0-23 | 1 (no padding) or 2 (zero padded) |
//! | `h` | hour 1-12, needs `a` | 1 or 2 |
//! | `m` | minute | 1 or 2 |
//! | `s` | second | 1 or 2 |
//! | `S` | fraction of a second | 3, 6 or 9 |
//! | `a` | AM/PM marker | any |
//!
//! Text inside single quotes is literal, `''` is a quote. Any other ASCII letter
//! is rejected because LDML reserves letters for fields; zone letters in
//! particular make no sense for a time of day.
//!
//! Parsing ignores whitespace around the input. Inside it, whitespace in the
//! pattern matches any run of whitespace, including none, so `08h15` and
//! `08   h 15` both parse under `HH 'h' mm`.

use super::error::{ConfigRejected, ParseError, TimeField};
use super::time_of_day::TimeOfDay;
use chrono::format::{parse, Item, Parsed, StrftimeItems};
use std::fmt;

/// A compiled display pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayPattern {
    source: String,
    items: Vec<Item<'static>>,
}

impl DisplayPattern {
    /// Compiles an LDML-style time pattern.
    pub fn compile(pattern: &str) -> Result<Self, ConfigRejected> {
        let reject = |reason: String| ConfigRejected::Pattern { pattern: pattern.to_string(), reason };

        let mut strftime = String::with_capacity(pattern.len() * 2);
        let mut has_hour = false;
        let mut has_minute = false;
        let mut has_twelve_hour = false;
        let mut has_marker = false;

        let chars: Vec<char> = pattern.chars().collect();
        let mut i = 0;
        while i < chars.len() {
            let ch = chars[i];

            if ch == '\'' {
                // '' outside a quoted section is a literal quote
                if chars.get(i + 1) == Some(&'\'') {
                    strftime.push('\'');
                    i += 2;
                    continue;
                }
                i += 1;
                loop {
                    match chars.get(i) {
                        None => return Err(reject("unterminated quoted literal".to_string())),
                        Some('\'') if chars.get(i + 1) == Some(&'\'') => {
                            strftime.push('\'');
                            i += 2;
                        }
                        Some('\'') => {
                            i += 1;
                            break;
                        }
                        Some(&literal) => {
                            push_literal(&mut strftime, literal);
                            i += 1;
                        }
                    }
                }
                continue;
            }

            if !ch.is_ascii_alphabetic() {
                push_literal(&mut strftime, ch);
                i += 1;
                continue;
            }

            let mut count = 1;
            while chars.get(i + count) == Some(&ch) {
                count += 1;
            }
            i += count;

            let directive = match (ch, count) {
                ('H', 1) => "%-H",
                ('H', 2) => "%H",
                ('h', 1) => "%-I",
                ('h', 2) => "%I",
                ('m', 1) => "%-M",
                ('m', 2) => "%M",
                ('s', 1) => "%-S",
                ('s', 2) => "%S",
                ('S', 3) => "%3f",
                ('S', 6) => "%6f",
                ('S', 9) => "%9f",
                ('a', _) => "%p",
                ('H' | 'h' | 'm' | 's' | 'S', _) => {
                    return Err(reject(format!("field '{}' cannot be {} characters wide", ch, count)));
                }
                _ => return Err(reject(format!("unsupported pattern letter '{}'", ch))),
            };

            match ch {
                'H' => has_hour = true,
                'h' => {
                    has_hour = true;
                    has_twelve_hour = true;
                }
                'm' => has_minute = true,
                'a' => has_marker = true,
                _ => {}
            }
            strftime.push_str(directive);
        }

        if !has_hour || !has_minute {
            return Err(reject("pattern needs an hour and a minute field".to_string()));
        }
        if has_twelve_hour && !has_marker {
            return Err(reject("12-hour field 'h' needs an AM/PM marker 'a'".to_string()));
        }

        let items = StrftimeItems::new(&strftime)
            .parse_to_owned()
            .map_err(|e| reject(e.to_string()))?;

        Ok(DisplayPattern { source: pattern.to_string(), items })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn format(&self, time: TimeOfDay) -> String {
        time.as_naive().format_with_items(self.items.iter()).to_string()
    }

    /// Parses `input`, requiring the whole trimmed string to match the pattern.
    pub fn parse(&self, input: &str) -> Result<TimeOfDay, ParseError> {
        let mismatch = |reason: String| ParseError::Pattern {
            input: input.to_string(),
            pattern: self.source.clone(),
            reason,
        };

        let mut parsed = Parsed::new();
        parse(&mut parsed, input.trim(), self.items.iter()).map_err(|e| mismatch(e.to_string()))?;
        let time = TimeOfDay::from(parsed.to_naive_time().map_err(|e| mismatch(e.to_string()))?);

        if time.is_leap_second() {
            return Err(ParseError::FieldOutOfRange { field: TimeField::Second, value: 60 });
        }
        Ok(time)
    }
}

impl fmt::Display for DisplayPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn push_literal(strftime: &mut String, ch: char) {
    if ch == '%' {
        strftime.push_str("%%");
    } else {
        strftime.push(ch);
    }
}
