//! Ascendant ("rising") sign.
//!
//! The rising sign here is a placeholder scheme rather than a house
//! calculation: the sign advances one step per two hours of birth time and
//! is shifted by the length of the birth-place string modulo 4.

use crate::error::HoroscopeError;
use crate::western::signs::Sign;
use chrono::{NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Birth time as supplied by a caller. Only hour and minute are used.
///
/// Deserialization tries a timestamp, then a clock time, and keeps the raw
/// text only when neither parses. `Text("14:30")` therefore reads back as
/// `Clock(14:30)`; the variant may change across a round trip but
/// [`BirthTime::hour_minute`] does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BirthTime {
    /// A full timestamp; the date part is ignored.
    At(NaiveDateTime),
    Clock(NaiveTime),
    /// "HH:MM", or an ISO-8601 style timestamp such as "2025-03-28T14:04:59.781Z".
    Text(String),
}

impl BirthTime {
    /// Normalizes to `(hour, minute)`, validating 0..=23 and 0..=59.
    pub fn hour_minute(&self) -> Result<(u32, u32), HoroscopeError> {
        match self {
            Self::At(dt) => Ok((dt.hour(), dt.minute())),
            Self::Clock(t) => Ok((t.hour(), t.minute())),
            Self::Text(text) => parse_time_text(text),
        }
    }
}

impl From<NaiveTime> for BirthTime {
    fn from(t: NaiveTime) -> Self {
        Self::Clock(t)
    }
}

impl From<NaiveDateTime> for BirthTime {
    fn from(dt: NaiveDateTime) -> Self {
        Self::At(dt)
    }
}

impl From<&str> for BirthTime {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for BirthTime {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

fn parse_time_text(text: &str) -> Result<(u32, u32), HoroscopeError> {
    let clock = if text.contains('T') && text.contains(':') {
        // Date and time separated by 'T': keep what follows the first one.
        text.split('T').nth(1).unwrap_or_default()
    } else if text.contains(':') {
        text
    } else {
        return Err(HoroscopeError::InvalidTimeFormat(text.to_string()));
    };

    let mut parts = clock.split(':');
    let hour = parts.next().and_then(parse_leading_int);
    let minute = parts.next().and_then(parse_leading_int);

    match (hour, minute) {
        (Some(h), Some(m)) if (0..=23).contains(&h) && (0..=59).contains(&m) => {
            Ok((h as u32, m as u32))
        }
        _ => Err(HoroscopeError::InvalidTimeFormat(text.to_string())),
    }
}

/// Leading-integer parse: skips leading whitespace, accepts one sign,
/// reads digits until the first non-digit. `None` when no digit is found.
fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        seen = true;
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }

    if !seen {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Rising sign for a birth hour/minute and birth place.
///
/// The location length is counted in UTF-16 code units and the location is
/// measured as given, surrounding whitespace included.
pub fn ascendant(hour: u32, minute: u32, location: &str) -> Result<Sign, HoroscopeError> {
    if hour > 23 || minute > 59 {
        return Err(HoroscopeError::InvalidTimeFormat(format!("{hour}:{minute}")));
    }
    if location.trim().is_empty() {
        return Err(HoroscopeError::MissingRequiredField("location"));
    }

    let location_factor = location.encode_utf16().count() % 4;
    let time_index = (hour as usize / 2) % 12;

    Ok(Sign::from_index(time_index + location_factor))
}

/// Normalizes `time` and computes the rising sign.
pub fn ascendant_for_time(time: &BirthTime, location: &str) -> Result<Sign, HoroscopeError> {
    let (hour, minute) = time.hour_minute()?;
    ascendant(hour, minute, location)
}
