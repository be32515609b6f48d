//! Time utilities: parsing HH:MM, default end time, serde helpers.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
}

/// Parse a time flag.
/// `None` means the flag was not given; an empty string means the user
/// cleared the field, which is rejected.
pub fn parse_time_field(input: Option<&str>, field: &'static str) -> AppResult<Option<NaiveTime>> {
    match input {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Err(AppError::MissingField(field)),
        Some(s) => parse_time(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidTime(s.to_string())),
    }
}

/// Round `now` up to the next half hour: before :30 gives HH:30, otherwise
/// the next full hour. Midnight rollover is clamped to 23:30.
pub fn next_half_hour(now: NaiveTime) -> NaiveTime {
    let (hour, minute) = if now.minute() < 30 {
        (now.hour(), 30)
    } else if now.hour() + 1 == 24 {
        (23, 30)
    } else {
        (now.hour() + 1, 0)
    };

    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(now)
}

pub fn default_end() -> NaiveTime {
    next_half_hour(chrono::Local::now().time())
}

/// Serde adapter storing a `NaiveTime` as "HH:MM".
pub mod hhmm {
    use super::parse_time;
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&t.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        parse_time(&raw).ok_or_else(|| D::Error::custom(format!("invalid time '{raw}'")))
    }
}
