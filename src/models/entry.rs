use crate::core::calculator::hours::calculate_hours;
use crate::models::year_month::YearMonth;
use crate::utils::time::hhmm;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One recorded work session.
///
/// Hours are never stored on the entry: they are always derived from
/// `start`/`end` through [`Entry::hours`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    pub date: NaiveDate, // "YYYY-MM-DD"
    #[serde(with = "hhmm")]
    pub start: NaiveTime, // "HH:MM"
    #[serde(with = "hhmm")]
    pub end: NaiveTime, // "HH:MM", may be before start (overnight)
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub bonus: f64,
}

impl Entry {
    pub fn new(
        id: i64,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
        note: impl Into<String>,
        bonus: f64,
    ) -> Self {
        Self {
            id,
            date,
            start,
            end,
            note: note.into(),
            bonus,
        }
    }

    /// Elapsed hours, rounded to 2 decimals, wrapping past midnight.
    pub fn hours(&self) -> f64 {
        calculate_hours(self.start, self.end)
    }

    pub fn year_month(&self) -> YearMonth {
        YearMonth::of(self.date)
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%H:%M").to_string()
    }

    /// Shape written to storage: the entry plus its derived hours, so the
    /// stored array stays readable by tools expecting the `hours` field.
    pub fn to_record(&self) -> EntryRecord<'_> {
        EntryRecord {
            entry: self,
            hours: self.hours(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EntryRecord<'a> {
    #[serde(flatten)]
    pub entry: &'a Entry,
    pub hours: f64,
}
