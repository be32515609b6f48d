use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a date flag. `None` = not given, empty string = cleared field.
pub fn parse_date_field(input: Option<&str>) -> AppResult<Option<NaiveDate>> {
    match input {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Err(AppError::MissingField("date")),
        Some(s) => parse_date(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidDate(s.to_string())),
    }
}
