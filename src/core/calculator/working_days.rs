use crate::models::year_month::YearMonth;
use chrono::{Datelike, NaiveDate, Weekday};

/// Number of Monday–Friday days in a month.
///
/// `month0` is zero-based (January = 0). An index outside 0..=11 has no days.
pub fn working_days(year: i32, month0: u32) -> u32 {
    let Some(mut d) = month0
        .checked_add(1)
        .and_then(|m| NaiveDate::from_ymd_opt(year, m, 1))
    else {
        return 0;
    };

    let mut count = 0;
    while d.month0() == month0 {
        if !matches!(d.weekday(), Weekday::Sat | Weekday::Sun) {
            count += 1;
        }
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    count
}

pub fn working_days_in(month: YearMonth) -> u32 {
    working_days(month.year(), month.month0())
}
