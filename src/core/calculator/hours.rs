use chrono::{NaiveTime, Timelike};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Elapsed minutes from `start` to `end`.
/// An `end` earlier than `start` is taken as the next day.
pub fn elapsed_minutes(start: NaiveTime, end: NaiveTime) -> i64 {
    let start_m = minutes_of_day(start);
    let mut end_m = minutes_of_day(end);

    if end_m < start_m {
        end_m += MINUTES_PER_DAY;
    }

    end_m - start_m
}

/// Elapsed hours as a decimal rounded to 2 places.
pub fn calculate_hours(start: NaiveTime, end: NaiveTime) -> f64 {
    round2(elapsed_minutes(start, end) as f64 / 60.0)
}

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn minutes_of_day(t: NaiveTime) -> i64 {
    (t.hour() * 60 + t.minute()) as i64
}
