//! Formatting utilities used for CLI and export outputs.

use crate::models::year_month::YearMonth;
use chrono::{Locale, NaiveDate};

pub const CURRENCY: &str = "PLN";

/// Amounts and hours are always shown with 2 decimals.
pub fn fixed2(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn money(v: f64) -> String {
    format!("{:.2} {}", v, CURRENCY)
}

pub fn hours(v: f64) -> String {
    format!("{:.2} h", v)
}

/// Resolve a locale name from the config ("pl_PL", "en-US", ...).
/// Unknown names fall back to Polish, the default display language.
pub fn resolve_locale(name: &str) -> Locale {
    match name.trim().replace('-', "_").as_str() {
        "en_US" => Locale::en_US,
        "en_GB" => Locale::en_GB,
        "it_IT" => Locale::it_IT,
        "de_DE" => Locale::de_DE,
        "fr_FR" => Locale::fr_FR,
        "es_ES" => Locale::es_ES,
        _ => Locale::pl_PL,
    }
}

// chrono's "%B" gives the genitive in Polish ("stycznia"); a month
// heading needs the nominative.
const PL_MONTHS: [&str; 12] = [
    "styczeń",
    "luty",
    "marzec",
    "kwiecień",
    "maj",
    "czerwiec",
    "lipiec",
    "sierpień",
    "wrzesień",
    "październik",
    "listopad",
    "grudzień",
];

/// "styczeń 2024" style label for a month.
pub fn month_label(month: YearMonth, locale: Locale) -> String {
    if matches!(locale, Locale::pl_PL) {
        return format!("{} {}", PL_MONTHS[month.month0() as usize], month.year());
    }

    month
        .first_day()
        .format_localized("%B %Y", locale)
        .to_string()
}

/// Short weekday plus day of month, e.g. "pon 5".
pub fn day_label(date: NaiveDate, locale: Locale) -> String {
    date.format_localized("%a %-d", locale).to_string()
}
