use crate::core::calculator::working_days::working_days_in;
use crate::models::entry::Entry;
use crate::models::month_summary::MonthSummary;
use crate::models::settings::Settings;
use crate::models::year_month::YearMonth;

/// Fixed number of hours added on top of the working-day target.
pub const NOMINAL_OFFSET_HOURS: f64 = 10.0;
pub const HOURS_PER_WORKING_DAY: f64 = 8.0;
pub const OVERTIME_MULTIPLIER: f64 = 1.5;

/// Monthly hour target: 8h per working day plus the fixed offset.
pub fn nominal_hours(working_days: u32) -> f64 {
    working_days as f64 * HOURS_PER_WORKING_DAY + NOMINAL_OFFSET_HOURS
}

/// Payroll for `entries`, which must already be filtered to `month`.
pub fn calculate_month_summary(
    entries: &[Entry],
    month: YearMonth,
    settings: &Settings,
) -> MonthSummary {
    let total_hours: f64 = entries.iter().map(Entry::hours).sum();
    let total_bonus: f64 = entries.iter().map(|e| e.bonus).sum();

    summarize(total_hours, total_bonus, working_days_in(month), settings)
}

/// Split `total_hours` against the nominal target and derive the pay figures.
pub fn summarize(
    total_hours: f64,
    total_bonus: f64,
    working_days: u32,
    settings: &Settings,
) -> MonthSummary {
    let nominal = nominal_hours(working_days);
    let rate = settings.hourly_rate;

    let base_hours = total_hours.min(nominal);
    let overtime_hours = (total_hours - nominal).max(0.0);

    let base_pay = base_hours * rate;
    let overtime_pay = overtime_hours * rate * OVERTIME_MULTIPLIER;
    let payout = base_pay + overtime_pay + total_bonus - settings.on_account;

    MonthSummary {
        working_days,
        nominal_hours: nominal,
        total_hours,
        base_hours,
        overtime_hours,
        base_pay,
        overtime_pay,
        total_bonus,
        on_account: settings.on_account,
        payout,
    }
}
