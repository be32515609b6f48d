use serde::Serialize;

/// Payroll figures for one month. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MonthSummary {
    pub working_days: u32,
    pub nominal_hours: f64,
    pub total_hours: f64,
    pub base_hours: f64,
    pub overtime_hours: f64,
    pub base_pay: f64,
    pub overtime_pay: f64,
    pub total_bonus: f64,
    pub on_account: f64,
    pub payout: f64,
}

impl MonthSummary {
    /// Gross amount before the on-account advance is subtracted.
    pub fn total_pay(&self) -> f64 {
        self.base_pay + self.overtime_pay + self.total_bonus
    }
}
