use crate::utils::number::parse_amount;
use serde::Serialize;

/// Pay settings shared by every month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Settings {
    pub hourly_rate: f64,
    pub on_account: f64,
}

impl Settings {
    pub fn new(hourly_rate: f64, on_account: f64) -> Self {
        Self {
            hourly_rate,
            on_account,
        }
    }

    /// Build settings from raw stored strings; anything unparsable is 0.
    pub fn from_raw(rate: Option<&str>, on_account: Option<&str>) -> Self {
        Self {
            hourly_rate: parse_amount(rate),
            on_account: parse_amount(on_account),
        }
    }
}
