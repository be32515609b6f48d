//! Explicit tracker state: the flat entry list, the pay settings and the
//! month currently on display. Loaded from a key-value store at the start of
//! each command and written back key by key.

use crate::core::calculator::payroll::calculate_month_summary;
use crate::db::store::{
    KEY_ENTRIES, KEY_HOURLY_RATE, KEY_ON_ACCOUNT, KEY_SELECTED_MONTH, KeyValueStore,
};
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::models::month_summary::MonthSummary;
use crate::models::settings::Settings;
use crate::models::year_month::YearMonth;
use log::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct Tracker {
    pub entries: Vec<Entry>,
    pub settings: Settings,
    pub selected_month: Option<YearMonth>,
}

impl Tracker {
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> AppResult<Self> {
        let entries = match store.get(KEY_ENTRIES)? {
            Some(raw) if !raw.trim().is_empty() => {
                serde_json::from_str::<Vec<Entry>>(&raw).map_err(|e| AppError::Storage {
                    key: KEY_ENTRIES.to_string(),
                    reason: e.to_string(),
                })?
            }
            _ => Vec::new(),
        };

        let rate = store.get(KEY_HOURLY_RATE)?;
        let on_account = store.get(KEY_ON_ACCOUNT)?;
        let settings = Settings::from_raw(rate.as_deref(), on_account.as_deref());

        let selected_month = match store.get(KEY_SELECTED_MONTH)? {
            Some(raw) => match raw.parse::<YearMonth>() {
                Ok(ym) => Some(ym),
                Err(_) => {
                    warn!("ignoring stored selectedMonth {:?}", raw);
                    None
                }
            },
            None => None,
        };

        debug!(
            "loaded {} entries, rate={}, on_account={}, selected={:?}",
            entries.len(),
            settings.hourly_rate,
            settings.on_account,
            selected_month
        );

        Ok(Self {
            entries,
            settings,
            selected_month,
        })
    }

    pub fn save_entries<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> AppResult<()> {
        let records: Vec<_> = self.entries.iter().map(Entry::to_record).collect();
        let json = serde_json::to_string(&records)?;
        store.set(KEY_ENTRIES, &json)?;
        debug!("saved {} entries", self.entries.len());
        Ok(())
    }

    pub fn save_settings<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> AppResult<()> {
        store.set(KEY_HOURLY_RATE, &self.settings.hourly_rate.to_string())?;
        store.set(KEY_ON_ACCOUNT, &self.settings.on_account.to_string())?;
        Ok(())
    }

    pub fn save_selected_month<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> AppResult<()> {
        if let Some(ym) = self.selected_month {
            store.set(KEY_SELECTED_MONTH, &ym.to_string())?;
        }
        Ok(())
    }

    pub fn find(&self, id: i64) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries of one month, sorted by date then start time.
    pub fn month_entries(&self, month: YearMonth) -> Vec<Entry> {
        let mut out: Vec<Entry> = self
            .entries
            .iter()
            .filter(|e| month.contains(e.date))
            .cloned()
            .collect();
        out.sort_by_key(|e| (e.date, e.start));
        out
    }

    pub fn month_summary(&self, month: YearMonth) -> MonthSummary {
        calculate_month_summary(&self.month_entries(month), month, &self.settings)
    }
}
