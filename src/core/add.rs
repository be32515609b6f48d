use crate::config::Config;
use crate::core::months::MonthLogic;
use crate::db::store::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::models::tracker::Tracker;
use crate::models::year_month::YearMonth;
use crate::utils::date::{parse_date_field, today};
use crate::utils::number::parse_non_negative;
use crate::utils::time::{default_end, parse_time, parse_time_field};
use chrono::{NaiveDate, NaiveTime};
use log::debug;

/// Raw form values as typed by the user. `None` means "not given".
#[derive(Debug, Default, Clone)]
pub struct EntryInput {
    pub date: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub note: Option<String>,
    pub bonus: Option<String>,
}

/// Values used for fields the user did not give.
#[derive(Debug, Clone, Copy)]
pub struct EntryDefaults {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl EntryDefaults {
    /// Today, the configured start time and the next half hour.
    pub fn now(cfg: &Config) -> AppResult<Self> {
        Ok(Self {
            date: today(),
            start: configured_start(cfg)?,
            end: default_end(),
        })
    }

    /// Like [`EntryDefaults::now`], but the configured start time is only
    /// read when the input does not give a start.
    pub fn for_input(cfg: &Config, input: &EntryInput) -> AppResult<Self> {
        if input.start.is_none() {
            return Self::now(cfg);
        }

        Ok(Self {
            date: today(),
            start: NaiveTime::MIN,
            end: default_end(),
        })
    }
}

fn configured_start(cfg: &Config) -> AppResult<NaiveTime> {
    parse_time(&cfg.default_start)
        .ok_or_else(|| AppError::Config(format!("invalid default_start '{}'", cfg.default_start)))
}

/// Unique id: current epoch milliseconds, bumped past the largest id in use.
pub fn next_id(entries: &[Entry], now_ms: i64) -> i64 {
    let max = entries.iter().map(|e| e.id).max().unwrap_or(0);
    if now_ms > max { now_ms } else { max + 1 }
}

pub struct AddLogic;

impl AddLogic {
    pub fn apply<S: KeyValueStore + ?Sized>(
        tracker: &mut Tracker,
        store: &mut S,
        input: &EntryInput,
        defaults: &EntryDefaults,
    ) -> AppResult<Entry> {
        let date = parse_date_field(input.date.as_deref())?.unwrap_or(defaults.date);
        let start = parse_time_field(input.start.as_deref(), "start")?.unwrap_or(defaults.start);
        let end = parse_time_field(input.end.as_deref(), "end")?.unwrap_or(defaults.end);
        let note = input.note.clone().unwrap_or_default();
        let bonus = parse_non_negative(input.bonus.as_deref());

        let id = next_id(&tracker.entries, chrono::Local::now().timestamp_millis());
        let entry = Entry::new(id, date, start, end, note, bonus);
        debug!("adding entry {:?}", entry);

        tracker.entries.push(entry.clone());
        tracker.save_entries(store)?;

        // a new month may have appeared
        MonthLogic::refresh(tracker, store, YearMonth::current())?;

        Ok(entry)
    }
}
