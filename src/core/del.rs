use crate::core::months::MonthLogic;
use crate::db::store::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::models::tracker::Tracker;
use crate::models::year_month::YearMonth;
use log::debug;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove entry `id` and return it. Confirmation is the caller's job.
    pub fn apply<S: KeyValueStore + ?Sized>(
        tracker: &mut Tracker,
        store: &mut S,
        id: i64,
    ) -> AppResult<Entry> {
        let idx = tracker
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(AppError::EntryNotFound(id))?;

        let removed = tracker.entries.remove(idx);
        debug!("deleted entry {:?}", removed);

        tracker.save_entries(store)?;
        MonthLogic::refresh(tracker, store, YearMonth::current())?;

        Ok(removed)
    }
}
