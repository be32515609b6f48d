use crate::core::add::EntryInput;
use crate::core::months::MonthLogic;
use crate::db::store::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::models::tracker::Tracker;
use crate::utils::date::parse_date_field;
use crate::utils::number::parse_non_negative;
use crate::utils::time::parse_time_field;
use log::debug;

pub struct EditLogic;

impl EditLogic {
    /// Update the given fields of entry `id`. Hours follow from the new
    /// start/end automatically. The selected month moves to the entry's month.
    pub fn apply<S: KeyValueStore + ?Sized>(
        tracker: &mut Tracker,
        store: &mut S,
        id: i64,
        input: &EntryInput,
    ) -> AppResult<Entry> {
        // validate everything before touching the entry
        let date = parse_date_field(input.date.as_deref())?;
        let start = parse_time_field(input.start.as_deref(), "start")?;
        let end = parse_time_field(input.end.as_deref(), "end")?;

        let entry = tracker
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(AppError::EntryNotFound(id))?;

        if let Some(d) = date {
            entry.date = d;
        }
        if let Some(s) = start {
            entry.start = s;
        }
        if let Some(e) = end {
            entry.end = e;
        }
        if let Some(n) = &input.note {
            entry.note = n.clone();
        }
        if input.bonus.is_some() {
            entry.bonus = parse_non_negative(input.bonus.as_deref());
        }

        let updated = entry.clone();
        debug!("updated entry {:?}", updated);

        tracker.save_entries(store)?;
        MonthLogic::select(tracker, store, updated.year_month())?;

        Ok(updated)
    }
}
