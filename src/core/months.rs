//! Month bookkeeping: which months can be shown and which one is selected.

use crate::db::store::KeyValueStore;
use crate::errors::AppResult;
use crate::models::entry::Entry;
use crate::models::tracker::Tracker;
use crate::models::year_month::YearMonth;
use std::collections::BTreeSet;

/// Distinct months of all entries plus `current`, newest first.
pub fn available_months(entries: &[Entry], current: YearMonth) -> Vec<YearMonth> {
    let mut set: BTreeSet<YearMonth> = entries.iter().map(Entry::year_month).collect();
    set.insert(current);
    set.into_iter().rev().collect()
}

/// Keep `stored` if it is still available, otherwise fall back to the
/// newest available month.
pub fn resolve_selected(
    stored: Option<YearMonth>,
    available: &[YearMonth],
    current: YearMonth,
) -> YearMonth {
    match stored {
        Some(m) if available.contains(&m) => m,
        _ => available.first().copied().unwrap_or(current),
    }
}

pub struct MonthLogic;

impl MonthLogic {
    /// Re-resolve the selected month against the entry list and persist it.
    pub fn refresh<S: KeyValueStore + ?Sized>(
        tracker: &mut Tracker,
        store: &mut S,
        current: YearMonth,
    ) -> AppResult<YearMonth> {
        let available = available_months(&tracker.entries, current);
        let stored = tracker.selected_month.or(Some(current));
        let selected = resolve_selected(stored, &available, current);

        tracker.selected_month = Some(selected);
        tracker.save_selected_month(store)?;
        Ok(selected)
    }

    /// Explicitly select a month, with or without entries.
    pub fn select<S: KeyValueStore + ?Sized>(
        tracker: &mut Tracker,
        store: &mut S,
        month: YearMonth,
    ) -> AppResult<()> {
        tracker.selected_month = Some(month);
        tracker.save_selected_month(store)
    }

    /// Month to display: the explicit one if given (and remembered),
    /// otherwise the resolved selection.
    pub fn pick<S: KeyValueStore + ?Sized>(
        tracker: &mut Tracker,
        store: &mut S,
        explicit: Option<YearMonth>,
        current: YearMonth,
    ) -> AppResult<YearMonth> {
        match explicit {
            Some(m) => {
                Self::select(tracker, store, m)?;
                Ok(m)
            }
            None => Self::refresh(tracker, store, current),
        }
    }
}
