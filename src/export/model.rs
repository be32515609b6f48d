use crate::models::entry::Entry;
use crate::models::month_summary::MonthSummary;
use serde::Serialize;

/// Flat export row for one entry, hours included.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub id: i64,
    pub date: String,
    pub start: String,
    pub end: String,
    pub hours: f64,
    pub note: String,
    pub bonus: f64,
}

impl From<&Entry> for EntryExport {
    fn from(e: &Entry) -> Self {
        Self {
            id: e.id,
            date: e.date_str(),
            start: e.start_str(),
            end: e.end_str(),
            hours: e.hours(),
            note: e.note.clone(),
            bonus: e.bonus,
        }
    }
}

/// JSON document for a month export.
#[derive(Serialize, Debug)]
pub struct MonthExport {
    pub month: Option<String>,
    pub entries: Vec<EntryExport>,
    pub summary: Option<MonthSummary>,
}

pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["id", "date", "start", "end", "hours", "note", "bonus"]
}
