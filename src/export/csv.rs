use super::model::{EntryExport, get_headers};
use crate::errors::AppResult;
use csv::Writer;
use std::path::Path;

/// Write entries to CSV, one row per entry.
pub fn write_csv(path: &Path, entries: &[EntryExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;

    for e in entries {
        wtr.write_record(&[
            e.id.to_string(),
            e.date.clone(),
            e.start.clone(),
            e.end.clone(),
            format!("{:.2}", e.hours),
            e.note.clone(),
            format!("{:.2}", e.bonus),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
