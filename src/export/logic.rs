use super::ExportFormat;
use super::csv::write_csv;
use super::fs_utils::ensure_writable;
use super::json::write_json;
use super::model::{EntryExport, MonthExport};
use crate::errors::AppResult;
use crate::models::tracker::Tracker;
use crate::models::year_month::YearMonth;
use log::debug;
use std::path::{Path, PathBuf};

pub struct ExportLogic;

impl ExportLogic {
    /// Export the entries of `month` (or every entry when `month` is None).
    /// JSON exports of a single month also carry its payroll summary.
    pub fn export(
        tracker: &Tracker,
        format: &ExportFormat,
        file: &str,
        month: Option<YearMonth>,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = Path::new(file).to_path_buf();
        ensure_writable(&path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let entries = match month {
            Some(m) => tracker.month_entries(m),
            None => {
                let mut all = tracker.entries.clone();
                all.sort_by_key(|e| (e.date, e.start));
                all
            }
        };
        let rows: Vec<EntryExport> = entries.iter().map(EntryExport::from).collect();
        debug!("exporting {} rows as {}", rows.len(), format.as_str());

        match format {
            ExportFormat::Csv => write_csv(&path, &rows)?,
            ExportFormat::Json => {
                let doc = MonthExport {
                    month: month.map(|m| m.to_string()),
                    entries: rows,
                    summary: month.map(|m| tracker.month_summary(m)),
                };
                write_json(&path, &doc)?;
            }
        }

        Ok(path)
    }
}
