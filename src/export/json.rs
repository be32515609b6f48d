use super::model::MonthExport;
use crate::errors::AppResult;
use std::path::Path;

/// Write the export document as pretty JSON.
pub fn write_json(path: &Path, doc: &MonthExport) -> AppResult<()> {
    let json = serde_json::to_string_pretty(doc)?;
    std::fs::write(path, json)?;
    Ok(())
}
