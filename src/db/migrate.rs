use crate::errors::AppResult;
use log::info;
use rusqlite::{Connection, OptionalExtension, Result};

/// Check if a table exists in the current database.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the key-value table that mirrors the browser storage layout:
/// one string value per key, composite values JSON-encoded.
fn create_kv_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        "#,
    )?;
    Ok(())
}

/// Bring the schema up to date. Safe to call on every start.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    if !table_exists(conn, "kv")? {
        info!("creating kv table");
        create_kv_table(conn)?;
    }
    Ok(())
}
