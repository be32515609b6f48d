use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and its key-value table
pub fn handle(cli: &Cli) -> AppResult<()> {
    info("Initializing rWorkHours…");

    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    // opening the store runs the schema migrations
    SqliteStore::open(&cfg.database)?;

    success(format!("Database initialized at {}", cfg.database));
    Ok(())
}
