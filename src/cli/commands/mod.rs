pub mod add;
pub mod backup;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod months;
pub mod settings;
pub mod summary;

use crate::config::Config;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::models::tracker::Tracker;
use crate::models::year_month::YearMonth;

/// Open the configured database and load the tracker state from it.
pub(crate) fn open_tracker(cfg: &Config) -> AppResult<(SqliteStore, Tracker)> {
    let store = SqliteStore::open(&cfg.database)?;
    let tracker = Tracker::load(&store)?;
    Ok((store, tracker))
}

pub(crate) fn parse_month_arg(month: &Option<String>) -> AppResult<Option<YearMonth>> {
    month.as_deref().map(str::parse::<YearMonth>).transpose()
}
