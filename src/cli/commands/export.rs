use super::{open_tracker, parse_month_arg};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::months::MonthLogic;
use crate::errors::AppResult;
use crate::export::{ExportLogic, notify_export_success};
use crate::models::year_month::YearMonth;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        month,
        all,
        force,
    } = cmd
    {
        let explicit = parse_month_arg(month)?;
        let (mut store, mut tracker) = open_tracker(cfg)?;

        let month = if *all {
            None
        } else {
            Some(MonthLogic::pick(
                &mut tracker,
                &mut store,
                explicit,
                YearMonth::current(),
            )?)
        };

        let path = ExportLogic::export(&tracker, format, file, month, *force)?;
        notify_export_success(&format.as_str().to_uppercase(), &path);
    }

    Ok(())
}
