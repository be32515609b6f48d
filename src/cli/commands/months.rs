use super::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::months::{MonthLogic, available_months};
use crate::errors::AppResult;
use crate::models::year_month::YearMonth;
use crate::ui::messages::success;
use crate::utils::formatting::{month_label, resolve_locale};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Months { select } = cmd {
        let (mut store, mut tracker) = open_tracker(cfg)?;
        let current = YearMonth::current();

        if let Some(raw) = select {
            let month: YearMonth = raw.parse()?;
            MonthLogic::select(&mut tracker, &mut store, month)?;
            success(format!("Selected month: {}", month));
            return Ok(());
        }

        let selected = MonthLogic::refresh(&mut tracker, &mut store, current)?;
        let locale = resolve_locale(&cfg.locale);

        for m in available_months(&tracker.entries, current) {
            let marker = if m == selected { "*" } else { " " };
            println!("{} {}  {}", marker, m, month_label(m, locale));
        }
    }

    Ok(())
}
