use super::{open_tracker, parse_month_arg};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::months::MonthLogic;
use crate::errors::AppResult;
use crate::models::year_month::YearMonth;
use crate::ui::messages::{header, info};
use crate::ui::month_view::{render_entries, render_nominal, render_summary, render_title};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { month } = cmd {
        let explicit = parse_month_arg(month)?;
        let (mut store, mut tracker) = open_tracker(cfg)?;

        let month = MonthLogic::pick(&mut tracker, &mut store, explicit, YearMonth::current())?;
        let entries = tracker.month_entries(month);
        let summary = tracker.month_summary(month);

        header(render_title(month, cfg));

        if entries.is_empty() {
            info(format!("No entries for {}.", month));
        } else {
            print!("{}", render_entries(&entries, cfg));
        }

        println!();
        println!("{}", render_nominal(&summary));
        println!("{}", render_summary(&summary, &entries));
    }

    Ok(())
}
