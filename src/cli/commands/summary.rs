use super::{open_tracker, parse_month_arg};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::months::MonthLogic;
use crate::errors::AppResult;
use crate::models::year_month::YearMonth;
use crate::ui::messages::header;
use crate::ui::month_view::{render_nominal, render_summary, render_title};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { month, json } = cmd {
        let explicit = parse_month_arg(month)?;
        let (mut store, mut tracker) = open_tracker(cfg)?;

        let month = MonthLogic::pick(&mut tracker, &mut store, explicit, YearMonth::current())?;
        let entries = tracker.month_entries(month);
        let summary = tracker.month_summary(month);

        if *json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
            return Ok(());
        }

        header(render_title(month, cfg));
        println!("{}", render_nominal(&summary));
        println!("{}", render_summary(&summary, &entries));
    }

    Ok(())
}
