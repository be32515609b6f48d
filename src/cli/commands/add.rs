use super::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, EntryDefaults, EntryInput};
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::formatting::fixed2;

/// Add a work entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        note,
        bonus,
    } = cmd
    {
        let input = EntryInput {
            date: date.clone(),
            start: start.clone(),
            end: end.clone(),
            note: note.clone(),
            bonus: bonus.clone(),
        };
        let defaults = EntryDefaults::for_input(cfg, &input)?;

        let (mut store, mut tracker) = open_tracker(cfg)?;
        let entry = AddLogic::apply(&mut tracker, &mut store, &input, &defaults)?;

        success(format!(
            "Added entry #{} on {}: {} - {} ({} h)",
            entry.id,
            entry.date_str(),
            entry.start_str(),
            entry.end_str(),
            fixed2(entry.hours())
        ));
    }

    Ok(())
}
