use super::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::EntryInput;
use crate::core::edit::EditLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::formatting::fixed2;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
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

        let (mut store, mut tracker) = open_tracker(cfg)?;
        let entry = EditLogic::apply(&mut tracker, &mut store, *id, &input)?;

        success(format!(
            "Entry #{} updated: {} {} - {} ({} h)",
            entry.id,
            entry.date_str(),
            entry.start_str(),
            entry.end_str(),
            fixed2(entry.hours())
        ));
    }

    Ok(())
}
