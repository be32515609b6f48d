use super::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{ask_confirmation, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let (mut store, mut tracker) = open_tracker(cfg)?;

        let entry = tracker.find(*id).ok_or(AppError::EntryNotFound(*id))?;
        let prompt = format!(
            "Delete entry #{} ({} {} - {})?",
            entry.id,
            entry.date_str(),
            entry.start_str(),
            entry.end_str()
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = DeleteLogic::apply(&mut tracker, &mut store, *id)?;
        success(format!("Entry #{} has been deleted.", removed.id));
    }

    Ok(())
}
