use super::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::settings::SettingsLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::formatting::money;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings { rate, on_account } = cmd {
        let (mut store, mut tracker) = open_tracker(cfg)?;

        let settings = if rate.is_some() || on_account.is_some() {
            let s = SettingsLogic::apply(
                &mut tracker,
                &mut store,
                rate.as_deref(),
                on_account.as_deref(),
            )?;
            success("Settings saved.");
            s
        } else {
            tracker.settings
        };

        println!("Hourly rate: {}", money(settings.hourly_rate));
        println!("On account:  {}", money(settings.on_account));
    }

    Ok(())
}
