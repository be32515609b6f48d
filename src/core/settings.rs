use crate::db::store::KeyValueStore;
use crate::errors::AppResult;
use crate::models::settings::Settings;
use crate::models::tracker::Tracker;
use crate::utils::number::parse_amount;

pub struct SettingsLogic;

impl SettingsLogic {
    /// Update the rate and/or the on-account amount. Invalid numbers count
    /// as 0, values not given are left unchanged.
    pub fn apply<S: KeyValueStore + ?Sized>(
        tracker: &mut Tracker,
        store: &mut S,
        rate: Option<&str>,
        on_account: Option<&str>,
    ) -> AppResult<Settings> {
        if rate.is_some() {
            tracker.settings.hourly_rate = parse_amount(rate);
        }
        if on_account.is_some() {
            tracker.settings.on_account = parse_amount(on_account);
        }

        tracker.save_settings(store)?;
        Ok(tracker.settings)
    }
}
