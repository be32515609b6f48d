pub mod entry;
pub mod month_summary;
pub mod settings;
pub mod tracker;
pub mod year_month;
