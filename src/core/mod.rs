pub mod add;
pub mod backup;
pub mod calculator;
pub mod del;
pub mod edit;
pub mod months;
pub mod settings;
