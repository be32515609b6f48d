pub mod hours;
pub mod payroll;
pub mod working_days;
