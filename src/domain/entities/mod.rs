pub mod regression_report;
pub mod regression_row;
pub mod trading_record;
