pub mod in_memory;
pub mod trading_csv;
