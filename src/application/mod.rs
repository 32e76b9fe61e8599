pub mod fetch_mentions;
pub mod join_data;
pub mod load_trading;
pub mod regression;
