pub mod mention_transport;
pub mod pacer;
pub mod trading_source;
