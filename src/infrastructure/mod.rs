pub mod http;
pub mod pacing;
pub mod tables;
