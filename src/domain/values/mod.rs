pub mod date_range;
pub mod mention_counts;
pub mod percentage;
