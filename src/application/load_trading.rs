use crate::domain::entities::trading_record::TradingRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::trading_source::TradingSource;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;

pub struct LoadTradingUseCase {
    source: Arc<dyn TradingSource>,
}

impl LoadTradingUseCase {
    pub fn new(source: Arc<dyn TradingSource>) -> Self {
        Self { source }
    }

    /// Load the table and keep rows dated on or after `cutoff`.
    pub fn execute(&self, cutoff: NaiveDate) -> Result<Vec<TradingRecord>, DomainError> {
        let records = self.source.load()?;
        let total = records.len();
        let kept = filter_since(records, cutoff);
        info!(total, kept = kept.len(), %cutoff, "Loaded trading data");
        Ok(kept)
    }
}

pub fn filter_since(records: Vec<TradingRecord>, cutoff: NaiveDate) -> Vec<TradingRecord> {
    records.into_iter().filter(|r| r.date >= cutoff).collect()
}
