use crate::domain::entities::trading_record::TradingRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::trading_source::TradingSource;

/// Fixed rows, useful when the table is already in memory.
pub struct InMemoryTradingSource {
    records: Vec<TradingRecord>,
}

impl InMemoryTradingSource {
    pub fn new(records: Vec<TradingRecord>) -> Self {
        Self { records }
    }
}

impl TradingSource for InMemoryTradingSource {
    fn load(&self) -> Result<Vec<TradingRecord>, DomainError> {
        Ok(self.records.clone())
    }
}
