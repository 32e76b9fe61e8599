use crate::domain::entities::trading_record::TradingRecord;
use crate::domain::error::DomainError;

/// Source of raw trading rows. Implementations fail with `DomainError::File`
/// when the table cannot be read or lacks a required column.
pub trait TradingSource: Send + Sync {
    fn load(&self) -> Result<Vec<TradingRecord>, DomainError>;
}
