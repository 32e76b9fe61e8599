use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the price-change table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingRecord {
    pub date: NaiveDate,
    pub currency: String,
    /// Raw `Change %` cell, e.g. `"-3.2%"`.
    pub change_pct: String,
    /// Remaining columns in file order (price, open, high, ...).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<(String, String)>,
}

impl TradingRecord {
    pub fn new(date: NaiveDate, currency: impl Into<String>, change_pct: impl Into<String>) -> Self {
        Self {
            date,
            currency: currency.into(),
            change_pct: change_pct.into(),
            extra: Vec::new(),
        }
    }

    pub fn field(&self, column: &str) -> Option<&str> {
        self.extra
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }
}
