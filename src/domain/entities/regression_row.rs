use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// A cleaned row: both regression fields are present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegressionRow {
    pub date: NaiveDate,
    pub currency: String,
    pub mentions: u64,
    pub change: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    MissingMentions,
    UnparseableChange,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::MissingMentions => write!(f, "missing mentions"),
            DropReason::UnparseableChange => write!(f, "unparseable change"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DroppedRow {
    pub date: NaiveDate,
    pub currency: String,
    pub reasons: Vec<DropReason>,
}

/// Output of the join: rows kept for the regression and rows removed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JoinOutcome {
    pub rows: Vec<RegressionRow>,
    pub dropped: Vec<DroppedRow>,
}

impl JoinOutcome {
    pub fn mentions(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.mentions as f64).collect()
    }

    pub fn changes(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.change).collect()
    }
}
