use crate::domain::entities::regression_row::{DropReason, DroppedRow, JoinOutcome, RegressionRow};
use crate::domain::entities::trading_record::TradingRecord;
use crate::domain::values::mention_counts::MentionCounts;
use crate::domain::values::percentage::parse_percentage;
use tracing::{info, warn};

/// Attach mention counts to trading rows by currency, parse `Change %`, and
/// drop every row missing either value.
///
/// A malformed percentage is treated the same as a missing mention count: the
/// row is dropped and recorded in `JoinOutcome::dropped`.
pub fn join_mentions(records: &[TradingRecord], mentions: &MentionCounts) -> JoinOutcome {
    let mut outcome = JoinOutcome::default();

    for record in records {
        let count = mentions.get(&record.currency).copied().flatten();
        let change = parse_percentage(&record.change_pct).ok();

        match (count, change) {
            (Some(mentions), Some(change)) => outcome.rows.push(RegressionRow {
                date: record.date,
                currency: record.currency.clone(),
                mentions,
                change,
            }),
            (count, change) => {
                let mut reasons = Vec::new();
                if count.is_none() {
                    reasons.push(DropReason::MissingMentions);
                }
                if change.is_none() {
                    reasons.push(DropReason::UnparseableChange);
                }
                warn!(
                    currency = %record.currency,
                    date = %record.date,
                    "Dropping row: {}",
                    reasons.iter().map(|r| r.to_string()).collect::<Vec<_>>().join(", ")
                );
                outcome.dropped.push(DroppedRow {
                    date: record.date,
                    currency: record.currency.clone(),
                    reasons,
                });
            }
        }
    }

    info!(
        kept = outcome.rows.len(),
        dropped = outcome.dropped.len(),
        "Joined mentions with trading data"
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(currency: &str, change: &str) -> TradingRecord {
        TradingRecord::new(NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(), currency, change)
    }

    #[test]
    fn test_keeps_complete_rows() {
        let mentions = MentionCounts::from([("Bitcoin".to_string(), Some(100))]);
        let outcome = join_mentions(&[record("Bitcoin", "10%")], &mentions);
        assert_eq!(outcome.rows.len(), 1);
        assert_eq!(outcome.rows[0].mentions, 100);
        assert_eq!(outcome.rows[0].change, 10.0);
        assert!(outcome.dropped.is_empty());
    }

    #[test]
    fn test_drop_reasons() {
        let mentions = MentionCounts::from([
            ("Bitcoin".to_string(), Some(100)),
            ("Ethereum".to_string(), None),
        ]);
        let records = [
            record("Ethereum", "-5%"),
            record("Bitcoin", "n/a"),
            record("Dogecoin", "oops"),
        ];
        let outcome = join_mentions(&records, &mentions);
        assert!(outcome.rows.is_empty());
        assert_eq!(outcome.dropped[0].reasons, vec![DropReason::MissingMentions]);
        assert_eq!(outcome.dropped[1].reasons, vec![DropReason::UnparseableChange]);
        assert_eq!(
            outcome.dropped[2].reasons,
            vec![DropReason::MissingMentions, DropReason::UnparseableChange]
        );
    }

    #[test]
    fn test_zero_mentions_is_not_missing() {
        let mentions = MentionCounts::from([("XRP".to_string(), Some(0))]);
        let outcome = join_mentions(&[record("XRP", "0%")], &mentions);
        assert_eq!(outcome.rows.len(), 1);
        assert_eq!(outcome.rows[0].mentions, 0);
    }
}
