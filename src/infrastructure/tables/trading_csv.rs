use crate::domain::entities::trading_record::TradingRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::trading_source::TradingSource;
use crate::domain::values::date_range::parse_date;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

pub const DATE_COLUMN: &str = "Date";
pub const CURRENCY_COLUMN: &str = "Currency";
pub const CHANGE_COLUMN: &str = "Change %";

/// Trading table stored as a comma-separated file with a header row.
pub struct CsvTradingSource {
    path: PathBuf,
}

impl CsvTradingSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TradingSource for CsvTradingSource {
    fn load(&self) -> Result<Vec<TradingRecord>, DomainError> {
        let file = File::open(&self.path)
            .map_err(|e| DomainError::File(format!("Failed to open {}: {e}", self.path.display())))?;
        read_trading_csv(file)
            .map_err(|e| match e {
                DomainError::File(msg) => DomainError::File(format!("{}: {msg}", self.path.display())),
                other => other,
            })
    }
}

struct Columns {
    date: usize,
    currency: usize,
    change: usize,
}

fn locate_columns(headers: &StringRecord) -> Result<Columns, DomainError> {
    let find = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
            .ok_or_else(|| DomainError::File(format!("missing required column {name:?}")))
    };
    Ok(Columns {
        date: find(DATE_COLUMN)?,
        currency: find(CURRENCY_COLUMN)?,
        change: find(CHANGE_COLUMN)?,
    })
}

/// Read every row of a trading table. Columns other than the three required
/// ones are kept verbatim in `TradingRecord::extra`.
pub fn read_trading_csv<R: Read>(reader: R) -> Result<Vec<TradingRecord>, DomainError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| DomainError::File(format!("unreadable header: {e}")))?
        .clone();
    let columns = locate_columns(&headers)?;

    let mut records = Vec::new();
    for (i, result) in reader.records().enumerate() {
        // Header is line 1.
        let line = i + 2;
        let row = result.map_err(|e| DomainError::File(format!("line {line}: {e}")))?;
        let cell = |idx: usize| row.get(idx).unwrap_or("");

        let raw_date = cell(columns.date);
        let date = parse_date(raw_date).map_err(|_| {
            DomainError::File(format!(
                "line {line}, column {DATE_COLUMN:?}: invalid date {raw_date:?}, expected YYYY-MM-DD (e.g. 2021-12-31)"
            ))
        })?;

        let extra = headers
            .iter()
            .enumerate()
            .filter(|(idx, _)| ![columns.date, columns.currency, columns.change].contains(idx))
            .map(|(idx, name)| (name.to_string(), cell(idx).to_string()))
            .collect();

        records.push(TradingRecord {
            date,
            currency: cell(columns.currency).to_string(),
            change_pct: cell(columns.change).to_string(),
            extra,
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;

    const SAMPLE: &str = "\
Date,Currency,Price,Change %
2020-12-31,Bitcoin,29000,1.2%
2021-01-01,Bitcoin,29300,1.03%
2021-01-02,Ethereum,740,-2.5%
";

    #[test]
    fn test_reads_required_and_extra_columns() {
        let records = read_trading_csv(SAMPLE.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].date, NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
        assert_eq!(records[1].currency, "Bitcoin");
        assert_eq!(records[1].change_pct, "1.03%");
        assert_eq!(records[2].field("Price"), Some("740"));
        assert_eq!(records[2].extra.len(), 1);
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let csv = "Change %,Currency,Date\n5%,XRP,2021-04-01\n";
        let records = read_trading_csv(csv.as_bytes()).unwrap();
        assert_eq!(records[0].currency, "XRP");
        assert_eq!(records[0].change_pct, "5%");
    }

    #[test]
    fn test_missing_column_is_file_error() {
        let csv = "Date,Currency,Price\n2021-01-01,Bitcoin,1\n";
        let err = read_trading_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DomainError::File(ref msg) if msg.contains("Change %")));
    }

    #[test]
    fn test_bad_date_is_file_error_with_line() {
        let csv = "Date,Currency,Change %\nyesterday,Bitcoin,1%\n";
        let err = read_trading_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DomainError::File(ref msg) if msg.contains("line 2")));
    }

    #[test]
    fn test_non_iso_date_error_names_column_and_format() {
        let csv = "Date,Currency,Change %\n\"Dec 31, 2021\",Bitcoin,1%\n";
        let err = read_trading_csv(csv.as_bytes()).unwrap_err();
        let DomainError::File(msg) = err else {
            panic!("expected file error");
        };
        assert!(msg.contains("line 2"));
        assert!(msg.contains("column \"Date\""));
        assert!(msg.contains("\"Dec 31, 2021\""));
        assert!(msg.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_source_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prices.csv");
        let mut file = File::create(&path).unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let source = CsvTradingSource::new(&path);
        assert_eq!(source.load().unwrap().len(), 3);
    }

    #[test]
    fn test_missing_file_is_file_error() {
        let source = CsvTradingSource::new("/definitely/not/here.csv");
        assert!(matches!(source.load(), Err(DomainError::File(_))));
    }
}
