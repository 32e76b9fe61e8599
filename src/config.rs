//! Run configuration: built-in defaults, overridden by `CRYPTOBUZZ_*`
//! environment variables, overridden again by CLI flags in `main.rs`.

use crate::application::regression::MIN_OBSERVATIONS;
use crate::domain::error::DomainError;
use crate::domain::values::date_range::{parse_date, DateRange};
use chrono::NaiveDate;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.pushshift.io/reddit/search/submission/";
pub const DEFAULT_SUBREDDIT: &str = "wallstreetbets";
pub const DEFAULT_DATA_FILE: &str = "crypto_data.csv";
pub const DEFAULT_ASSETS: [&str; 10] = [
    "Bitcoin",
    "Ethereum",
    "Tether",
    "BNB",
    "Binance USD",
    "XRP",
    "Dogecoin",
    "Cardano",
    "Polygon",
    "Polkadot",
];
pub const MIN_REGRESSION_ROWS: usize = MIN_OBSERVATIONS;

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub base_url: String,
    pub subreddit: String,
    /// Delay after every request, successful or not.
    pub pause: Duration,
    pub timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            subreddit: DEFAULT_SUBREDDIT.to_string(),
            pause: Duration::from_secs(1),
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub data_file: PathBuf,
    /// Trading rows dated before this are ignored.
    pub cutoff: NaiveDate,
    pub window: DateRange,
    pub assets: Vec<String>,
    pub min_rows: usize,
    pub fetch: FetchSettings,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        let window = DateRange::parse("2021-01-01", "2021-12-31").expect("default window is valid");
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            cutoff: window.start(),
            window,
            assets: DEFAULT_ASSETS.iter().map(|a| a.to_string()).collect(),
            min_rows: MIN_REGRESSION_ROWS,
            fetch: FetchSettings::default(),
        }
    }
}

impl AnalysisConfig {
    /// Defaults with any `CRYPTOBUZZ_*` environment overrides applied.
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("CRYPTOBUZZ_DATA_FILE") {
            config.data_file = PathBuf::from(path);
        }
        if let Some(cutoff) = lookup("CRYPTOBUZZ_CUTOFF") {
            config.cutoff = parse_date(&cutoff).map_err(DomainError::InvalidInput)?;
        }
        let from = lookup("CRYPTOBUZZ_FROM");
        let to = lookup("CRYPTOBUZZ_TO");
        if from.is_some() || to.is_some() {
            config.set_window(from.as_deref(), to.as_deref())?;
        }
        if let Some(assets) = lookup("CRYPTOBUZZ_ASSETS") {
            config.assets = split_assets(&assets);
        }
        if let Some(min_rows) = lookup("CRYPTOBUZZ_MIN_ROWS") {
            config.min_rows = parse_number(&min_rows, "CRYPTOBUZZ_MIN_ROWS")? as usize;
        }
        if let Some(url) = lookup("CRYPTOBUZZ_BASE_URL") {
            config.fetch.base_url = url;
        }
        if let Some(subreddit) = lookup("CRYPTOBUZZ_SUBREDDIT") {
            config.fetch.subreddit = subreddit;
        }
        if let Some(ms) = lookup("CRYPTOBUZZ_PAUSE_MS") {
            config.fetch.pause = Duration::from_millis(parse_number(&ms, "CRYPTOBUZZ_PAUSE_MS")?);
        }
        if let Some(secs) = lookup("CRYPTOBUZZ_TIMEOUT_SECS") {
            config.fetch.timeout =
                Duration::from_secs(parse_number(&secs, "CRYPTOBUZZ_TIMEOUT_SECS")?);
        }

        config.validate()?;
        Ok(config)
    }

    /// Replace either end of the mention window, keeping the other.
    pub fn set_window(&mut self, from: Option<&str>, to: Option<&str>) -> Result<(), DomainError> {
        let start = match from {
            Some(s) => parse_date(s).map_err(DomainError::InvalidInput)?,
            None => self.window.start(),
        };
        let end = match to {
            Some(s) => parse_date(s).map_err(DomainError::InvalidInput)?,
            None => self.window.end(),
        };
        self.window = DateRange::new(start, end).map_err(DomainError::InvalidInput)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.assets.is_empty() {
            return Err(DomainError::InvalidInput("Asset list is empty".into()));
        }
        if self.min_rows < MIN_REGRESSION_ROWS {
            return Err(DomainError::InvalidInput(format!(
                "Minimum regression rows must be at least {MIN_REGRESSION_ROWS}, got {}",
                self.min_rows
            )));
        }
        if self.fetch.base_url.trim().is_empty() {
            return Err(DomainError::InvalidInput("Base URL is empty".into()));
        }
        Ok(())
    }
}

/// Comma-separated asset list; blanks are dropped.
pub fn split_assets(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(From::from)
        .collect()
}

fn parse_number(s: &str, key: &str) -> Result<u64, DomainError> {
    s.trim()
        .parse()
        .map_err(|_| DomainError::InvalidInput(format!("{key} must be a non-negative integer, got {s:?}")))
}
