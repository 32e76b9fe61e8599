use crate::config::{split_assets, AnalysisConfig};
use crate::domain::error::DomainError;
use crate::domain::values::date_range::parse_date;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cryptobuzz",
    about = "Regress crypto price changes on forum mention counts"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full pipeline and print the regression summary
    Analyze {
        #[command(flatten)]
        table: TableArgs,
        #[command(flatten)]
        search: SearchArgs,
        /// Print the full analysis as JSON instead of the text summary
        #[arg(long)]
        json: bool,
    },
    /// Fetch mention counts only (null for failed lookups)
    Mentions {
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Load and filter the trading table only
    Load {
        #[command(flatten)]
        table: TableArgs,
    },
}

#[derive(Args, Debug, Default)]
pub struct TableArgs {
    /// Trading data CSV (columns Date, Currency, Change %)
    #[arg(long)]
    pub file: Option<String>,
    /// Ignore rows dated before this (YYYY-MM-DD)
    #[arg(long)]
    pub cutoff: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Start of the mention window (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,
    /// End of the mention window (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
    /// Comma-separated asset names
    #[arg(long)]
    pub assets: Option<String>,
}

impl TableArgs {
    pub fn apply(&self, config: &mut AnalysisConfig) -> Result<(), DomainError> {
        if let Some(file) = &self.file {
            config.data_file = PathBuf::from(file);
        }
        if let Some(cutoff) = &self.cutoff {
            config.cutoff = parse_date(cutoff).map_err(DomainError::InvalidInput)?;
        }
        Ok(())
    }
}

impl SearchArgs {
    pub fn apply(&self, config: &mut AnalysisConfig) -> Result<(), DomainError> {
        if self.from.is_some() || self.to.is_some() {
            config.set_window(self.from.as_deref(), self.to.as_deref())?;
        }
        if let Some(assets) = &self.assets {
            config.assets = split_assets(assets);
        }
        config.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_flags_override_config() {
        let cli = Cli::try_parse_from([
            "cryptobuzz",
            "analyze",
            "--file",
            "prices.csv",
            "--from",
            "2021-02-01",
            "--assets",
            "Bitcoin,XRP",
            "--json",
        ])
        .unwrap();

        let Commands::Analyze { table, search, json } = cli.command else {
            panic!("expected analyze");
        };
        assert!(json);

        let mut config = AnalysisConfig::default();
        table.apply(&mut config).unwrap();
        search.apply(&mut config).unwrap();
        assert_eq!(config.data_file, PathBuf::from("prices.csv"));
        assert_eq!(config.window.start_param(), "2021-02-01");
        assert_eq!(config.window.end_param(), "2021-12-31");
        assert_eq!(config.assets, vec!["Bitcoin".to_string(), "XRP".to_string()]);
    }

    #[test]
    fn test_no_flags_keep_defaults() {
        let mut config = AnalysisConfig::default();
        TableArgs::default().apply(&mut config).unwrap();
        SearchArgs::default().apply(&mut config).unwrap();
        assert_eq!(config.assets.len(), 10);
    }

    #[test]
    fn test_bad_cutoff_rejected() {
        let args = TableArgs {
            file: None,
            cutoff: Some("01/01/2021".into()),
        };
        assert!(args.apply(&mut AnalysisConfig::default()).is_err());
    }
}
