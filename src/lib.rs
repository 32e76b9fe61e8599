pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::fetch_mentions::FetchMentionsUseCase;
use crate::application::join_data::join_mentions;
use crate::application::load_trading::LoadTradingUseCase;
use crate::application::regression::run_regression;
use crate::config::AnalysisConfig;
use crate::domain::entities::regression_report::RegressionReport;
use crate::domain::entities::regression_row::JoinOutcome;
use crate::domain::entities::trading_record::TradingRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::mention_transport::MentionTransport;
use crate::domain::ports::pacer::Pacer;
use crate::domain::ports::trading_source::TradingSource;
use crate::domain::values::mention_counts::MentionCounts;
use crate::infrastructure::http::reqwest_transport::ReqwestTransport;
use crate::infrastructure::pacing::tokio_pacer::TokioPacer;
use crate::infrastructure::tables::trading_csv::CsvTradingSource;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Everything produced by one pipeline run.
#[derive(Debug, Serialize)]
pub struct Analysis {
    pub mentions: MentionCounts,
    pub joined: JoinOutcome,
    pub report: RegressionReport,
}

pub struct CryptoBuzz {
    config: AnalysisConfig,
    load_uc: LoadTradingUseCase,
    fetch_uc: FetchMentionsUseCase,
}

impl CryptoBuzz {
    /// Wire the CSV file, reqwest transport and tokio pacer named by `config`.
    pub fn new(config: AnalysisConfig) -> Result<Self, DomainError> {
        let source: Arc<dyn TradingSource> = Arc::new(CsvTradingSource::new(&config.data_file));
        let transport: Arc<dyn MentionTransport> = Arc::new(ReqwestTransport::new(config.fetch.timeout));
        Self::with_providers(config, source, transport, Arc::new(TokioPacer))
    }

    pub fn with_providers(
        config: AnalysisConfig,
        source: Arc<dyn TradingSource>,
        transport: Arc<dyn MentionTransport>,
        pacer: Arc<dyn Pacer>,
    ) -> Result<Self, DomainError> {
        config.validate()?;
        Ok(Self {
            load_uc: LoadTradingUseCase::new(source),
            fetch_uc: FetchMentionsUseCase::new(transport, pacer, config.fetch.clone()),
            config,
        })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn load(&self) -> Result<Vec<TradingRecord>, DomainError> {
        self.load_uc.execute(self.config.cutoff)
    }

    pub async fn fetch_mentions(&self) -> MentionCounts {
        self.fetch_uc
            .execute(&self.config.assets, &self.config.window)
            .await
    }

    /// Load, fetch, join and fit. The trading table is read before any
    /// request is sent so a bad file fails fast.
    pub async fn analyze(&self) -> Result<Analysis, DomainError> {
        let records = self.load()?;
        let mentions = self.fetch_mentions().await;
        let joined = join_mentions(&records, &mentions);
        let report = run_regression(&joined, self.config.min_rows)?;
        info!(rows = joined.rows.len(), "Analysis complete");
        Ok(Analysis {
            mentions,
            joined,
            report,
        })
    }
}
