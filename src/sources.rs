//! Candidate sources
//!
//! A source proposes startup records ("candidates") that are deduplicated
//! against what is already known before being added. The external sources
//! are placeholders: they log what they would fetch and return nothing.

use async_trait::async_trait;
use chrono::Local;
use thiserror::Error;

use crate::models::StartupRecord;
use crate::sample_data;
use crate::time_utils::yc_batch_label;

/// Default number of startups requested from topstartups.io
pub const DEFAULT_TOPSTARTUPS_LIMIT: usize = 100;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("{source_name}: network error: {message}")]
    Network {
        source_name: String,
        message: String,
    },

    #[error("{source_name}: could not parse response: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    #[error("{source_name}: source unavailable: {message}")]
    Unavailable {
        source_name: String,
        message: String,
    },
}

impl FetchError {
    pub fn source_name(&self) -> &str {
        match self {
            FetchError::Network { source_name, .. }
            | FetchError::Parse { source_name, .. }
            | FetchError::Unavailable { source_name, .. } => source_name,
        }
    }
}

/// Something that can propose startup records
#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// Label used in logs and failure reports
    fn name(&self) -> &str;

    async fn fetch_candidates(&self) -> Result<Vec<StartupRecord>, FetchError>;
}

/// The built-in dataset. Never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleDataSource;

#[async_trait]
impl CandidateSource for SampleDataSource {
    fn name(&self) -> &str {
        "sample-data"
    }

    async fn fetch_candidates(&self) -> Result<Vec<StartupRecord>, FetchError> {
        Ok(sample_data::all_startups())
    }
}

/// topstartups.io listing. Not wired to the network yet.
#[derive(Debug, Clone, Copy)]
pub struct TopStartupsSource {
    pub limit: usize,
}

impl Default for TopStartupsSource {
    fn default() -> Self {
        Self {
            limit: DEFAULT_TOPSTARTUPS_LIMIT,
        }
    }
}

#[async_trait]
impl CandidateSource for TopStartupsSource {
    fn name(&self) -> &str {
        "topstartups.io"
    }

    async fn fetch_candidates(&self) -> Result<Vec<StartupRecord>, FetchError> {
        tracing::info!(limit = self.limit, "Would fetch startups from topstartups.io");
        Ok(Vec::new())
    }
}

/// Latest Y Combinator batch. Not wired to the network yet.
#[derive(Debug, Default, Clone, Copy)]
pub struct YcBatchSource;

#[async_trait]
impl CandidateSource for YcBatchSource {
    fn name(&self) -> &str {
        "y-combinator"
    }

    async fn fetch_candidates(&self) -> Result<Vec<StartupRecord>, FetchError> {
        let batch = yc_batch_label(Local::now().date_naive());
        tracing::info!(batch = %batch, "Checking for YC batch");
        Ok(Vec::new())
    }
}

/// External sources queried by the database updater
pub fn external_sources(topstartups_limit: usize) -> Vec<Box<dyn CandidateSource>> {
    vec![
        Box::new(TopStartupsSource {
            limit: topstartups_limit,
        }),
        Box::new(YcBatchSource),
    ]
}

/// Everything fetched from a set of sources
#[derive(Debug, Default)]
pub struct FetchReport {
    pub candidates: Vec<StartupRecord>,
    pub failures: Vec<FetchError>,
}

impl FetchReport {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Query every source in order. A failing source contributes zero
/// candidates; its error is logged and kept in the report.
pub async fn collect_candidates(sources: &[Box<dyn CandidateSource>]) -> FetchReport {
    let mut report = FetchReport::default();

    for (index, source) in sources.iter().enumerate() {
        tracing::info!(
            "[{}/{}] Fetching candidates from {}",
            index + 1,
            sources.len(),
            source.name()
        );
        match source.fetch_candidates().await {
            Ok(candidates) => {
                tracing::debug!(
                    source = source.name(),
                    count = candidates.len(),
                    "Fetched candidates"
                );
                report.candidates.extend(candidates);
            },
            Err(e) => {
                tracing::warn!(source = source.name(), error = %e, "Fetch failed, skipping source");
                report.failures.push(e);
            },
        }
    }

    report
}
