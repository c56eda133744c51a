//! Startup Registry
//!
//! Owns the trending and failed collections plus the last refresh time.
//! All three live in one immutable [`RegistryState`] behind a single `Arc`;
//! a reload builds a fresh state and swaps the pointer, so readers see either
//! the old state or the new one, never a mix.

use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::merge::merge_candidates;
use crate::models::{DashboardSnapshot, StartupRecord};
use crate::sample_data;
use crate::sources::{collect_candidates, CandidateSource};
use crate::time_utils::display_now;

/// One published version of the registry contents
#[derive(Debug, Default)]
pub struct RegistryState {
    pub trending: Vec<StartupRecord>,
    pub failed: Vec<StartupRecord>,
    pub last_refresh: Option<String>,
}

impl RegistryState {
    fn from_records(records: Vec<StartupRecord>, refreshed_at: String) -> Self {
        let (trending, failed): (Vec<_>, Vec<_>) = records
            .into_iter()
            .partition(|r| !r.is_failed());

        Self {
            trending,
            failed,
            last_refresh: Some(refreshed_at),
        }
    }
}

/// What a reload produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReloadSummary {
    pub total_trending: usize,
    pub total_failed: usize,
    /// Candidates from live sources that survived deduplication
    pub added_candidates: usize,
    /// Names of live sources that failed and contributed nothing
    pub failed_sources: Vec<String>,
    pub last_refresh: String,
}

pub struct StartupRegistry {
    state: RwLock<Arc<RegistryState>>,
    reload_lock: Mutex<()>,
}

impl Default for StartupRegistry {
    fn default() -> Self {
        Self::empty()
    }
}

impl StartupRegistry {
    /// A registry that has never been reloaded
    pub fn empty() -> Self {
        Self {
            state: RwLock::new(Arc::new(RegistryState::default())),
            reload_lock: Mutex::new(()),
        }
    }

    /// A registry seeded with the built-in dataset, as done on process start
    pub async fn with_sample_data() -> Self {
        let registry = Self::empty();
        registry.reload().await;
        registry
    }

    /// Replace both collections with the built-in dataset and stamp the time.
    pub async fn reload(&self) -> ReloadSummary {
        self.reload_with(&[]).await
    }

    /// Replace both collections with the built-in dataset, then fold in
    /// candidates from `sources`, skipping any whose name is already present
    /// (case-insensitive). Failing sources are skipped.
    pub async fn reload_with(&self, sources: &[Box<dyn CandidateSource>]) -> ReloadSummary {
        let _guard = self.reload_lock.lock().await;

        let report = collect_candidates(sources).await;
        let outcome = merge_candidates(sample_data::all_startups(), report.candidates);

        let refreshed_at = display_now();
        let next = Arc::new(RegistryState::from_records(
            outcome.records,
            refreshed_at.clone(),
        ));

        let summary = ReloadSummary {
            total_trending: next.trending.len(),
            total_failed: next.failed.len(),
            added_candidates: outcome.added,
            failed_sources: report
                .failures
                .iter()
                .map(|e| e.source_name().to_string())
                .collect(),
            last_refresh: refreshed_at,
        };

        *self.state.write().await = next;

        tracing::info!(
            trending = summary.total_trending,
            failed = summary.total_failed,
            added = summary.added_candidates,
            "Registry reloaded"
        );

        summary
    }

    /// The currently published state
    pub async fn state(&self) -> Arc<RegistryState> {
        self.state.read().await.clone()
    }

    /// Copy of the live collections with freshly computed totals.
    ///
    /// Falls back to the current time when no reload has run yet.
    pub async fn current_snapshot(&self) -> DashboardSnapshot {
        let state = self.state().await;
        DashboardSnapshot::new(
            state.trending.clone(),
            state.failed.clone(),
            state.last_refresh.clone().unwrap_or_else(display_now),
        )
    }

    pub async fn last_refresh(&self) -> Option<String> {
        self.state().await.last_refresh.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FounderInfo, StartupStatus};
    use crate::sources::FetchError;
    use async_trait::async_trait;

    struct FixedSource(Vec<StartupRecord>);

    #[async_trait]
    impl CandidateSource for FixedSource {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn fetch_candidates(&self) -> Result<Vec<StartupRecord>, FetchError> {
            Ok(self.0.clone())
        }
    }

    struct DownSource;

    #[async_trait]
    impl CandidateSource for DownSource {
        fn name(&self) -> &str {
            "down"
        }

        async fn fetch_candidates(&self) -> Result<Vec<StartupRecord>, FetchError> {
            Err(FetchError::Unavailable {
                source_name: "down".to_string(),
                message: "maintenance".to_string(),
            })
        }
    }

    fn candidate(name: &str, status: StartupStatus) -> StartupRecord {
        StartupRecord {
            name: name.to_string(),
            description: "Candidate".to_string(),
            funding_amount: None,
            founders: vec![FounderInfo::named("Someone")],
            location: None,
            industry: None,
            website: None,
            social_links: None,
            date_added: "2026-02-11".to_string(),
            source: "fixed".to_string(),
            status,
            reason: None,
        }
    }

    #[tokio::test]
    async fn test_counts_match_collections_after_reload() {
        let registry = StartupRegistry::with_sample_data().await;
        let snapshot = registry.current_snapshot().await;

        assert_eq!(snapshot.total_trending, snapshot.trending_startups.len());
        assert_eq!(snapshot.total_failed, snapshot.failed_startups.len());
        assert_eq!(snapshot.total_trending, 10);
        assert_eq!(snapshot.total_failed, 5);
    }

    #[tokio::test]
    async fn test_reload_is_idempotent() {
        let registry = StartupRegistry::with_sample_data().await;
        let first = registry.current_snapshot().await;
        registry.reload().await;
        let second = registry.current_snapshot().await;

        assert_eq!(first.trending_startups, second.trending_startups);
        assert_eq!(first.failed_startups, second.failed_startups);
    }

    #[tokio::test]
    async fn test_empty_registry_falls_back_to_now() {
        let registry = StartupRegistry::empty();
        assert!(registry.last_refresh().await.is_none());

        let snapshot = registry.current_snapshot().await;
        assert_eq!(snapshot.total_trending, 0);
        assert_eq!(snapshot.total_failed, 0);
        assert!(!snapshot.last_updated.is_empty());
    }

    #[tokio::test]
    async fn test_reload_sets_last_refresh() {
        let registry = StartupRegistry::empty();
        let summary = registry.reload().await;
        assert_eq!(registry.last_refresh().await, Some(summary.last_refresh));
    }

    #[tokio::test]
    async fn test_snapshot_taken_before_reload_is_unaffected() {
        let registry = StartupRegistry::with_sample_data().await;
        let before = registry.state().await;

        let sources: Vec<Box<dyn CandidateSource>> = vec![Box::new(FixedSource(vec![
            candidate("Brand New", StartupStatus::Trending),
        ]))];
        registry.reload_with(&sources).await;

        assert_eq!(before.trending.len(), 10);
        assert_eq!(registry.state().await.trending.len(), 11);
    }

    #[tokio::test]
    async fn test_reload_with_merges_candidates_case_insensitively() {
        let registry = StartupRegistry::with_sample_data().await;
        let sources: Vec<Box<dyn CandidateSource>> = vec![Box::new(FixedSource(vec![
            candidate("vega security", StartupStatus::Trending),
            candidate("Nimbus Labs", StartupStatus::Trending),
            candidate("Juicero", StartupStatus::Failed),
        ]))];

        let summary = registry.reload_with(&sources).await;

        assert_eq!(summary.added_candidates, 2);
        assert_eq!(summary.total_trending, 11);
        assert_eq!(summary.total_failed, 6);

        let snapshot = registry.current_snapshot().await;
        let vega: Vec<_> = snapshot
            .trending_startups
            .iter()
            .filter(|s| s.name.eq_ignore_ascii_case("vega security"))
            .collect();
        assert_eq!(vega.len(), 1);
        assert_eq!(vega[0].source, "TechCrunch");
    }

    #[tokio::test]
    async fn test_reload_with_drops_unnamed_candidates() {
        let registry = StartupRegistry::with_sample_data().await;
        let sources: Vec<Box<dyn CandidateSource>> = vec![Box::new(FixedSource(vec![
            candidate("", StartupStatus::Trending),
            candidate("   ", StartupStatus::Failed),
        ]))];

        let summary = registry.reload_with(&sources).await;

        assert_eq!(summary.added_candidates, 0);
        let snapshot = registry.current_snapshot().await;
        assert_eq!(snapshot.total_trending, 10);
        assert_eq!(snapshot.total_failed, 5);
        assert!(snapshot
            .trending_startups
            .iter()
            .chain(snapshot.failed_startups.iter())
            .all(|s| !s.name.trim().is_empty()));
    }

    #[tokio::test]
    async fn test_reload_replaces_rather_than_accumulates() {
        let registry = StartupRegistry::with_sample_data().await;
        let sources: Vec<Box<dyn CandidateSource>> = vec![Box::new(FixedSource(vec![
            candidate("Nimbus Labs", StartupStatus::Trending),
        ]))];
        registry.reload_with(&sources).await;
        registry.reload().await;

        let snapshot = registry.current_snapshot().await;
        assert_eq!(snapshot.total_trending, 10);
        assert!(snapshot
            .trending_startups
            .iter()
            .all(|s| s.name != "Nimbus Labs"));
    }

    #[tokio::test]
    async fn test_failing_source_does_not_fail_reload() {
        let registry = StartupRegistry::with_sample_data().await;
        let sources: Vec<Box<dyn CandidateSource>> = vec![Box::new(DownSource)];

        let summary = registry.reload_with(&sources).await;

        assert_eq!(summary.added_candidates, 0);
        assert_eq!(summary.failed_sources, vec!["down".to_string()]);
        assert_eq!(summary.total_trending, 10);
        assert_eq!(summary.total_failed, 5);
    }

    #[tokio::test]
    async fn test_concurrent_reads_during_reloads_see_consistent_state() {
        let registry = Arc::new(StartupRegistry::with_sample_data().await);

        let mut handles = Vec::new();
        for i in 0..8 {
            let registry = registry.clone();
            handles.push(tokio::spawn(async move {
                if i % 2 == 0 {
                    registry.reload().await;
                } else {
                    let snapshot = registry.current_snapshot().await;
                    assert_eq!(snapshot.total_trending, snapshot.trending_startups.len());
                    assert_eq!(snapshot.total_failed, snapshot.failed_startups.len());
                    assert_eq!(snapshot.total_trending + snapshot.total_failed, 15);
                }
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }
    }
}
