//! Dashboard Query Service
//!
//! Thin façade over the [`StartupRegistry`]: reads snapshots, triggers
//! reloads and answers liveness probes.

use std::sync::Arc;

use super::models::{HealthResponse, RefreshResponse};
use crate::models::DashboardSnapshot;
use crate::registry::StartupRegistry;
use crate::sources::CandidateSource;
use crate::time_utils::{display_now, iso_now};

#[derive(Clone)]
pub struct DashboardService {
    registry: Arc<StartupRegistry>,
    /// Live sources folded in on every refresh, on top of the built-in data
    live_sources: Arc<Vec<Box<dyn CandidateSource>>>,
}

impl DashboardService {
    pub fn new(registry: Arc<StartupRegistry>) -> Self {
        Self::with_sources(registry, Vec::new())
    }

    pub fn with_sources(
        registry: Arc<StartupRegistry>,
        live_sources: Vec<Box<dyn CandidateSource>>,
    ) -> Self {
        Self {
            registry,
            live_sources: Arc::new(live_sources),
        }
    }

    pub async fn get_dashboard(&self) -> DashboardSnapshot {
        self.registry.current_snapshot().await
    }

    /// Reload the registry. Reloading cannot fail, so `success` is always true.
    pub async fn refresh(&self) -> RefreshResponse {
        let summary = self.registry.reload_with(&self.live_sources).await;

        if !summary.failed_sources.is_empty() {
            tracing::warn!(
                sources = ?summary.failed_sources,
                "Some live sources failed during refresh"
            );
        }

        RefreshResponse {
            success: true,
            message: format!(
                "Refreshed {} trending and {} failed startups",
                summary.total_trending, summary.total_failed
            ),
            timestamp: iso_now(),
        }
    }

    pub async fn health_check(&self) -> HealthResponse {
        HealthResponse {
            status: "healthy".to_string(),
            timestamp: iso_now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            last_refresh: self
                .registry
                .last_refresh()
                .await
                .unwrap_or_else(display_now),
        }
    }
}
