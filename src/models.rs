//! Startup data model shared by the registry, the dashboard API and the
//! database updater.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lifecycle bucket a startup belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartupStatus {
    Trending,
    Failed,
}

/// A founder attached to a startup record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FounderInfo {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl FounderInfo {
    /// Founder known only by name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            linkedin: None,
            twitter: None,
            role: None,
        }
    }
}

/// One company entry on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartupRecord {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub funding_amount: Option<String>,
    #[serde(default)]
    pub founders: Vec<FounderInfo>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub social_links: Option<BTreeMap<String, String>>,
    pub date_added: String,
    pub source: String,
    pub status: StartupStatus,
    /// Only meaningful for failed startups
    #[serde(default)]
    pub reason: Option<String>,
}

impl StartupRecord {
    pub fn is_failed(&self) -> bool {
        self.status == StartupStatus::Failed
    }
}

/// Dashboard payload assembled from the registry on every read.
///
/// The totals are derived from the collections when the snapshot is built,
/// so `total_trending == trending_startups.len()` always holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub trending_startups: Vec<StartupRecord>,
    pub failed_startups: Vec<StartupRecord>,
    pub last_updated: String,
    pub total_trending: usize,
    pub total_failed: usize,
}

impl DashboardSnapshot {
    pub fn new(
        trending_startups: Vec<StartupRecord>,
        failed_startups: Vec<StartupRecord>,
        last_updated: String,
    ) -> Self {
        Self {
            total_trending: trending_startups.len(),
            total_failed: failed_startups.len(),
            trending_startups,
            failed_startups,
            last_updated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, status: StartupStatus) -> StartupRecord {
        StartupRecord {
            name: name.to_string(),
            description: "desc".to_string(),
            funding_amount: None,
            founders: vec![],
            location: None,
            industry: None,
            website: None,
            social_links: None,
            date_added: "2026-02-10".to_string(),
            source: "Test".to_string(),
            status,
            reason: None,
        }
    }

    #[test]
    fn test_snapshot_counts_follow_collections() {
        let snapshot = DashboardSnapshot::new(
            vec![
                record("A", StartupStatus::Trending),
                record("B", StartupStatus::Trending),
            ],
            vec![record("C", StartupStatus::Failed)],
            "2026-02-10 09:00:00".to_string(),
        );
        assert_eq!(snapshot.total_trending, 2);
        assert_eq!(snapshot.total_failed, 1);
    }

    #[test]
    fn test_record_wire_format_is_snake_case() {
        let mut r = record("Acme", StartupStatus::Failed);
        r.funding_amount = Some("$1M".to_string());
        r.reason = Some("Ran out of runway".to_string());

        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["funding_amount"], "$1M");
        assert_eq!(json["date_added"], "2026-02-10");
        assert_eq!(json["status"], "failed");
        assert!(json["social_links"].is_null());
    }

    #[test]
    fn test_record_deserialization_defaults_optional_fields() {
        let json = r#"{
            "name": "Beta",
            "description": "Something",
            "date_added": "2026-01-01",
            "source": "Manual",
            "status": "trending"
        }"#;
        let r: StartupRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.status, StartupStatus::Trending);
        assert!(r.founders.is_empty());
        assert!(r.reason.is_none());
        assert!(!r.is_failed());
    }
}
