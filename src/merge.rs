//! Case-insensitive dedup-by-name merge.
//!
//! Used both when live candidates are folded into the registry and when the
//! database updater appends new rows to the CSV database.

use std::collections::HashSet;

use crate::models::StartupRecord;

/// Anything identified by a startup name
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for StartupRecord {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Result of merging candidates into an existing collection
#[derive(Debug, Clone)]
pub struct MergeOutcome<T> {
    pub records: Vec<T>,
    pub added: usize,
}

fn name_key(name: &str) -> String {
    name.to_lowercase()
}

/// Append every candidate whose name is not already present.
///
/// Existing entries keep their order and are never replaced; candidates are
/// appended in the order given. Duplicates inside `candidates` are collapsed
/// to their first occurrence, and candidates with a blank name are dropped.
pub fn merge_candidates<T: Named>(existing: Vec<T>, candidates: Vec<T>) -> MergeOutcome<T> {
    let mut seen: HashSet<String> = existing.iter().map(|e| name_key(e.name())).collect();
    let mut records = existing;
    let mut added = 0;

    for candidate in candidates {
        if candidate.name().trim().is_empty() {
            tracing::debug!("Skipping candidate without a name");
            continue;
        }
        if seen.insert(name_key(candidate.name())) {
            records.push(candidate);
            added += 1;
        }
    }

    tracing::debug!(added, total = records.len(), "Merged candidates");

    MergeOutcome { records, added }
}
