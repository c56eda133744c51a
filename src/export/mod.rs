//! Founder database updater
//!
//! Loads the CSV database, asks the external sources for new startups,
//! appends the ones not already present (case-insensitive by name) and
//! writes the CSV back together with a Markdown summary.

pub mod csv;
pub mod markdown;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::{Result, TrackerError};
use crate::merge::{merge_candidates, Named};
use crate::models::StartupRecord;
use crate::sources::{collect_candidates, CandidateSource};
use crate::time_utils::display_timestamp;

pub use markdown::render_markdown;

/// Column order of the CSV database
pub const FIELDNAMES: [&str; 12] = [
    "startup_name",
    "description",
    "funding_amount",
    "industry",
    "location",
    "employees",
    "website",
    "founders",
    "founder_emails",
    "founder_linkedin",
    "source",
    "batch",
];

/// Default database location when neither a flag nor `DATABASE_PATH` is given
pub const DEFAULT_DATABASE_PATH: &str = "data/founder_contact_database.csv";

/// One row of the founder database
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatabaseEntry {
    pub startup_name: String,
    pub description: String,
    pub funding_amount: String,
    pub industry: String,
    pub location: String,
    pub employees: String,
    pub website: String,
    pub founders: String,
    pub founder_emails: String,
    pub founder_linkedin: String,
    pub source: String,
    pub batch: String,
}

impl Named for DatabaseEntry {
    fn name(&self) -> &str {
        &self.startup_name
    }
}

fn join_present<'a>(values: impl Iterator<Item = Option<&'a str>>) -> String {
    values.flatten().collect::<Vec<_>>().join(", ")
}

impl DatabaseEntry {
    /// Flatten a fetched startup into a database row
    pub fn from_record(record: &StartupRecord) -> Self {
        Self {
            startup_name: record.name.clone(),
            description: record.description.clone(),
            funding_amount: record.funding_amount.clone().unwrap_or_default(),
            industry: record.industry.clone().unwrap_or_default(),
            location: record.location.clone().unwrap_or_default(),
            employees: String::new(),
            website: record.website.clone().unwrap_or_default(),
            founders: join_present(record.founders.iter().map(|f| Some(f.name.as_str()))),
            founder_emails: join_present(record.founders.iter().map(|f| f.email.as_deref())),
            founder_linkedin: join_present(record.founders.iter().map(|f| f.linkedin.as_deref())),
            source: record.source.clone(),
            batch: String::new(),
        }
    }

    fn field(&self, column: &str) -> &str {
        match column {
            "startup_name" => &self.startup_name,
            "description" => &self.description,
            "funding_amount" => &self.funding_amount,
            "industry" => &self.industry,
            "location" => &self.location,
            "employees" => &self.employees,
            "website" => &self.website,
            "founders" => &self.founders,
            "founder_emails" => &self.founder_emails,
            "founder_linkedin" => &self.founder_linkedin,
            "source" => &self.source,
            "batch" => &self.batch,
            _ => "",
        }
    }

    fn field_mut(&mut self, column: &str) -> Option<&mut String> {
        let slot = match column {
            "startup_name" => &mut self.startup_name,
            "description" => &mut self.description,
            "funding_amount" => &mut self.funding_amount,
            "industry" => &mut self.industry,
            "location" => &mut self.location,
            "employees" => &mut self.employees,
            "website" => &mut self.website,
            "founders" => &mut self.founders,
            "founder_emails" => &mut self.founder_emails,
            "founder_linkedin" => &mut self.founder_linkedin,
            "source" => &mut self.source,
            "batch" => &mut self.batch,
            _ => return None,
        };
        Some(slot)
    }

    pub fn to_row(&self) -> Vec<&str> {
        FIELDNAMES.iter().map(|c| self.field(c)).collect()
    }

    /// Build an entry from a data row laid out per `header`. Unknown columns
    /// are ignored and missing ones stay empty.
    pub fn from_row(header: &[String], row: Vec<String>) -> Self {
        let mut entry = Self::default();
        for (column, value) in header.iter().zip(row) {
            if let Some(slot) = entry.field_mut(column.trim()) {
                *slot = value;
            }
        }
        entry
    }
}

/// Read the CSV database. A missing file is an empty database.
pub fn load_database(csv_path: &Path) -> Result<Vec<DatabaseEntry>> {
    if !csv_path.exists() {
        tracing::debug!("No existing database at {}", csv_path.display());
        return Ok(Vec::new());
    }

    let text = fs::read_to_string(csv_path)?;
    let mut rows = csv::parse_rows(text.trim_start_matches('\u{feff}'))?.into_iter();

    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };
    if !header.iter().any(|c| c.trim() == "startup_name") {
        return Err(TrackerError::CsvError {
            line: 1,
            message: "header has no startup_name column".to_string(),
        });
    }

    let entries: Vec<_> = rows.map(|row| DatabaseEntry::from_row(&header, row)).collect();
    tracing::info!("Loaded {} existing startups", entries.len());
    Ok(entries)
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Write the CSV database and its Markdown summary.
pub fn save_database(entries: &[DatabaseEntry], csv_path: &Path, md_path: &Path) -> Result<()> {
    ensure_parent_dir(csv_path)?;

    let mut buf: Vec<u8> = Vec::new();
    csv::write_row(&mut buf, &FIELDNAMES)?;
    for entry in entries {
        csv::write_row(&mut buf, &entry.to_row())?;
    }
    fs::write(csv_path, buf)?;
    tracing::info!("Saved CSV to {}", csv_path.display());

    ensure_parent_dir(md_path)?;
    let summary = render_markdown(entries, &display_timestamp(&Local::now()));
    fs::write(md_path, summary)?;
    tracing::info!("Saved Markdown to {}", md_path.display());

    Ok(())
}

/// Markdown summary path that sits next to the CSV database
pub fn markdown_path_for(csv_path: &Path) -> PathBuf {
    let raw = csv_path.to_string_lossy();
    match raw.strip_suffix(".csv") {
        Some(stem) => PathBuf::from(format!("{}.md", stem)),
        None => PathBuf::from(format!("{}.md", raw)),
    }
}

/// Resolved settings for one updater run
#[derive(Debug, Clone)]
pub struct UpdateConfig {
    pub csv_path: PathBuf,
    pub md_path: PathBuf,
}

impl UpdateConfig {
    pub fn new(csv_path: impl Into<PathBuf>) -> Self {
        let csv_path = csv_path.into();
        let md_path = markdown_path_for(&csv_path);
        Self { csv_path, md_path }
    }
}

/// Result of an updater run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Nothing was fetched; the files on disk were not touched
    Unchanged,
    Updated { added: usize, total: usize },
}

/// Fetch, merge and save.
pub async fn run_update(
    config: &UpdateConfig,
    sources: &[Box<dyn CandidateSource>],
) -> Result<UpdateOutcome> {
    let report = collect_candidates(sources).await;

    if report.is_empty() {
        tracing::debug!("Sources returned no candidates, skipping write");
        return Ok(UpdateOutcome::Unchanged);
    }

    let candidates: Vec<_> = report
        .candidates
        .iter()
        .map(DatabaseEntry::from_record)
        .collect();

    let existing = load_database(&config.csv_path)?;
    let outcome = merge_candidates(existing, candidates);
    tracing::info!("Added {} new startups", outcome.added);
    tracing::info!("Total database size: {} startups", outcome.records.len());

    save_database(&outcome.records, &config.csv_path, &config.md_path)?;

    Ok(UpdateOutcome::Updated {
        added: outcome.added,
        total: outcome.records.len(),
    })
}
