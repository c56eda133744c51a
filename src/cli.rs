use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_STATIC_DIR};
use crate::sources::DEFAULT_TOPSTARTUPS_LIMIT;

const LONG_ABOUT: &str = r#"
Startup Tracker - trending and failed startups, daily

Commands:
  startup-tracker serve       ← Run the dashboard (HTML page + JSON API)
  startup-tracker update-db   ← Refresh the founder contact database (CSV + Markdown)

HTTP API (serve):
  GET  /               Dashboard page
  GET  /api/dashboard  Trending and failed startups with totals
  POST /api/refresh    Reload the startup lists
  GET  /health         Liveness probe

Environment:
  DATABASE_PATH              Database CSV used by update-db
  STARTUP_TRACKER_LOG_FILE   Force server logs into ~/.startup-tracker/logs/server.log
  RUST_LOG                   Override the log filter
"#;

#[derive(Parser, Clone)]
#[command(name = "startup-tracker")]
#[command(about = "Track trending and failed startups daily")]
#[command(long_about = LONG_ABOUT)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output (-q)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output logs in JSON format
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Run the dashboard HTTP server
    ///
    /// Examples:
    ///   startup-tracker serve
    ///   startup-tracker serve --host 127.0.0.1 --port 8080 --static-dir ./public
    Serve {
        /// Address to bind
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,

        /// Port to listen on
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Directory containing index.html
        #[arg(long, default_value = DEFAULT_STATIC_DIR)]
        static_dir: PathBuf,
    },

    /// Fetch new startups and merge them into the founder database
    ///
    /// New entries are matched against existing ones by name, ignoring case.
    /// When nothing new is fetched the database files are left untouched.
    ///
    /// Examples:
    ///   startup-tracker update-db
    ///   startup-tracker update-db --database data/founders.csv --limit 50
    UpdateDb {
        /// Database CSV path (default: $DATABASE_PATH or data/founder_contact_database.csv)
        #[arg(long)]
        database: Option<PathBuf>,

        /// Maximum number of startups requested from topstartups.io
        #[arg(long, default_value_t = DEFAULT_TOPSTARTUPS_LIMIT)]
        limit: usize,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
