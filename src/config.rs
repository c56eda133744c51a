//! Runtime configuration resolved from CLI flags and environment variables.

use std::path::{Path, PathBuf};

use crate::export::DEFAULT_DATABASE_PATH;

/// Environment variable overriding the database location for `update-db`
pub const DATABASE_PATH_ENV: &str = "DATABASE_PATH";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Dashboard server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding `index.html`
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl ServerConfig {
    /// `host:port` as handed to the listener; host names are resolved there
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}

/// Database path precedence: explicit flag, then `DATABASE_PATH`, then the
/// default location.
pub fn resolve_database_path(flag: Option<&Path>) -> PathBuf {
    if let Some(path) = flag {
        return path.to_path_buf();
    }

    match std::env::var(DATABASE_PATH_ENV) {
        Ok(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => PathBuf::from(DEFAULT_DATABASE_PATH),
    }
}
