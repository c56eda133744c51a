use serde::Serialize;
use thiserror::Error;

use crate::sources::FetchError;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Fetch failed: {0}")]
    FetchError(#[from] FetchError),

    #[error("Malformed CSV at line {line}: {message}")]
    CsvError { line: usize, message: String },

    #[error("{0:#}")]
    OtherError(anyhow::Error),
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl TrackerError {
    pub fn to_error_code(&self) -> &'static str {
        match self {
            TrackerError::IoError(_) => "IO_ERROR",
            TrackerError::InvalidInput(_) => "INVALID_INPUT",
            TrackerError::FetchError(_) => "FETCH_ERROR",
            TrackerError::CsvError { .. } => "CSV_ERROR",
            _ => "INTERNAL_ERROR",
        }
    }

    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
            code: self.to_error_code().to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
