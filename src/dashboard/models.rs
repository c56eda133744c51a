use serde::{Deserialize, Serialize};

/// Response to `POST /api/refresh`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub success: bool,
    pub message: String,
    pub timestamp: String,
}

/// Response to `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub last_refresh: String,
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found() -> Self {
        Self {
            error: "Not found".to_string(),
            code: "NOT_FOUND".to_string(),
        }
    }
}
