//! HTTP adapter data structures.

use serde::{Deserialize, Serialize};

use crate::analysis::Analyzer;

/// Shared state for the HTTP adapter
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Analyzer,
}

/// JSON body of `POST /analyze`
///
/// `domain` is optional at the deserialization layer so that a missing field
/// is reported as a 400 with our own message instead of axum's rejection text.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
}

/// JSON error body for 4xx responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// JSON response for `/health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
