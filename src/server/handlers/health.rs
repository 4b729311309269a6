//! Liveness handler.

use axum::{http::StatusCode, response::IntoResponse, Json};

use super::super::types::HealthResponse;

/// Liveness endpoint; never touches DNS
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse { status: "ok" }))
}
