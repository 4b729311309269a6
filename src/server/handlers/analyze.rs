//! Analysis handler.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::super::types::{AnalyzeRequest, AppState, ErrorResponse};
use crate::error_handling::AnalysisError;

/// Runs one analysis for the posted domain.
///
/// Every DNS outcome is a 200 with the report; only unusable input is a 400.
pub async fn analyze_handler(
    State(state): State<AppState>,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Response {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            log::debug!("Rejected /analyze body: {}", rejection.body_text());
            return bad_request(format!("Invalid request body: {}", rejection.body_text()));
        }
    };

    let Some(domain) = request.domain.filter(|d| !d.trim().is_empty()) else {
        return bad_request("domain is required");
    };
    let ip = request
        .ip
        .as_deref()
        .map(str::trim)
        .filter(|ip| !ip.is_empty());

    match state.analyzer.analyze(&domain, ip).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(AnalysisError::InvalidInput(message)) => bad_request(message),
    }
}

fn bad_request(message: impl Into<String>) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
}
