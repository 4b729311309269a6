//! HTTP adapter over the analysis engine.
//!
//! Provides two endpoints:
//! - `POST /analyze` - JSON `{domain, ip?}` in, `AnalysisReport` out
//! - `GET /health` - liveness probe
//!
//! The adapter owns routing, CORS and body parsing only. Every analysis goes
//! through `Analyzer::analyze`.

mod handlers;
mod types;

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::analysis::Analyzer;
use crate::error_handling::InitializationError;

use handlers::{analyze_handler, health_handler};
pub use types::{AnalyzeRequest, AppState, ErrorResponse, HealthResponse};

/// Builds the router for the given analyzer.
///
/// Cross-origin requests are allowed only from `allowed_origins`. With an
/// empty list no CORS layer is installed and browsers get no
/// `Access-Control-Allow-Origin` header.
///
/// # Errors
///
/// Returns `InitializationError::InvalidOriginError` if an origin is not a
/// valid header value.
pub fn build_router(
    analyzer: Analyzer,
    allowed_origins: &[String],
) -> Result<Router, InitializationError> {
    let router = Router::new()
        .route("/analyze", post(analyze_handler))
        .route("/health", get(health_handler))
        .with_state(AppState { analyzer });

    if allowed_origins.is_empty() {
        return Ok(router);
    }

    let origins = allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin.trim_end_matches('/'))
                .map_err(|_| InitializationError::InvalidOriginError(origin.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Ok(router.layer(cors))
}

/// Binds `port` on all interfaces and serves `router` until the process exits.
pub async fn start_server(port: u16, router: Router) -> Result<(), InitializationError> {
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .map_err(|e| {
            InitializationError::ServerError(format!("Failed to bind to port {}: {}", port, e))
        })?;

    log::info!("HTTP adapter listening on http://0.0.0.0:{}/", port);
    log::info!("  - Analyze: POST http://0.0.0.0:{}/analyze", port);
    log::info!("  - Health: GET http://0.0.0.0:{}/health", port);

    axum::serve(listener, router)
        .await
        .map_err(|e| InitializationError::ServerError(format!("Server error: {}", e)))?;

    Ok(())
}
