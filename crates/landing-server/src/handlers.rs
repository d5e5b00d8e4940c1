//! HTTP Handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct DomainCheckRequest {
    pub domain: String,
}

#[derive(Debug, Serialize)]
pub struct DomainCheckResponse {
    pub resolvable: bool,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// DNS half of email validation, called by the browser during the
/// email-capture dialog. An unresolvable domain is a domain outcome,
/// not an HTTP error, so the response is always 200.
pub async fn check_domain(
    State(state): State<AppState>,
    Json(payload): Json<DomainCheckRequest>,
) -> Json<DomainCheckResponse> {
    let resolvable = state.resolver.lookup(&payload.domain).await;
    tracing::debug!(domain = %payload.domain, resolvable, "domain check");

    Json(DomainCheckResponse { resolvable })
}
