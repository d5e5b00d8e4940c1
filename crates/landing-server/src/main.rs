//! Courtside Landing Server
//!
//! Axum host for the early-access landing page: serves the WASM
//! bundle and exposes the email-domain validation endpoint the
//! browser cannot implement itself.

mod handlers;
mod resolver;
mod state;
mod telemetry;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::handlers::{check_domain, health_check};
use crate::resolver::DnsResolver;
use crate::state::AppState;
use crate::telemetry::TelemetryConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    // Hand parameters to the error-reporting collaborator
    let telemetry = TelemetryConfig::from_env();
    telemetry.init();

    // Build application state
    let state = AppState {
        resolver: DnsResolver::new(),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/validate/domain", post(check_domain))
        // Static files (WASM frontend)
        .nest_service("/", tower_http::services::ServeDir::new("static"))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🏀 courtside landing server running on http://{}", addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health               - Health check");
    tracing::info!("  POST /api/validate/domain  - Email-domain DNS check");
    tracing::info!("  GET  /                     - Landing page (static)");
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
