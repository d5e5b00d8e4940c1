//! Telemetry Bootstrap
//!
//! The error-reporting collaborator is opaque to this repository: we
//! load its parameters from the environment and hand them over at
//! startup. Without an endpoint the integration stays disabled.

/// Parameters for the error-reporting collaborator
#[derive(Clone, Debug)]
pub struct TelemetryConfig {
    /// Ingest endpoint; `None` disables reporting
    pub endpoint: Option<String>,

    /// Deployment environment tag
    pub environment: String,

    /// Whether reports may include request headers and IPs
    pub send_default_pii: bool,
}

impl TelemetryConfig {
    /// Load from `TELEMETRY_ENDPOINT`, `ENVIRONMENT` and
    /// `TELEMETRY_SEND_PII`
    pub fn from_env() -> Self {
        Self {
            endpoint: std::env::var("TELEMETRY_ENDPOINT").ok(),
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "production".into()),
            send_default_pii: std::env::var("TELEMETRY_SEND_PII")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }

    /// Hand the parameters to the collaborator
    pub fn init(&self) {
        match &self.endpoint {
            Some(endpoint) => {
                tracing::info!(
                    endpoint,
                    environment = %self.environment,
                    send_default_pii = self.send_default_pii,
                    "telemetry initialized"
                );
            }
            None => {
                tracing::warn!("⚠ TELEMETRY_ENDPOINT not set - error reporting disabled");
            }
        }
    }
}
