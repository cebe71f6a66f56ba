//! DTO for the health check endpoint.

use serde::Serialize;

/// Version string reported by `/healthz`.
pub const HEALTH_VERSION: &str = "1.0";

/// Fixed liveness payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub version: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            ok: true,
            version: HEALTH_VERSION,
        }
    }
}
