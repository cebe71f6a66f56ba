//! Handler for health check endpoint.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Liveness probe.
///
/// # Endpoint
///
/// `GET /healthz`
///
/// # Response
///
/// ```json
/// { "ok": true, "version": "1.0" }
/// ```
///
/// The store is not consulted.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}
