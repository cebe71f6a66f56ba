//! Top-level router configuration combining API, redirect and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`              - Dashboard
//! - `GET  /code/{code}`   - Statistics page
//! - `GET  /healthz`       - Liveness probe
//! - `GET  /{code}`        - Short link redirect
//! - `/api/*`              - REST API
//!
//! Anything else renders the HTML not-found page.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use crate::web::handlers::fallback_handler;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routing table with state and tracing applied.
///
/// Static segments (`/healthz`, `/api/...`, `/code/...`) take precedence
/// over the `/{code}` capture.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .route("/healthz", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::routes())
        .fallback(fallback_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the served application: [`router`] behind trailing-slash trimming.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
