//! Dashboard page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::utils::code_generator::CODE_PATTERN;

/// Template for the dashboard.
///
/// The page is a shell: the link table is loaded from `GET /api/links` and
/// the create/delete actions call the REST API from the browser.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    /// Code format mirrored into the client-side check.
    pub code_pattern: &'static str,
}

/// Renders the dashboard.
///
/// # Endpoint
///
/// `GET /`
pub async fn dashboard_handler() -> impl IntoResponse {
    DashboardTemplate {
        code_pattern: CODE_PATTERN,
    }
}
