//! Not-found page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub message: &'static str,
}

/// Renders "Link not found" with status 404.
pub fn not_found_page() -> Response {
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            message: "Link not found",
        },
    )
        .into_response()
}

/// Router fallback for paths no route matches.
pub async fn fallback_handler() -> Response {
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            message: "Page not found",
        },
    )
        .into_response()
}
