//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::handlers::not_found_page;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Increment `clicks` and set `last_clicked` in a single statement
/// 2. Return 302 Found with `Location` set to the stored URL
///
/// Unknown codes get the HTML not-found page with status 404.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    match state.link_service.follow_link(&code).await {
        Ok(link) => {
            let location = location_header(&link.url)?;
            Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
        }
        Err(AppError::NotFound { .. }) => Ok(not_found_page()),
        Err(e) => Err(e),
    }
}

/// Builds a `Location` value for a stored URL.
///
/// URLs are stored as submitted and may contain characters that are not
/// valid in a header; those are re-serialized in percent-encoded form.
fn location_header(url: &str) -> Result<HeaderValue, AppError> {
    if let Ok(value) = HeaderValue::from_str(url) {
        return Ok(value);
    }

    Url::parse(url)
        .ok()
        .and_then(|parsed| HeaderValue::from_str(parsed.as_str()).ok())
        .ok_or_else(|| {
            tracing::error!(url, "Stored URL is not a valid Location value");
            AppError::internal(
                "Stored URL cannot be used as a redirect target",
                json!({ "url": url }),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_header_plain_url() {
        let value = location_header("https://a.com/path?q=1").unwrap();
        assert_eq!(value, "https://a.com/path?q=1");
    }

    #[test]
    fn test_location_header_percent_encodes_unicode() {
        let value = location_header("https://a.com/café").unwrap();
        assert_eq!(value, "https://a.com/caf%C3%A9");
    }
}
