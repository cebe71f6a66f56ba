//! Link statistics page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};

use super::not_found_page;
use crate::domain::entities::Link;
use crate::error::AppError;
use crate::state::AppState;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Template for the statistics page of one link.
#[derive(Template, WebTemplate)]
#[template(path = "stats.html")]
pub struct StatsTemplate {
    pub code: String,
    pub url: String,
    pub clicks: i64,
    pub last_clicked: String,
    pub created_at: String,
}

impl From<Link> for StatsTemplate {
    fn from(link: Link) -> Self {
        Self {
            code: link.code,
            url: link.url,
            clicks: link.clicks,
            last_clicked: link
                .last_clicked
                .map(format_timestamp)
                .unwrap_or_else(|| "Never".to_string()),
            created_at: format_timestamp(link.created_at),
        }
    }
}

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Renders the statistics page for a link.
///
/// # Endpoint
///
/// `GET /code/{code}`
///
/// Unknown codes render the not-found page with status 404. Viewing this
/// page does not count as a click.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    match state.link_service.get_link(&code).await {
        Ok(link) => Ok(StatsTemplate::from(link).into_response()),
        Err(AppError::NotFound { .. }) => Ok(not_found_page()),
        Err(e) => Err(e),
    }
}
