#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::PgPool;
use std::sync::Arc;
use tinylink::infrastructure::persistence::{InMemoryLinkRepository, PgLinkRepository};
use tinylink::routes::router;
use tinylink::state::AppState;

/// State backed by an in-memory store. The repository handle is returned so
/// tests can inspect what was persisted.
pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    let repo = Arc::new(InMemoryLinkRepository::new());
    (AppState::new(repo.clone()), repo)
}

/// State backed by the PostgreSQL pool provided by `#[sqlx::test]`.
pub fn create_pg_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(PgLinkRepository::new(Arc::new(pool))))
}

/// Full application router over a fresh in-memory store.
pub fn test_server() -> (TestServer, Arc<InMemoryLinkRepository>) {
    let (state, repo) = create_test_state();
    let server = TestServer::new(router(state)).unwrap();
    (server, repo)
}

pub async fn create_link(server: &TestServer, url: &str, code: Option<&str>) -> Value {
    let body = match code {
        Some(code) => json!({ "url": url, "code": code }),
        None => json!({ "url": url }),
    };

    let response = server.post("/api/links").json(&body).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}
