mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use tinylink::domain::repositories::LinkRepository;

#[tokio::test]
async fn test_create_link_with_generated_code() {
    let (server, repo) = common::test_server();

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com/some/long/path" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<Value>();
    let code = json["code"].as_str().unwrap();
    assert_eq!(code.len(), 7);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(json["url"], "https://example.com/some/long/path");
    assert_eq!(json["clicks"], 0);
    assert!(json["lastClicked"].is_null());
    assert!(json["createdAt"].is_string());
    assert!(json.get("id").is_none());

    assert!(repo.exists(code).await.unwrap());
}

#[tokio::test]
async fn test_create_link_with_custom_code() {
    let (server, _repo) = common::test_server();

    let json = common::create_link(&server, "https://example.com", Some("abc123")).await;

    assert_eq!(json["code"], "abc123");
    assert_eq!(json["url"], "https://example.com");
}

#[tokio::test]
async fn test_create_link_empty_code_generates_one() {
    let (server, _repo) = common::test_server();

    let json = common::create_link(&server, "https://example.com", Some("")).await;

    assert_eq!(json["code"].as_str().unwrap().len(), 7);
}

#[tokio::test]
async fn test_create_link_invalid_code_not_persisted() {
    let (server, repo) = common::test_server();

    for code in ["ab", "abcdefghi", "abc-12", "abc 123"] {
        let response = server
            .post("/api/links")
            .json(&json!({ "url": "https://example.com", "code": code }))
            .await;

        response.assert_status_bad_request();
        let json = response.json::<Value>();
        assert_eq!(json["error"]["code"], "validation_error");
    }

    assert!(repo.is_empty());
}

#[tokio::test]
async fn test_create_link_invalid_url() {
    let (server, repo) = common::test_server();

    for url in ["not-a-url", "example.com", "javascript:alert(1)", ""] {
        let response = server
            .post("/api/links")
            .json(&json!({ "url": url }))
            .await;

        response.assert_status_bad_request();
        let json = response.json::<Value>();
        assert_eq!(json["error"]["message"], "Invalid URL. Include http:// or https://");
    }

    assert!(repo.is_empty());
}

#[tokio::test]
async fn test_create_link_missing_url() {
    let (server, _repo) = common::test_server();

    let response = server.post("/api/links").json(&json!({})).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_create_link_malformed_body() {
    let (server, _repo) = common::test_server();

    let response = server
        .post("/api/links")
        .json(&json!({ "url": 42 }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_create_link_duplicate_code() {
    let (server, repo) = common::test_server();

    common::create_link(&server, "https://example.com/a", Some("docs01")).await;

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com/b", "code": "docs01" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "conflict");
    assert_eq!(json["error"]["message"], "Code already exists");

    let stored = repo.find_by_code("docs01").await.unwrap().unwrap();
    assert_eq!(stored.url, "https://example.com/a");
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_create_link_reserved_code() {
    let (server, repo) = common::test_server();

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com", "code": "healthz" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert!(repo.is_empty());
}

#[tokio::test]
async fn test_list_links_newest_first() {
    let (server, _repo) = common::test_server();

    let empty = server.get("/api/links").await;
    empty.assert_status_ok();
    assert_eq!(empty.json::<Value>(), json!([]));

    common::create_link(&server, "https://example.com/1", Some("first1")).await;
    common::create_link(&server, "https://example.com/2", Some("second")).await;
    common::create_link(&server, "https://example.com/3", Some("third3")).await;

    let response = server.get("/api/links").await;
    response.assert_status_ok();

    let json = response.json::<Value>();
    let codes: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["third3", "second", "first1"]);
}

#[tokio::test]
async fn test_get_link() {
    let (server, _repo) = common::test_server();

    let created = common::create_link(&server, "https://example.com", Some("getme1")).await;

    let response = server.get("/api/links/getme1").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), created);
}

#[tokio::test]
async fn test_get_link_not_found() {
    let (server, _repo) = common::test_server();

    let response = server.get("/api/links/nope123").await;

    response.assert_status_not_found();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["message"], "Link not found");
}

#[tokio::test]
async fn test_delete_link_is_idempotent() {
    let (server, repo) = common::test_server();

    common::create_link(&server, "https://example.com", Some("gone01")).await;

    let response = server.delete("/api/links/gone01").await;
    response.assert_status(StatusCode::NO_CONTENT);
    assert!(repo.is_empty());

    let response = server.delete("/api/links/gone01").await;
    response.assert_status(StatusCode::NO_CONTENT);

    server.get("/api/links/gone01").await.assert_status_not_found();
    server.get("/gone01").await.assert_status_not_found();
}

#[tokio::test]
async fn test_create_link_rejects_whitespace_and_angle_brackets() {
    let (server, repo) = common::test_server();

    for url in ["  https://a.com  ", "https://a.com/a b", "https://a.com/<x>"] {
        let response = server
            .post("/api/links")
            .json(&json!({ "url": url, "code": "spaced1" }))
            .await;

        response.assert_status_bad_request();
        let json = response.json::<Value>();
        assert_eq!(json["error"]["code"], "validation_error");
    }

    assert!(repo.is_empty());
    server.get("/spaced1").await.assert_status_not_found();
}
