mod common;

#[tokio::test]
async fn test_dashboard_page() {
    let (server, _repo) = common::test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<form"));
    assert!(html.contains("/api/links"));
}

#[tokio::test]
async fn test_stats_page() {
    let (server, _repo) = common::test_server();
    common::create_link(&server, "https://example.com/stats", Some("stat01")).await;
    server.get("/stat01").await;

    let response = server.get("/code/stat01").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Stats for stat01"));
    assert!(html.contains("example.com"));
    assert!(!html.contains("Never"));
}

#[tokio::test]
async fn test_stats_page_never_clicked() {
    let (server, _repo) = common::test_server();
    common::create_link(&server, "https://example.com", Some("fresh1")).await;

    let response = server.get("/code/fresh1").await;

    response.assert_status_ok();
    assert!(response.text().contains("Never"));
}

#[tokio::test]
async fn test_stats_page_unknown_code() {
    let (server, _repo) = common::test_server();

    let response = server.get("/code/missing1").await;

    response.assert_status_not_found();
    assert!(response.text().contains("Link not found"));
}

#[tokio::test]
async fn test_unknown_page() {
    let (server, _repo) = common::test_server();

    let response = server.get("/no/such/page").await;

    response.assert_status_not_found();
    assert!(response.text().contains("Page not found"));
}
