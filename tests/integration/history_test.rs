//! Integration tests for the history endpoint.

use axum::http::StatusCode;

use super::helpers::TestApp;

#[tokio::test]
async fn test_history_starts_empty() {
    let app = TestApp::new(&["A"]);

    let response = app.request("GET", "/api/history", "1.1.1.1", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["data"]["history"].as_array().unwrap().len(),
        0
    );
}

#[tokio::test]
async fn test_history_filters_by_identity() {
    let app = TestApp::new(&["A", "B"]);

    app.request("POST", "/api/claim", "1.1.1.1", None).await;
    app.request("POST", "/api/claim", "2.2.2.2", None).await;

    let mine = app.request("GET", "/api/history", "1.1.1.1", None).await;
    let entries = mine.body["data"]["history"].as_array().unwrap().clone();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["coupon"], "A");

    let theirs = app.request("GET", "/api/history", "2.2.2.2", None).await;
    let entries = theirs.body["data"]["history"].as_array().unwrap().clone();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["coupon"], "B");
}

#[tokio::test]
async fn test_history_is_chronological() {
    // Zero cooldown lets one identity claim repeatedly.
    let app = TestApp::with_cooldown(&["A", "B", "C"], 0);

    for _ in 0..3 {
        let claimed = app.request("POST", "/api/claim", "1.1.1.1", None).await;
        assert_eq!(claimed.status, StatusCode::OK);
    }

    let response = app.request("GET", "/api/history", "1.1.1.1", None).await;
    let coupons: Vec<&str> = response.body["data"]["history"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["coupon"].as_str().unwrap())
        .collect();

    assert_eq!(coupons, vec!["A", "B", "C"]);
}

#[tokio::test]
async fn test_history_read_path_has_no_side_effects() {
    let app = TestApp::new(&["A", "B"]);

    // Reading history never consumes a code or starts a cooldown.
    app.request("GET", "/api/history", "1.1.1.1", None).await;
    let claimed = app.request("POST", "/api/claim", "1.1.1.1", None).await;

    assert_eq!(claimed.status, StatusCode::OK);
    assert_eq!(claimed.coupon(), "A");
}
