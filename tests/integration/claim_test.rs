//! Integration tests for the claim endpoint.

use axum::http::StatusCode;

use super::helpers::TestApp;

#[tokio::test]
async fn test_claim_assigns_first_coupon_and_sets_cookie() {
    let app = TestApp::new(&["A", "B", "C"]);

    let response = app.request("POST", "/api/claim", "1.1.1.1", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.coupon(), "A");
    assert!(response.body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("A"));
    assert!(response.cookie_pair().starts_with("coupon_claimed="));
}

#[tokio::test]
async fn test_rotation_order_cooldown_and_wraparound() {
    let app = TestApp::new(&["A", "B", "C"]);

    let first = app.request("POST", "/api/claim", "1.1.1.1", None).await;
    assert_eq!(first.coupon(), "A");

    let second = app.request("POST", "/api/claim", "2.2.2.2", None).await;
    assert_eq!(second.coupon(), "B");

    // Same identity inside the hour: rejected with a countdown.
    let repeat = app.request("POST", "/api/claim", "1.1.1.1", None).await;
    assert_eq!(repeat.status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(repeat.body["error"], "ALREADY_CLAIMED_IDENTITY");
    let retry = repeat.body["details"]["retry_after_seconds"]
        .as_i64()
        .unwrap();
    assert!(retry > 0 && retry <= 3600);
    assert!(repeat.retry_after.is_some());

    let third = app.request("POST", "/api/claim", "3.3.3.3", None).await;
    assert_eq!(third.coupon(), "C");

    // Pool exhausted: the pointer wraps back to the first code.
    let fourth = app.request("POST", "/api/claim", "4.4.4.4", None).await;
    assert_eq!(fourth.coupon(), "A");
}

#[tokio::test]
async fn test_marker_cookie_blocks_claim_from_other_identity() {
    let app = TestApp::new(&["A", "B"]);

    let first = app.request("POST", "/api/claim", "1.1.1.1", None).await;
    let cookie = first.cookie_pair();

    let blocked = app
        .request("POST", "/api/claim", "9.9.9.9", Some(&cookie))
        .await;

    assert_eq!(blocked.status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(blocked.body["error"], "ALREADY_CLAIMED_SESSION");
}

#[tokio::test]
async fn test_garbage_cookie_is_ignored() {
    let app = TestApp::new(&["A", "B"]);

    let response = app
        .request(
            "POST",
            "/api/claim",
            "1.1.1.1",
            Some("coupon_claimed=tampered-value"),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.coupon(), "A");
}

#[tokio::test]
async fn test_empty_pool_is_a_server_error() {
    let app = TestApp::new(&[]);

    let response = app.request("POST", "/api/claim", "1.1.1.1", None).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], "POOL_EMPTY");
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = TestApp::new(&["A"]);

    let response = app.request("GET", "/api/health", "1.1.1.1", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}
