//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use coupondrop_api::AppState;
use coupondrop_auth::{MarkerIssuer, MarkerVerifier};
use coupondrop_core::config::AppConfig;
use coupondrop_core::types::CouponPool;
use coupondrop_database::memory::MemoryStore;
use coupondrop_database::{EligibilityStore, HistoryStore, RotationStore};
use coupondrop_service::{ClaimService, HistoryService};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

/// Decoded response from a test request
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub set_cookie: Option<String>,
    pub retry_after: Option<String>,
}

impl TestApp {
    /// Create a test application over the given pool with the default
    /// one-hour cooldown.
    pub fn new(codes: &[&str]) -> Self {
        Self::with_cooldown(codes, 3600)
    }

    /// Create a test application with an explicit cooldown.
    pub fn with_cooldown(codes: &[&str], cooldown_seconds: u64) -> Self {
        let mut config = AppConfig::default();
        config.coupons.codes = codes.iter().map(|c| c.to_string()).collect();
        config.claim.cooldown_seconds = cooldown_seconds;
        config.claim.marker_secret = "integration-test-secret".to_string();

        let store = Arc::new(MemoryStore::new());

        let claim_service = Arc::new(ClaimService::new(
            &config.claim,
            CouponPool::from(&config.coupons),
            Arc::clone(&store) as Arc<dyn RotationStore>,
            Arc::clone(&store) as Arc<dyn EligibilityStore>,
            Arc::clone(&store) as Arc<dyn HistoryStore>,
            Arc::new(MarkerIssuer::new(&config.claim)),
            Arc::new(MarkerVerifier::new(&config.claim)),
        ));
        let history_service = Arc::new(HistoryService::new(
            Arc::clone(&store) as Arc<dyn HistoryStore>,
        ));

        let state = AppState {
            config: Arc::new(config),
            claim_service,
            history_service,
        };

        Self {
            router: coupondrop_api::build_router(state),
        }
    }

    /// Send a request with the given requester identity and optional
    /// `Cookie` header value.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        identity: &str,
        cookie: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder()
            .method(method)
            .uri(path)
            .header("x-forwarded-for", identity);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = builder.body(Body::empty()).expect("valid request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("request should not fail at the transport level");

        let status = response.status();
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let retry_after = response
            .headers()
            .get(header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("JSON body")
        };

        TestResponse {
            status,
            body,
            set_cookie,
            retry_after,
        }
    }
}

impl TestResponse {
    /// Returns the `name=value` pair of the marker cookie for resending.
    pub fn cookie_pair(&self) -> String {
        self.set_cookie
            .as_deref()
            .and_then(|c| c.split(';').next())
            .expect("response should carry a Set-Cookie header")
            .to_string()
    }

    /// Returns `data.coupon` from a successful claim body.
    pub fn coupon(&self) -> &str {
        self.body["data"]["coupon"]
            .as_str()
            .expect("claim response should contain a coupon")
    }
}
