//! Claim handler — runs one claim attempt and maps the outcome to HTTP.

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration as CookieDuration;

use coupondrop_service::{ClaimOutcome, RejectReason};

use crate::dto::response::{ApiResponse, ClaimResponse};
use crate::error::{ApiError, ApiErrorResponse};
use crate::extractors::RequesterIdentity;
use crate::state::AppState;

use super::MARKER_COOKIE;

/// POST /api/claim
///
/// The session marker travels as an HttpOnly cookie; it is read on the way
/// in and replaced on success. Rejections map to 429, an empty pool to 500,
/// and store unavailability to 503 via the `ApiError` mapping.
pub async fn claim(
    State(state): State<AppState>,
    identity: RequesterIdentity,
    jar: CookieJar,
) -> Result<Response, ApiError> {
    let marker = jar.get(MARKER_COOKIE).map(|c| c.value().to_string());

    let outcome = state
        .claim_service
        .attempt_claim(&identity.0, marker.as_deref())
        .await?;

    Ok(match outcome {
        ClaimOutcome::Assigned { coupon, marker } => {
            let message = format!("Success! Your coupon is: {coupon}");
            let eligible_again_at = marker.expires_at;
            let cookie = Cookie::build((MARKER_COOKIE, marker.token))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .max_age(CookieDuration::seconds(
                    state.config.claim.cooldown_seconds as i64,
                ))
                .build();

            (
                jar.add(cookie),
                Json(ApiResponse::ok(ClaimResponse {
                    coupon,
                    message,
                    eligible_again_at,
                })),
            )
                .into_response()
        }
        ClaimOutcome::Rejected(RejectReason::AlreadyClaimedSession) => (
            StatusCode::TOO_MANY_REQUESTS,
            Json(ApiErrorResponse {
                error: "ALREADY_CLAIMED_SESSION".to_string(),
                message: "You have already claimed a coupon in this session.".to_string(),
                details: None,
            }),
        )
            .into_response(),
        ClaimOutcome::Rejected(RejectReason::AlreadyClaimedIdentity {
            retry_after_seconds,
        }) => (
            StatusCode::TOO_MANY_REQUESTS,
            [(header::RETRY_AFTER, retry_after_seconds.to_string())],
            Json(ApiErrorResponse {
                error: "ALREADY_CLAIMED_IDENTITY".to_string(),
                message: "You have already claimed a coupon. Please try again later.".to_string(),
                details: Some(serde_json::json!({
                    "retry_after_seconds": retry_after_seconds
                })),
            }),
        )
            .into_response(),
        ClaimOutcome::Rejected(RejectReason::PoolEmpty) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiErrorResponse {
                error: "POOL_EMPTY".to_string(),
                message: "No coupons available.".to_string(),
                details: None,
            }),
        )
            .into_response(),
    })
}
