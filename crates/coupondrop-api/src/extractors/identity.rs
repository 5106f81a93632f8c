//! `RequesterIdentity` extractor — derives the claimer's network identity.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;

use coupondrop_core::error::AppError;

use crate::error::ApiError;

/// The requester's network identity as seen by the claim gates.
///
/// Taken from the first `X-Forwarded-For` entry when present (the service
/// normally sits behind a proxy), otherwise from the socket peer address.
/// Spoofable in both cases; an accepted weakness, not a fraud control.
#[derive(Debug, Clone)]
pub struct RequesterIdentity(pub String);

impl<S> FromRequestParts<S> for RequesterIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(forwarded) = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
        {
            let first = forwarded.split(',').next().map(str::trim).unwrap_or("");
            if !first.is_empty() {
                return Ok(Self(first.to_string()));
            }
        }

        if let Some(ConnectInfo(addr)) = parts.extensions.get::<ConnectInfo<SocketAddr>>() {
            return Ok(Self(addr.ip().to_string()));
        }

        Err(AppError::validation("Could not determine requester identity").into())
    }
}
