//! Session marker creation with configurable signing and TTL.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use coupondrop_core::config::claim::ClaimConfig;
use coupondrop_core::error::AppError;

use super::claims::MarkerClaims;

/// Creates signed session markers.
#[derive(Clone)]
pub struct MarkerIssuer {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Marker validity in seconds; equals the claim cooldown.
    ttl_seconds: i64,
}

impl std::fmt::Debug for MarkerIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkerIssuer")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish_non_exhaustive()
    }
}

/// A freshly minted session marker ready to hand to the client.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IssuedMarker {
    /// The signed token.
    pub token: String,
    /// When the marker stops blocking further claims.
    pub expires_at: DateTime<Utc>,
}

impl MarkerIssuer {
    /// Creates a new issuer from claim configuration.
    pub fn new(config: &ClaimConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.marker_secret.as_bytes()),
            ttl_seconds: config.cooldown_seconds as i64,
        }
    }

    /// Mints a marker valid for exactly the cooldown duration from `now`.
    pub fn issue(&self, now: DateTime<Utc>) -> Result<IssuedMarker, AppError> {
        let expires_at = now + chrono::Duration::seconds(self.ttl_seconds);

        let claims = MarkerClaims {
            jti: Uuid::new_v4(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::marker(format!("Failed to encode session marker: {e}")))?;

        Ok(IssuedMarker { token, expires_at })
    }
}
