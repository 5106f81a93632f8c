//! Claims embedded in every session marker.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session marker claims payload.
///
/// Deliberately carries no requester identity: the marker gates the
/// *client* holding it, regardless of which network identity presents it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerClaims {
    /// Marker ID.
    pub jti: Uuid,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl MarkerClaims {
    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }
}
