//! Eligibility record entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The most recent successful claim by one requester identity.
///
/// Overwritten (not appended) on each subsequent successful claim. A
/// record whose timestamp falls inside the cooldown window blocks new
/// claims from that identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct EligibilityRecord {
    /// Requester network identity.
    pub identity: String,
    /// Timestamp of the identity's last successful claim.
    pub last_claim_at: DateTime<Utc>,
}
