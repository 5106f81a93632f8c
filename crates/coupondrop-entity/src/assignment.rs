//! Coupon assignment history entry models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An immutable history ledger entry recording one successful assignment.
///
/// Entries are append-only: never mutated or deleted once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CouponAssignment {
    /// Unique ledger entry identifier.
    pub id: i64,
    /// The coupon code that was issued.
    pub coupon: String,
    /// Requester network identity the code was issued to.
    pub identity: String,
    /// When the assignment happened.
    pub created_at: DateTime<Utc>,
}

/// Data required to append a new ledger entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAssignment {
    /// The coupon code that was issued.
    pub coupon: String,
    /// Requester network identity the code was issued to.
    pub identity: String,
}
