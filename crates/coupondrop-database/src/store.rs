//! Durable store traits backing the claim coordinator.
//!
//! The three traits map one-to-one onto the three durable records: the
//! rotation pointer singleton, the identity-keyed eligibility map, and the
//! append-only assignment ledger. Implementations must be safe to share
//! across concurrent claim attempts.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use coupondrop_core::result::AppResult;
use coupondrop_entity::{CouponAssignment, CreateAssignment, EligibilityRecord};

/// Atomic accessor for the rotation pointer.
#[async_trait]
pub trait RotationStore: Send + Sync + std::fmt::Debug {
    /// Atomically advances the pointer modulo `pool_size` and returns the
    /// pre-advance index, i.e. the index of the code to issue.
    ///
    /// `pool_size` must be non-zero; the coordinator rejects empty pools
    /// before ever reaching the store.
    ///
    /// Lazily initializes the pointer to 0 on the first-ever call. Both
    /// initialization and advancement must happen in a single atomic store
    /// operation: a separate read followed by a separate write admits a
    /// lost-update race where two claims receive the same code.
    async fn advance(&self, pool_size: u32) -> AppResult<u32>;
}

/// Accessor for the identity-keyed eligibility records.
///
/// The check and the record are intentionally separate operations so the
/// coordinator can run the check before allocating a code and the record
/// after. Two claims from the *same* identity racing between the two calls
/// may both pass the check; see DESIGN.md for why this is accepted.
#[async_trait]
pub trait EligibilityStore: Send + Sync + std::fmt::Debug {
    /// Returns the identity's eligibility record, if one exists.
    async fn find(&self, identity: &str) -> AppResult<Option<EligibilityRecord>>;

    /// Upserts the identity's record with the given claim timestamp.
    async fn record_claim(&self, identity: &str, at: DateTime<Utc>) -> AppResult<()>;
}

/// Accessor for the append-only assignment ledger.
#[async_trait]
pub trait HistoryStore: Send + Sync + std::fmt::Debug {
    /// Appends one assignment entry. Best-effort from the coordinator's
    /// perspective; callers decide whether a failure is fatal.
    async fn append(&self, entry: &CreateAssignment) -> AppResult<()>;

    /// Returns all entries for the identity in chronological order.
    async fn find_by_identity(&self, identity: &str) -> AppResult<Vec<CouponAssignment>>;
}
