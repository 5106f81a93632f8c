//! Typed outcomes of a claim attempt.
//!
//! Rejections are expected, user-facing results; only store failures
//! travel as errors.

use coupondrop_auth::IssuedMarker;

/// Result of one claim attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum ClaimOutcome {
    /// All gates passed; a code was atomically reserved and recorded.
    Assigned {
        /// The issued coupon code.
        coupon: String,
        /// Fresh session marker for the client to hold.
        marker: IssuedMarker,
    },
    /// A gate rejected the attempt; no allocation state was touched.
    Rejected(RejectReason),
}

/// Why a claim attempt was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The client presented a currently valid session marker.
    AlreadyClaimedSession,
    /// The requester identity claimed within the cooldown window.
    AlreadyClaimedIdentity {
        /// Whole seconds until the identity becomes eligible again.
        retry_after_seconds: i64,
    },
    /// The coupon pool has zero entries; a configuration-level condition.
    PoolEmpty,
}
