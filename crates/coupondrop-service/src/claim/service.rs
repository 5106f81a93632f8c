//! The claim coordinator.
//!
//! Orchestrates one atomic decision per request: reject or
//! assign-and-record. The coordinator is stateless and safe to replicate;
//! all shared allocation state lives behind the store traits.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{error, info, warn};

use coupondrop_auth::{MarkerIssuer, MarkerVerifier};
use coupondrop_core::config::claim::ClaimConfig;
use coupondrop_core::error::{AppError, ErrorKind};
use coupondrop_core::result::AppResult;
use coupondrop_core::types::CouponPool;
use coupondrop_database::{EligibilityStore, HistoryStore, RotationStore};
use coupondrop_entity::CreateAssignment;

use super::outcome::{ClaimOutcome, RejectReason};

/// Coordinates coupon claims against the durable store.
#[derive(Debug, Clone)]
pub struct ClaimService {
    pool: CouponPool,
    cooldown: Duration,
    rotation: Arc<dyn RotationStore>,
    eligibility: Arc<dyn EligibilityStore>,
    history: Arc<dyn HistoryStore>,
    issuer: Arc<MarkerIssuer>,
    verifier: Arc<MarkerVerifier>,
}

impl ClaimService {
    /// Creates a new claim coordinator.
    pub fn new(
        config: &ClaimConfig,
        pool: CouponPool,
        rotation: Arc<dyn RotationStore>,
        eligibility: Arc<dyn EligibilityStore>,
        history: Arc<dyn HistoryStore>,
        issuer: Arc<MarkerIssuer>,
        verifier: Arc<MarkerVerifier>,
    ) -> Self {
        Self {
            pool,
            cooldown: Duration::seconds(config.cooldown_seconds as i64),
            rotation,
            eligibility,
            history,
            issuer,
            verifier,
        }
    }

    /// Attempts one claim for the given requester identity.
    ///
    /// Check order is fixed, cheapest first:
    /// 1. session marker (local, no store access)
    /// 2. identity eligibility record
    /// 3. atomic rotation advance (the only shared-state mutation)
    /// 4. eligibility upsert
    /// 5. history append (best-effort)
    /// 6. marker mint
    pub async fn attempt_claim(
        &self,
        identity: &str,
        marker: Option<&str>,
    ) -> AppResult<ClaimOutcome> {
        if identity.is_empty() {
            return Err(AppError::validation("Requester identity must be non-empty"));
        }

        // (1) A valid marker blocks the claim regardless of identity.
        // Invalid or expired markers are treated as absent.
        if let Some(raw) = marker {
            if self.verifier.verify(raw).is_ok() {
                return Ok(ClaimOutcome::Rejected(RejectReason::AlreadyClaimedSession));
            }
        }

        let now = Utc::now();

        // (2) Identity-keyed cooldown gate.
        let record = self
            .eligibility
            .find(identity)
            .await
            .map_err(store_unavailable)?;

        if let Some(record) = record {
            let elapsed = now - record.last_claim_at;
            if elapsed < self.cooldown {
                let retry_after_seconds = self.cooldown.num_seconds() - elapsed.num_seconds();
                return Ok(ClaimOutcome::Rejected(RejectReason::AlreadyClaimedIdentity {
                    retry_after_seconds,
                }));
            }
        }

        if self.pool.is_empty() {
            return Ok(ClaimOutcome::Rejected(RejectReason::PoolEmpty));
        }

        // (3) The single indivisible allocation step: fetch-and-increment
        // modulo pool size inside the store. After this point the
        // allocation is final; there is no compensating undo.
        let index = self
            .rotation
            .advance(self.pool.len())
            .await
            .map_err(store_unavailable)?;

        let coupon = self
            .pool
            .get(index)
            .ok_or_else(|| {
                AppError::internal(format!("Rotation index {index} outside coupon pool"))
            })?
            .to_string();

        // (4) Record the claim so the identity gate holds for the cooldown.
        self.eligibility
            .record_claim(identity, now)
            .await
            .map_err(store_unavailable)?;

        // (5) Best-effort ledger append. The assignment already happened;
        // a failure here is logged for later repair, never surfaced, since
        // re-attempting the whole claim would double-allocate.
        let entry = CreateAssignment {
            coupon: coupon.clone(),
            identity: identity.to_string(),
        };
        if let Err(e) = self.history.append(&entry).await {
            error!(identity = %identity, coupon = %coupon, error = %e,
                "Failed to append assignment history entry");
        }

        // (6) Mint the client-held marker last.
        let marker = self.issuer.issue(now)?;

        info!(identity = %identity, coupon = %coupon, "Coupon assigned");
        Ok(ClaimOutcome::Assigned { coupon, marker })
    }
}

/// Collapses store errors into the single transient-failure outcome the
/// caller sees; the underlying detail is logged, not propagated.
fn store_unavailable(err: AppError) -> AppError {
    warn!(error = %err, "Durable store unavailable during claim");
    AppError::new(
        ErrorKind::ServiceUnavailable,
        "Coupon store is temporarily unavailable",
    )
}
