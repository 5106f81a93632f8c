//! In-memory store implementation.
//!
//! Implements all three store traits behind a single mutex. Suitable for a
//! single, non-restarting process and for tests; replicated deployments
//! must use the Postgres repositories, since a process-local pointer loses
//! allocation-order guarantees across replicas and restarts.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use coupondrop_core::result::AppResult;
use coupondrop_entity::{CouponAssignment, CreateAssignment, EligibilityRecord};

use crate::store::{EligibilityStore, HistoryStore, RotationStore};

#[derive(Debug, Default)]
struct MemoryState {
    next_index: u32,
    eligibility: HashMap<String, DateTime<Utc>>,
    history: Vec<CouponAssignment>,
}

/// In-memory implementation of the rotation, eligibility, and history stores.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RotationStore for MemoryStore {
    async fn advance(&self, pool_size: u32) -> AppResult<u32> {
        let mut state = self.state.lock().await;
        let issued = state.next_index % pool_size;
        state.next_index = (issued + 1) % pool_size;
        Ok(issued)
    }
}

#[async_trait]
impl EligibilityStore for MemoryStore {
    async fn find(&self, identity: &str) -> AppResult<Option<EligibilityRecord>> {
        let state = self.state.lock().await;
        Ok(state
            .eligibility
            .get(identity)
            .map(|last_claim_at| EligibilityRecord {
                identity: identity.to_string(),
                last_claim_at: *last_claim_at,
            }))
    }

    async fn record_claim(&self, identity: &str, at: DateTime<Utc>) -> AppResult<()> {
        let mut state = self.state.lock().await;
        state.eligibility.insert(identity.to_string(), at);
        Ok(())
    }
}

#[async_trait]
impl HistoryStore for MemoryStore {
    async fn append(&self, entry: &CreateAssignment) -> AppResult<()> {
        let mut state = self.state.lock().await;
        let id = state.history.len() as i64 + 1;
        state.history.push(CouponAssignment {
            id,
            coupon: entry.coupon.clone(),
            identity: entry.identity.clone(),
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn find_by_identity(&self, identity: &str) -> AppResult<Vec<CouponAssignment>> {
        let state = self.state.lock().await;
        Ok(state
            .history
            .iter()
            .filter(|entry| entry.identity == identity)
            .cloned()
            .collect())
    }
}
