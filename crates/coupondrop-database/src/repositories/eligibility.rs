//! Eligibility record repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use coupondrop_core::error::{AppError, ErrorKind};
use coupondrop_core::result::AppResult;
use coupondrop_entity::EligibilityRecord;

use crate::store::EligibilityStore;

/// Postgres-backed eligibility record accessor.
#[derive(Debug, Clone)]
pub struct EligibilityRepository {
    pool: PgPool,
}

impl EligibilityRepository {
    /// Create a new eligibility repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EligibilityStore for EligibilityRepository {
    async fn find(&self, identity: &str) -> AppResult<Option<EligibilityRecord>> {
        sqlx::query_as::<_, EligibilityRecord>(
            "SELECT identity, last_claim_at FROM eligibility_records WHERE identity = $1",
        )
        .bind(identity)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find eligibility record", e)
        })
    }

    async fn record_claim(&self, identity: &str, at: DateTime<Utc>) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO eligibility_records (identity, last_claim_at) VALUES ($1, $2) \
             ON CONFLICT (identity) DO UPDATE SET last_claim_at = EXCLUDED.last_claim_at",
        )
        .bind(identity)
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to record claim", e)
        })?;
        Ok(())
    }
}
