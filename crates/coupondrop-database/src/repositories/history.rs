//! Assignment history ledger repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use coupondrop_core::error::{AppError, ErrorKind};
use coupondrop_core::result::AppResult;
use coupondrop_entity::{CouponAssignment, CreateAssignment};

use crate::store::HistoryStore;

/// Postgres-backed append-only assignment ledger.
#[derive(Debug, Clone)]
pub struct HistoryRepository {
    pool: PgPool,
}

impl HistoryRepository {
    /// Create a new history repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HistoryStore for HistoryRepository {
    async fn append(&self, entry: &CreateAssignment) -> AppResult<()> {
        sqlx::query("INSERT INTO assignment_history (coupon, identity) VALUES ($1, $2)")
            .bind(&entry.coupon)
            .bind(&entry.identity)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to append history entry", e)
            })?;
        Ok(())
    }

    async fn find_by_identity(&self, identity: &str) -> AppResult<Vec<CouponAssignment>> {
        sqlx::query_as::<_, CouponAssignment>(
            "SELECT id, coupon, identity, created_at FROM assignment_history \
             WHERE identity = $1 ORDER BY id ASC",
        )
        .bind(identity)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to query assignment history", e)
        })
    }
}
