//! Rotation pointer repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use coupondrop_core::error::{AppError, ErrorKind};
use coupondrop_core::result::AppResult;

use crate::store::RotationStore;

/// Postgres-backed rotation pointer accessor.
///
/// The pointer lives in a single-row table. Advancement is one
/// `INSERT ... ON CONFLICT DO UPDATE ... RETURNING` statement, so the
/// lazy initialization and the increment are a single atomic operation
/// against the database; no application-level read-then-write exists.
#[derive(Debug, Clone)]
pub struct RotationRepository {
    pool: PgPool,
}

/// The singleton row id for the rotation pointer.
const POINTER_ID: i16 = 0;

impl RotationRepository {
    /// Create a new rotation repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RotationStore for RotationRepository {
    async fn advance(&self, pool_size: u32) -> AppResult<u32> {
        // The row stores the index of the *next* code to issue. The upsert
        // returns the post-advance value; the issued index is one step
        // behind it, modulo pool size. A concurrent first-ever call loses
        // the insert race and lands in the conflict arm, so both callers
        // still observe distinct indices.
        let next: i64 = sqlx::query_scalar(
            "INSERT INTO coupon_rotation (id, next_index) VALUES ($1, 1 % $2) \
             ON CONFLICT (id) DO UPDATE SET next_index = (coupon_rotation.next_index + 1) % $2 \
             RETURNING next_index",
        )
        .bind(POINTER_ID)
        .bind(i64::from(pool_size))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to advance rotation pointer", e)
        })?;

        Ok((next - 1).rem_euclid(i64::from(pool_size)) as u32)
    }
}
