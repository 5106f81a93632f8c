//! Read-only history query path.

use std::sync::Arc;

use coupondrop_core::result::AppResult;
use coupondrop_database::HistoryStore;
use coupondrop_entity::CouponAssignment;

/// Serves the per-identity assignment history. No side effects and no
/// eligibility gating; rejections never apply here.
#[derive(Debug, Clone)]
pub struct HistoryService {
    history: Arc<dyn HistoryStore>,
}

impl HistoryService {
    /// Creates a new history service.
    pub fn new(history: Arc<dyn HistoryStore>) -> Self {
        Self { history }
    }

    /// Returns the identity's past assignments in chronological order.
    pub async fn list_for_identity(&self, identity: &str) -> AppResult<Vec<CouponAssignment>> {
        self.history.find_by_identity(identity).await
    }
}
