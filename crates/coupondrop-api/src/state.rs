//! Application state shared across all handlers.

use std::sync::Arc;

use coupondrop_core::config::AppConfig;
use coupondrop_service::{ClaimService, HistoryService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Claim coordinator.
    pub claim_service: Arc<ClaimService>,
    /// History query service.
    pub history_service: Arc<HistoryService>,
}
