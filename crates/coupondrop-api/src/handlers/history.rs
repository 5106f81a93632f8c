//! History handler — read-only listing of the caller's past assignments.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, AssignmentResponse, HistoryResponse};
use crate::error::ApiError;
use crate::extractors::RequesterIdentity;
use crate::state::AppState;

/// GET /api/history
pub async fn history(
    State(state): State<AppState>,
    identity: RequesterIdentity,
) -> Result<Json<ApiResponse<HistoryResponse>>, ApiError> {
    let entries = state
        .history_service
        .list_for_identity(&identity.0)
        .await?;

    Ok(Json(ApiResponse::ok(HistoryResponse {
        history: entries.into_iter().map(AssignmentResponse::from).collect(),
    })))
}
