//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use coupondrop_entity::CouponAssignment;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Successful claim response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimResponse {
    /// The issued coupon code.
    pub coupon: String,
    /// Human-readable confirmation.
    pub message: String,
    /// When the requester becomes eligible to claim again.
    pub eligible_again_at: DateTime<Utc>,
}

/// One past assignment in a history response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentResponse {
    /// The coupon code that was issued.
    pub coupon: String,
    /// When it was issued.
    pub claimed_at: DateTime<Utc>,
}

impl From<CouponAssignment> for AssignmentResponse {
    fn from(entry: CouponAssignment) -> Self {
        Self {
            coupon: entry.coupon,
            claimed_at: entry.created_at,
        }
    }
}

/// History listing for one requester identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    /// Past assignments in chronological order.
    pub history: Vec<AssignmentResponse>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
