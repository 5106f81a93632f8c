//! Claim gating and coupon pool configuration.

use serde::{Deserialize, Serialize};

/// Claim coordination configuration.
///
/// The cooldown is shared by both eligibility gates: the identity-keyed
/// record in the store and the validity window of the session marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimConfig {
    /// Minimum time between successful claims by the same requester, in seconds.
    #[serde(default = "default_cooldown")]
    pub cooldown_seconds: u64,
    /// Secret key for session marker signing (HMAC-SHA256).
    #[serde(default = "default_marker_secret")]
    pub marker_secret: String,
}

impl Default for ClaimConfig {
    fn default() -> Self {
        Self {
            cooldown_seconds: default_cooldown(),
            marker_secret: default_marker_secret(),
        }
    }
}

/// The ordered list of distributable coupon codes.
///
/// Fixed at deployment time; the rotation pointer indexes into this list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponPoolConfig {
    /// Coupon codes, issued in order.
    #[serde(default = "default_codes")]
    pub codes: Vec<String>,
}

impl Default for CouponPoolConfig {
    fn default() -> Self {
        Self {
            codes: default_codes(),
        }
    }
}

fn default_cooldown() -> u64 {
    3600
}

fn default_marker_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_codes() -> Vec<String> {
    vec![
        "COUPON1".to_string(),
        "COUPON2".to_string(),
        "COUPON3".to_string(),
        "COUPON4".to_string(),
    ]
}
