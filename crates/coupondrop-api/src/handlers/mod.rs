//! HTTP request handlers.

pub mod claim;
pub mod health;
pub mod history;

/// Name of the cookie carrying the session marker.
pub const MARKER_COOKIE: &str = "coupon_claimed";
