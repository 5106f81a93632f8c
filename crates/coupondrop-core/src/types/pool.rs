//! The in-memory coupon pool.

use crate::config::claim::CouponPoolConfig;

/// The fixed, ordered set of distributable coupon codes.
///
/// The pool itself is immutable process-local data; only the rotation
/// pointer into it lives in the durable store.
#[derive(Debug, Clone)]
pub struct CouponPool {
    codes: Vec<String>,
}

impl CouponPool {
    /// Creates a pool from an ordered list of codes.
    pub fn new(codes: Vec<String>) -> Self {
        Self { codes }
    }

    /// Number of codes in the pool.
    pub fn len(&self) -> u32 {
        self.codes.len() as u32
    }

    /// Whether the pool has no codes. An empty pool means no claim can
    /// ever succeed.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Returns the code at the given rotation index.
    pub fn get(&self, index: u32) -> Option<&str> {
        self.codes.get(index as usize).map(String::as_str)
    }
}

impl From<&CouponPoolConfig> for CouponPool {
    fn from(config: &CouponPoolConfig) -> Self {
        Self::new(config.codes.clone())
    }
}
