//! Shared value types.

pub mod pool;

pub use pool::CouponPool;
