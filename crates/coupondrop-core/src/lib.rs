//! # coupondrop-core
//!
//! Core crate for CouponDrop. Contains configuration schemas, the coupon
//! pool value type, and the unified error system.
//!
//! This crate has **no** internal dependencies on other CouponDrop crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
