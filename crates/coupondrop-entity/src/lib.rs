//! # coupondrop-entity
//!
//! Entity models shared between the store layer and the services.

pub mod assignment;
pub mod eligibility;

pub use assignment::{CouponAssignment, CreateAssignment};
pub use eligibility::EligibilityRecord;
