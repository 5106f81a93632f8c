//! # coupondrop-service
//!
//! Domain services: the claim coordinator orchestrating the dual
//! eligibility gates and the atomic rotation advance, and the read-only
//! history query path.

pub mod claim;
pub mod history;

pub use claim::outcome::{ClaimOutcome, RejectReason};
pub use claim::service::ClaimService;
pub use history::service::HistoryService;
