//! # coupondrop-api
//!
//! HTTP API layer for CouponDrop built on Axum.
//!
//! Provides the claim and history endpoints, the requester-identity
//! extractor, session marker cookie handling, DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
