//! Claim coordination.

pub mod outcome;
pub mod service;
