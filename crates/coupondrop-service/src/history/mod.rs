//! Assignment history queries.

pub mod service;
