//! # coupondrop-database
//!
//! PostgreSQL connection management, the durable store traits, their
//! concrete Postgres repositories, and an in-memory store for
//! single-process deployments and tests.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::{EligibilityStore, HistoryStore, RotationStore};
