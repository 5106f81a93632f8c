//! Integration tests exercising the HTTP API end to end against the
//! in-memory store.

mod helpers;

mod claim_test;
mod history_test;
