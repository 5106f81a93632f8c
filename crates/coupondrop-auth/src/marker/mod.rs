//! Session marker (signed claim token) handling.

pub mod claims;
pub mod issuer;
pub mod verifier;
