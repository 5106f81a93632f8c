//! # coupondrop-auth
//!
//! Session marker issuance and validation. The marker is a client-held,
//! HMAC-signed token proving a recent successful claim, independent of the
//! requester's network identity.

pub mod marker;

pub use marker::claims::MarkerClaims;
pub use marker::issuer::{IssuedMarker, MarkerIssuer};
pub use marker::verifier::MarkerVerifier;
