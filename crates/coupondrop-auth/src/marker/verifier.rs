//! Session marker validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use coupondrop_core::config::claim::ClaimConfig;
use coupondrop_core::error::AppError;

use super::claims::MarkerClaims;

/// Validates session markers presented by clients.
///
/// Validation is purely local: signature check plus expiry, no store
/// access. A marker that fails either check is treated by callers as
/// absent, never as an error surfaced to the requester.
#[derive(Clone)]
pub struct MarkerVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for MarkerVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkerVerifier").finish_non_exhaustive()
    }
}

impl MarkerVerifier {
    /// Creates a new verifier from claim configuration.
    pub fn new(config: &ClaimConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // The marker gates claims for exactly the cooldown; no leeway.
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.marker_secret.as_bytes()),
            validation,
        }
    }

    /// Checks signature and expiry, returning the claims when valid.
    pub fn verify(&self, token: &str) -> Result<MarkerClaims, AppError> {
        decode::<MarkerClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::marker(format!("Invalid session marker: {e}")))
    }
}
