//! Network alert signature verification
//!
//! Each network carries the public key whose holder may broadcast signed
//! alerts. Signatures are DER-encoded ECDSA over secp256k1, made over the
//! double SHA-256 of the serialized alert payload.

use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::{Signature, VerifyingKey};
use thiserror::Error;

use super::sha256d;

/// Alert key errors
#[derive(Debug, Error)]
pub enum AlertError {
    #[error("Invalid alert public key: {0}")]
    InvalidKey(String),
    #[error("Malformed alert signature: {0}")]
    MalformedSignature(String),
}

/// Parsed alert public key
#[derive(Debug, Clone)]
pub struct AlertKey(VerifyingKey);

impl AlertKey {
    /// Parse an SEC1-encoded (compressed or uncompressed) public key
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, AlertError> {
        VerifyingKey::from_sec1_bytes(bytes)
            .map(AlertKey)
            .map_err(|e| AlertError::InvalidKey(e.to_string()))
    }

    /// Check a DER signature over `payload`.
    ///
    /// High-S signatures are accepted, as the reference client never
    /// enforced low-S on alerts.
    pub fn verify(&self, payload: &[u8], der_signature: &[u8]) -> Result<bool, AlertError> {
        let signature = Signature::from_der(der_signature)
            .map_err(|e| AlertError::MalformedSignature(e.to_string()))?;
        let signature = signature.normalize_s().unwrap_or(signature);
        let digest = sha256d(payload);

        Ok(self.0.verify_prehash(&digest.0, &signature).is_ok())
    }
}
