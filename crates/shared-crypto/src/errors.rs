//! # Crypto Errors
//!
//! Error types for key handling and signature operations.

use thiserror::Error;

/// Errors that can occur in key handling and signature operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// The bytes do not decode to a valid Ed25519 public key point.
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// Key or signature buffer has the wrong length. Configuration fault,
    /// fatal at startup, never retried.
    #[error("Invalid key material: expected {expected} bytes, got {actual}")]
    InvalidKeyMaterial { expected: usize, actual: usize },

    /// Hex decoding of configured key material failed.
    #[error("Invalid hex encoding: {0}")]
    InvalidHex(String),

    /// Signature verification failed.
    #[error("Signature verification failed")]
    SignatureVerificationFailed,

    /// The sign-then-verify self-test failed for the supplied key pair.
    #[error("Key self-test failed: {0}")]
    SelfTestFailed(String),
}
