//! # Domain Entities
//!
//! Verification outcome types and the encoded frame pair handed to the
//! radio layer.
//!
//! A failed authentication is an expected outcome of handling
//! attacker-controlled input, so it travels inside [`VerificationResult`]
//! as a value, never as a propagated error.

use shared_types::NtpTimestamp;
use thiserror::Error;

/// Why a received broadcast failed authentication.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthFailure {
    /// The SIB1 carried no authentication extension at all.
    #[error("Authentication extension absent")]
    ExtensionAbsent,

    /// The timestamp field is not exactly 8 bytes.
    #[error("Malformed timestamp field: expected 8 bytes, got {actual_len}")]
    MalformedTimestamp { actual_len: usize },

    /// The signature field is not exactly 64 bytes. Never handed to the
    /// verification primitive.
    #[error("Malformed signature field: expected 64 bytes, got {actual_len}")]
    MalformedSignature { actual_len: usize },

    /// The cryptographic check failed: the payload, the signature, or the
    /// key does not match.
    #[error("Signature invalid")]
    SignatureInvalid,
}

/// Result of verifying one received broadcast pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    /// Whether the broadcast authenticated successfully.
    pub valid: bool,
    /// The embedded broadcast timestamp, surfaced for caller-side
    /// freshness policies. Present whenever the timestamp field was
    /// well-formed, even if the signature check failed.
    pub timestamp: Option<NtpTimestamp>,
    /// Failure detail when `valid` is false.
    pub error: Option<AuthFailure>,
}

impl VerificationResult {
    /// Create a successful verification result.
    pub fn valid(timestamp: NtpTimestamp) -> Self {
        Self {
            valid: true,
            timestamp: Some(timestamp),
            error: None,
        }
    }

    /// Create a failed verification result.
    pub fn invalid(error: AuthFailure) -> Self {
        Self {
            valid: false,
            timestamp: None,
            error: Some(error),
        }
    }

    /// Failed signature check, but the timestamp field itself parsed.
    pub fn invalid_with_timestamp(error: AuthFailure, timestamp: NtpTimestamp) -> Self {
        Self {
            valid: false,
            timestamp: Some(timestamp),
            error: Some(error),
        }
    }
}

/// The encoded broadcast pair, ready for the lower layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastFrames {
    /// Encoded MIB PDU.
    pub mib_pdu: Vec<u8>,
    /// Encoded signed SIB1 PDU.
    pub sib1_pdu: Vec<u8>,
}
