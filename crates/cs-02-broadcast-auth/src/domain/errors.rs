//! # Broadcast Authentication Errors
//!
//! Faults that abort an operation, as opposed to the expected
//! verification outcomes carried by
//! [`crate::domain::entities::VerificationResult`].

use cs_01_sysinfo_codec::CodecError;
use shared_crypto::CryptoError;
use thiserror::Error;

/// Errors that abort signing or verification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BroadcastAuthError {
    /// The codec could not encode or decode a message. On the sign path
    /// this kills the broadcast cycle; on the verify path it means the
    /// received bytes are not our protocol.
    #[error("Codec failure: {0}")]
    Codec(#[from] CodecError),

    /// Key material is unusable (wrong length, bad hex, failed self-test).
    /// Configuration fault, surfaced at startup, never retried.
    #[error("Key material fault: {0}")]
    KeyMaterial(#[from] CryptoError),

    /// Handing the frames to the lower layers failed.
    #[error("Transmission failed: {0}")]
    Transmit(String),
}
