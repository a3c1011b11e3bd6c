//! # Codec Errors

use thiserror::Error;

/// Errors that can occur while encoding or decoding broadcast messages.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    /// A logical message could not be serialized. Fatal to the broadcast
    /// cycle; nothing gets signed from partial bytes.
    #[error("Encoding failed: {0}")]
    Encode(String),

    /// Received bytes do not parse as a broadcast message. Distinct from a
    /// failed signature check: this is "not our protocol", not "tampered".
    #[error("Decoding failed: {0}")]
    Decode(String),
}
