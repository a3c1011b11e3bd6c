//! # Broadcast Verifier
//!
//! Reconstructs the signer's canonical payload from a received broadcast
//! pair and checks the embedded signature.
//!
//! Verification is a pure function of its inputs: no mutation, no side
//! effects, safe to call concurrently and repeatedly. A failed check is an
//! ordinary result; only codec faults abort.

use shared_crypto::{Ed25519PublicKey, Ed25519Signature};
use shared_types::{MasterInfoBlock, NtpTimestamp};
use tracing::trace;

use cs_01_sysinfo_codec as codec;
use cs_01_sysinfo_codec::ReceivedSysInfoBlock1;

use crate::domain::entities::{AuthFailure, VerificationResult};
use crate::domain::errors::BroadcastAuthError;
use crate::domain::payload::encode_canonical_payload;

/// Verifies a decoded broadcast pair against the cell's public key.
///
/// The extension fields are validated before anything touches the
/// cryptographic primitive: an absent container or a wrong-length field is
/// classified as malformed and never verified.
///
/// # Errors
///
/// Only codec failures while re-encoding the messages abort; every
/// authentication outcome, including failure, is a [`VerificationResult`].
pub fn verify_broadcast(
    mib: &MasterInfoBlock,
    received: &ReceivedSysInfoBlock1,
    public_key: &Ed25519PublicKey,
) -> Result<VerificationResult, BroadcastAuthError> {
    // 1. Extension extraction and shape checks.
    let Some(raw) = &received.auth else {
        return Ok(VerificationResult::invalid(AuthFailure::ExtensionAbsent));
    };

    let Ok(timestamp_be) = <[u8; 8]>::try_from(raw.timestamp.as_slice()) else {
        return Ok(VerificationResult::invalid(AuthFailure::MalformedTimestamp {
            actual_len: raw.timestamp.len(),
        }));
    };

    let Ok(signature_bytes) = <[u8; 64]>::try_from(raw.signature.as_slice()) else {
        return Ok(VerificationResult::invalid(AuthFailure::MalformedSignature {
            actual_len: raw.signature.len(),
        }));
    };

    // 2. Payload reconstruction, reusing the received timestamp bytes
    //    verbatim.
    let payload = encode_canonical_payload(mib, &received.base, &timestamp_be)?;

    // 3. Cryptographic check. The result is returned directly; a failure
    //    here is "tampered or wrong key", nothing else.
    let timestamp = NtpTimestamp::from_be_bytes(timestamp_be);
    let signature = Ed25519Signature::from_bytes(signature_bytes);
    match public_key.verify(&payload, &signature) {
        Ok(()) => {
            trace!(ntp_seconds = timestamp.seconds(), "broadcast authenticated");
            Ok(VerificationResult::valid(timestamp))
        }
        Err(_) => Ok(VerificationResult::invalid_with_timestamp(
            AuthFailure::SignatureInvalid,
            timestamp,
        )),
    }
}

/// Byte-level verification entry: decodes both PDUs, then verifies.
///
/// # Errors
///
/// Decode failures propagate as [`BroadcastAuthError::Codec`], so callers
/// can tell "not our protocol" apart from "well-formed but tampered".
pub fn verify_broadcast_pdus(
    mib_pdu: &[u8],
    sib1_pdu: &[u8],
    public_key: &Ed25519PublicKey,
) -> Result<VerificationResult, BroadcastAuthError> {
    let mib = codec::decode_mib(mib_pdu)?;
    let received = codec::decode_sib1(sib1_pdu)?;
    verify_broadcast(&mib, &received, public_key)
}
