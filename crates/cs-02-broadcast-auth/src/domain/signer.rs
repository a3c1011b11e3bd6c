//! # Broadcast Signer
//!
//! Seals one broadcast cycle: encodes the message pair, signs the canonical
//! payload, and produces the signed SIB1 snapshot for transmission.

use shared_crypto::Ed25519KeyPair;
use shared_types::{
    AuthExtension, MasterInfoBlock, NtpTimestamp, SignedBroadcast, SignedSysInfoBlock1,
    SysInfoBlock1,
};
use tracing::trace;

use crate::domain::errors::BroadcastAuthError;
use crate::domain::payload::encode_canonical_payload;

/// Signs one broadcast cycle.
///
/// The inputs are immutable views: `sib1_base` is the pre-extension message
/// exactly as it will be encoded into the payload, and the returned
/// [`SignedSysInfoBlock1`] nests that same value untouched. Nothing is
/// re-signed or re-encoded after the extension is populated.
///
/// Signing with a fresh timestamp each cycle yields a fresh, independently
/// valid signature; nothing here assumes the primitive is deterministic.
///
/// # Errors
///
/// Fails only when the codec cannot encode a message. Partial bytes are
/// never signed.
pub fn sign_broadcast(
    mib: &MasterInfoBlock,
    sib1_base: &SysInfoBlock1,
    keypair: &Ed25519KeyPair,
    timestamp: NtpTimestamp,
) -> Result<SignedBroadcast, BroadcastAuthError> {
    let timestamp_be = timestamp.to_be_bytes();
    let payload = encode_canonical_payload(mib, sib1_base, &timestamp_be)?;

    let signature = keypair.sign(&payload);
    trace!(
        payload_len = payload.len(),
        ntp_seconds = timestamp.seconds(),
        "signed broadcast payload"
    );

    Ok(SignedBroadcast {
        mib: mib.clone(),
        sib1: SignedSysInfoBlock1 {
            base: sib1_base.clone(),
            auth: AuthExtension {
                timestamp_be,
                signature: *signature.as_bytes(),
            },
        },
    })
}
