//! # Canonical Signing Payload
//!
//! The byte sequence that gets signed and later reconstructed:
//!
//! ```text
//! encode(MIB) || encode(SIB1 base) || timestamp (8 bytes, big-endian)
//! ```
//!
//! The concatenation order is part of the wire contract between signer and
//! verifier. Reordering it, or feeding in a post-extension SIB1 encoding,
//! is a breaking protocol change that fails verification silently.

use shared_types::{MasterInfoBlock, SysInfoBlock1};

use cs_01_sysinfo_codec as codec;

use crate::domain::errors::BroadcastAuthError;

/// Byte width of the timestamp field.
pub const TIMESTAMP_LEN: usize = 8;

/// Concatenates the already-encoded parts in canonical order.
pub fn canonical_payload(mib_bytes: &[u8], sib1_base_bytes: &[u8], timestamp_be: &[u8; 8]) -> Vec<u8> {
    let mut payload = Vec::with_capacity(mib_bytes.len() + sib1_base_bytes.len() + TIMESTAMP_LEN);
    payload.extend_from_slice(mib_bytes);
    payload.extend_from_slice(sib1_base_bytes);
    payload.extend_from_slice(timestamp_be);
    payload
}

/// Encodes both messages and builds the canonical payload for `timestamp`.
///
/// Shared by the signer and the structure-level verifier so the two sides
/// cannot drift apart.
pub fn encode_canonical_payload(
    mib: &MasterInfoBlock,
    sib1_base: &SysInfoBlock1,
    timestamp_be: &[u8; 8],
) -> Result<Vec<u8>, BroadcastAuthError> {
    let mib_bytes = codec::encode_mib(mib)?;
    let sib1_bytes = codec::encode_sib1_base(sib1_base)?;
    Ok(canonical_payload(&mib_bytes, &sib1_bytes, timestamp_be))
}
