//! # Broadcast Message Codec
//!
//! Fixed-width bincode encoding of the broadcast messages. For a given
//! logical message the output bytes are identical on every call, which is
//! what makes the signing payload reproducible on the receiving side.
//!
//! Two encodings exist for SIB1 and they are not interchangeable:
//!
//! - the **base** encoding (`encode_sib1_base`) covers the pre-extension
//!   message and is the signing input;
//! - the **signed** encoding (`encode_sib1_signed`) is the transmission
//!   form, nesting the untouched base next to the extension container.

use shared_types::{MasterInfoBlock, SignedSysInfoBlock1, SysInfoBlock1};

use crate::errors::CodecError;
use crate::wire::ReceivedSysInfoBlock1;

/// Encode the MIB into its canonical transmission bytes.
pub fn encode_mib(mib: &MasterInfoBlock) -> Result<Vec<u8>, CodecError> {
    bincode::serialize(mib).map_err(|e| CodecError::Encode(e.to_string()))
}

/// Encode the pre-extension SIB1 base. This exact byte sequence enters the
/// signed payload; any change here is a breaking protocol change.
pub fn encode_sib1_base(sib1: &SysInfoBlock1) -> Result<Vec<u8>, CodecError> {
    bincode::serialize(sib1).map_err(|e| CodecError::Encode(e.to_string()))
}

/// Encode a signed SIB1 for transmission.
pub fn encode_sib1_signed(signed: &SignedSysInfoBlock1) -> Result<Vec<u8>, CodecError> {
    let transport = ReceivedSysInfoBlock1::from(signed);
    bincode::serialize(&transport).map_err(|e| CodecError::Encode(e.to_string()))
}

/// Decode a received MIB PDU.
pub fn decode_mib(bytes: &[u8]) -> Result<MasterInfoBlock, CodecError> {
    bincode::deserialize(bytes).map_err(|e| CodecError::Decode(e.to_string()))
}

/// Decode a received SIB1 PDU, preserving extension field bytes as-is.
pub fn decode_sib1(bytes: &[u8]) -> Result<ReceivedSysInfoBlock1, CodecError> {
    bincode::deserialize(bytes).map_err(|e| CodecError::Decode(e.to_string()))
}
