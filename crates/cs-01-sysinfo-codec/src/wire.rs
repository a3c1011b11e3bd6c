//! # Wire-Layer Views of Received Messages
//!
//! A received SIB1 keeps its extension fields exactly as they arrived:
//! variable-length byte strings, no length guarantees. Classifying a short
//! signature or timestamp as malformed is the authentication layer's job;
//! the codec only preserves what was on the air.

use serde::{Deserialize, Serialize};
use shared_types::{AuthExtension, SignedSysInfoBlock1, SysInfoBlock1};

/// Authentication extension as received: opaque byte strings of whatever
/// length the sender (or an attacker) put on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAuthExtension {
    /// Timestamp field bytes (8 when well-formed).
    pub timestamp: Vec<u8>,
    /// Signature field bytes (64 when well-formed).
    pub signature: Vec<u8>,
}

impl From<&AuthExtension> for RawAuthExtension {
    fn from(ext: &AuthExtension) -> Self {
        Self {
            timestamp: ext.timestamp_be.to_vec(),
            signature: ext.signature.to_vec(),
        }
    }
}

/// A decoded SIB1 PDU: the base message plus the extension container, if
/// the sender included one.
///
/// This is also the transport shape: [`crate::encode_sib1_signed`] writes
/// exactly this structure, so decode-then-reencode of the nested base is
/// guaranteed to reproduce the signer's pre-extension bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceivedSysInfoBlock1 {
    /// The pre-extension base message.
    pub base: SysInfoBlock1,
    /// The authentication extension, absent on unauthenticated broadcasts.
    pub auth: Option<RawAuthExtension>,
}

impl From<&SignedSysInfoBlock1> for ReceivedSysInfoBlock1 {
    fn from(signed: &SignedSysInfoBlock1) -> Self {
        Self {
            base: signed.base.clone(),
            auth: Some(RawAuthExtension::from(&signed.auth)),
        }
    }
}
